#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use auth_gate::backend::{Backend, BackendError};
use axum::http::HeaderMap;
use serde_json::{json, Value};

/// Canned backend for driving the router without a real database.
pub struct StubBackend {
    responses: HashMap<String, Value>,
    transport_failures: HashSet<String>,
    head_status: u16,
    calls: Mutex<Vec<String>>,
}

impl Default for StubBackend {
    fn default() -> Self {
        Self {
            responses: HashMap::new(),
            transport_failures: HashSet::new(),
            head_status: 200,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl StubBackend {
    pub fn with_session(mut self, name: Option<&str>, roles: &[&str]) -> Self {
        self.responses.insert(
            "/_session".to_string(),
            json!({ "ok": true, "userCtx": { "name": name, "roles": roles } }),
        );
        self
    }

    pub fn with_profile(mut self, name: &str, facility_id: Option<&str>) -> Self {
        let mut doc = json!({ "_id": format!("org.couchdb.user:{name}") });
        if let Some(facility_id) = facility_id {
            doc["facility_id"] = json!(facility_id);
        }
        self.responses
            .insert(format!("/_users/org.couchdb.user:{name}"), doc);
        self
    }

    pub fn with_head_status(mut self, status: u16) -> Self {
        self.head_status = status;
        self
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.transport_failures.insert(path.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Backend for StubBackend {
    async fn get_json(&self, path: &str, _headers: &HeaderMap) -> Result<Value, BackendError> {
        self.calls.lock().unwrap().push(format!("GET {path}"));
        if self.transport_failures.contains(path) {
            return Err(BackendError::Transport("connection refused".to_string()));
        }
        self.responses
            .get(path)
            .cloned()
            .ok_or(BackendError::InvalidBody)
    }

    async fn head(&self, path: &str, _headers: &HeaderMap) -> Result<u16, BackendError> {
        self.calls.lock().unwrap().push(format!("HEAD {path}"));
        if self.transport_failures.contains(path) {
            return Err(BackendError::Transport("connection refused".to_string()));
        }
        Ok(self.head_status)
    }
}
