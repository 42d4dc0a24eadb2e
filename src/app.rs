use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::AuthService;
use crate::authz::PolicyTable;
use crate::backend::Backend;
use crate::routes::{auth, health};

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(backend: Arc<dyn Backend>, policy: Arc<PolicyTable>) -> Self {
        let auth = Arc::new(AuthService::new(backend.clone(), policy));
        Self { backend, auth }
    }
}

pub fn create_app(backend: Arc<dyn Backend>) -> Router {
    let state = AppState::new(backend, Arc::new(PolicyTable::default()));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    let auth_routes = Router::new()
        .route("/check", get(auth::check))
        .route("/check-url", get(auth::check_url));

    Router::new()
        .nest("/auth", auth_routes)
        .route("/api/health", get(health::health))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
