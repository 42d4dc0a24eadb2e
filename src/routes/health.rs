use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app::AppState;
use crate::errors::AppResult;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend_ok: bool,
    pub backend_error: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Health check", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    // Lightweight backend reachability check
    let probe = state.backend.head("/", &HeaderMap::new()).await;

    match probe {
        Ok(_) => Ok(Json(HealthResponse {
            status: "ok",
            backend_ok: true,
            backend_error: None,
        })),
        Err(err) => Ok(Json(HealthResponse {
            status: "ok",
            backend_ok: false,
            backend_error: Some(err.to_string()),
        })),
    }
}
