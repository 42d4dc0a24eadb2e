use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app::AppState;
use crate::auth::AccessGrant;
use crate::errors::{AppResult, ErrorResponse};

#[derive(Debug, Deserialize)]
pub struct CheckParams {
    pub permission: Option<String>,
    pub district: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckUrlParams {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UrlStatus {
    pub status: u16,
}

#[utoipa::path(
    get,
    path = "/auth/check",
    tag = "Auth",
    params(
        ("permission" = Option<String>, Query, description = "Permission name to check"),
        ("district" = Option<String>, Query, description = "District the caller wants to operate on"),
    ),
    responses(
        (status = 200, description = "Caller may proceed", body = AccessGrant),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 403, description = "Insufficient privileges", body = ErrorResponse),
        (status = 500, description = "Backend failure after authentication", body = ErrorResponse)
    )
)]
pub async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CheckParams>,
) -> AppResult<Json<AccessGrant>> {
    let permission = params.permission.unwrap_or_default();
    // an empty district means the caller did not ask for one
    let district = params.district.as_deref().filter(|district| !district.is_empty());

    let grant = state
        .auth
        .check_permission(&headers, &permission, district)
        .await?;

    Ok(Json(grant))
}

#[utoipa::path(
    get,
    path = "/auth/check-url",
    tag = "Auth",
    params(
        ("path" = Option<String>, Query, description = "Backend path to probe with the caller's credentials"),
    ),
    responses(
        (status = 200, description = "Raw backend status for the probed path", body = UrlStatus),
        (status = 400, description = "No path given", body = ErrorResponse),
        (status = 500, description = "Backend unreachable", body = ErrorResponse)
    )
)]
pub async fn check_url(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CheckUrlParams>,
) -> AppResult<Json<UrlStatus>> {
    let status = state.auth.check_url(&headers, params.path.as_deref()).await?;
    Ok(Json(UrlStatus { status }))
}
