use serde::Deserialize;

/// Body of the backend's `GET /_session` response. Only the authenticated
/// user context matters here; everything else in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    #[serde(rename = "userCtx", default)]
    pub user_ctx: Option<SessionUserCtx>,
}

/// The session's user context. An anonymous session comes back with a null
/// name, so both fields stay optional at the wire level.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUserCtx {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}
