use crate::errors::AppError;

/// Where the proxied document database lives. The gateway holds no
/// credentials for it; every outbound call rides on the caller's own
/// forwarded headers.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = std::env::var("BACKEND_URL")
            .map_err(|_| AppError::configuration("BACKEND_URL not set"))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

pub fn app_port() -> u16 {
    std::env::var("APP_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8000)
}
