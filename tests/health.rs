mod common;

use std::sync::Arc;

use anyhow::Result;
use auth_gate::create_app;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt;

use common::StubBackend;

#[tokio::test]
async fn health_reports_backend_reachability() -> Result<()> {
    let backend = Arc::new(StubBackend::default());
    let app = create_app(backend);

    let req = Request::builder().uri("/api/health").body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend_ok"], true);

    Ok(())
}

#[tokio::test]
async fn health_stays_200_when_the_backend_is_down() -> Result<()> {
    let backend = Arc::new(StubBackend::default().failing("/"));
    let app = create_app(backend);

    let req = Request::builder().uri("/api/health").body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["backend_ok"], false);
    assert_eq!(body["backend_error"], "connection refused");

    Ok(())
}
