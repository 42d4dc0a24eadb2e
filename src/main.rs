use std::sync::Arc;

use auth_gate::backend::HttpBackend;
use auth_gate::config::{app_port, BackendConfig};
use auth_gate::{app, docs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env();
    init_tracing();

    let backend_config = BackendConfig::from_env()?;
    tracing::info!("proxying authorization checks to {}", backend_config.base_url);

    let backend = Arc::new(HttpBackend::new(&backend_config));
    let router = app::create_app(backend).merge(docs::swagger_routes());

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], app_port()));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

fn load_env() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let crate_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    let _ = dotenvy::from_path(crate_env);
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
