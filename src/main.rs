mod config;
mod routes;

use config::{ConfigError, HostConfig};
use routes::RouterError;
use routes::proxy::{ApiProxy, ProxyError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Proxy(#[from] ProxyError),
    #[error(transparent)]
    Router(#[from] RouterError),
    #[error("listener: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let proxy = ApiProxy::new(config.api_upstream_url.clone(), config.api_timeout)?;
    tracing::info!(upstream = proxy.upstream(), timeout_secs = config.api_timeout.as_secs(), "api proxy configured");

    let app = routes::app(proxy)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, "voicelab listening");
    axum::serve(listener, app).await?;
    Ok(())
}
