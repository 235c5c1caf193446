mod config;
mod error;
mod routes;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let app = routes::app(routes::leptos_options()?);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(HostError::Bind)?;

    tracing::info!(addr = %config.bind_addr, "tokengate listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
