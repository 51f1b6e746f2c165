use std::sync::Arc;

use anyhow::Result;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use inventario_server::app;
use inventario_server::config::ServerConfig;
use inventario_server::state::AppState;
use inventario_storage::InventoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("inventario_server=info".parse()?)
                .add_directive("inventario_storage=info".parse()?),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let http_addr = config.http_addr();

    tracing::info!(http_port = config.http_port, "inventario-server starting");

    let store = Arc::new(InventoryStore::connect(&config.database_url).await?);
    let state = AppState::new(store, config);
    let app = app::build_http_app(state);

    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    tracing::info!(http = %http_addr, "Server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            signal::ctrl_c().await.ok();
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
