use std::sync::Arc;

use inventario_storage::InventoryStore;

use crate::config::ServerConfig;

/// Shared handles available to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InventoryStore>,
    pub api_token: Arc<String>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<InventoryStore>, config: ServerConfig) -> Self {
        Self {
            store,
            api_token: Arc::new(config.api_token.clone()),
            config: Arc::new(config),
        }
    }
}
