use super::{cors_config, server_config::ServerConfig, warehouse_config::WarehouseConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub warehouse: WarehouseConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            warehouse: WarehouseConfig::from_env(),
        }
    }
}
