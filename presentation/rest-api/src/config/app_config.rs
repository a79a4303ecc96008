use super::{cors_config, server_config::ServerConfig, storage_config::StorageConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server = ServerConfig::from_env();
        let storage = StorageConfig::from_env(&server);
        Self {
            server,
            cors: cors_config::init_cors(),
            storage,
        }
    }
}
