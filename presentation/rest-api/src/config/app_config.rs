use super::{
    backend_config::BackendConfig, cors_config, server_config::ServerConfig,
    storage_config::ChatStorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub backend: BackendConfig,
    pub chat_storage: ChatStorageConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            backend: BackendConfig::from_env(),
            chat_storage: ChatStorageConfig::from_env(),
        }
    }
}
