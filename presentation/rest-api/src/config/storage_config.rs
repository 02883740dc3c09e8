use std::env;
use std::path::PathBuf;

use persistence::storage::{StorageConfig, prepare_storage_dir};

/// Where the chat transcript is kept between restarts.
#[derive(Debug, Clone)]
pub struct ChatStorageConfig {
    pub directory: PathBuf,
}

impl ChatStorageConfig {
    /// Environment variables:
    /// - CHAT_STORAGE_DIR: Directory for the transcript file (default: "./data")
    pub fn from_env() -> Self {
        let directory = env::var("CHAT_STORAGE_DIR").unwrap_or_else(|_| "./data".to_string());
        Self {
            directory: PathBuf::from(directory),
        }
    }
}

/// Initialize the storage directory
///
/// # Errors
/// Returns error if the directory cannot be created
pub async fn init_storage(config: &ChatStorageConfig) -> anyhow::Result<PathBuf> {
    let directory = prepare_storage_dir(&StorageConfig::new(config.directory.clone())).await?;
    Ok(directory)
}
