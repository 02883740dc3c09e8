use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.directory_error")]
    DirectoryError,
}

/// Configuration for the local key-value store
pub struct StorageConfig {
    pub directory: PathBuf,
}

impl StorageConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

/// Makes sure the storage directory exists and returns it
pub async fn prepare_storage_dir(config: &StorageConfig) -> Result<PathBuf, StorageError> {
    tokio::fs::create_dir_all(&config.directory)
        .await
        .map_err(|_| StorageError::DirectoryError)?;

    Ok(config.directory.clone())
}
