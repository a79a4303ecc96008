use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Folder inside the object store that holds food photos.
pub const IMAGE_FOLDER: &str = "food-images";

/// Service port for the binary object storage holding food photos.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Stores `bytes` under `path` and returns the public URL of the object.
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, StorageError>;
}
