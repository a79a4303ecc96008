use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use business::domain::errors::StorageError;
use business::domain::food_item::services::ImageStorage;

/// Stores food photos on the local filesystem and serves them from a
/// configured public base URL.
pub struct LocalImageStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalImageStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Only plain relative paths are accepted; nothing may escape `root`.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(path);
        let is_plain = !path.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !is_plain {
            return Err(StorageError::InvalidPath);
        }
        Ok(self.root.join(relative))
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let target = self.resolve(path)?;

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                tracing::error!("cannot create image directory {}: {e}", parent.display());
                StorageError::WriteFailed
            })?;
        }
        tokio::fs::write(&target, bytes).await.map_err(|e| {
            tracing::error!("cannot write image {}: {e}", target.display());
            StorageError::WriteFailed
        })?;

        tracing::debug!("stored image {} ({} bytes)", target.display(), bytes.len());
        Ok(self.public_url(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_storage() -> LocalImageStorage {
        let root = std::env::temp_dir().join(format!("pantry-images-{}", Uuid::new_v4()));
        LocalImageStorage::new(root, "http://localhost:8080/images/")
    }

    #[tokio::test]
    async fn should_write_file_and_return_public_url() {
        let storage = temp_storage();

        let url = storage
            .upload("food-images/food_1_abc.jpg", b"jpeg")
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:8080/images/food-images/food_1_abc.jpg");
        let written = tokio::fs::read(storage.root().join("food-images/food_1_abc.jpg"))
            .await
            .unwrap();
        assert_eq!(written, b"jpeg");

        tokio::fs::remove_dir_all(storage.root()).await.unwrap();
    }

    #[tokio::test]
    async fn should_reject_paths_escaping_the_root() {
        let storage = temp_storage();

        for path in ["../outside.jpg", "/etc/passwd", "food-images/../../x.jpg", ""] {
            let result = storage.upload(path, b"x").await;
            assert!(matches!(result, Err(StorageError::InvalidPath)), "{path}");
        }
        assert!(!storage.root().exists());
    }
}
