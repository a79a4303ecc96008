use crate::domain::errors::{RepositoryError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum FoodItemError {
    #[error("food_item.name_empty")]
    NameEmpty,
    #[error("food_item.not_found")]
    NotFound,
    #[error("food_item.image_url_invalid")]
    ImageUrlInvalid,
    #[error("food_item.image_data_invalid")]
    ImageDataInvalid,
    #[error("storage.upload_failed")]
    Storage(#[from] StorageError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl FoodItemError {
    /// Lifts a repository lookup error, keeping "not found" as a domain error.
    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => FoodItemError::NotFound,
            other => FoodItemError::Repository(other),
        }
    }
}
