use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;

pub struct UploadFoodImageParams {
    /// Name of the file on the client, only used for its extension.
    pub original_name: String,
    /// Base64 payload, optionally prefixed with a `data:image/...;base64,` header.
    pub image_base64: String,
}

pub struct UploadedFoodImage {
    pub file_name: String,
    pub url: String,
}

#[async_trait]
pub trait UploadFoodImageUseCase: Send + Sync {
    async fn execute(&self, params: UploadFoodImageParams)
    -> Result<UploadedFoodImage, FoodItemError>;
}
