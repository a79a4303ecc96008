use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::file_name::generate_image_file_name;
use crate::domain::food_item::services::{IMAGE_FOLDER, ImageStorage};
use crate::domain::food_item::use_cases::upload_image::{
    UploadFoodImageParams, UploadFoodImageUseCase, UploadedFoodImage,
};
use crate::domain::logger::Logger;
use crate::domain::shared::clock::Clock;

static DATA_URL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/[a-z+.-]+;base64,").expect("data URL pattern is valid")
});

pub struct UploadFoodImageUseCaseImpl {
    pub storage: Arc<dyn ImageStorage>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

impl UploadFoodImageUseCaseImpl {
    fn decode_image(raw: &str) -> Result<Vec<u8>, FoodItemError> {
        let stripped = DATA_URL_PREFIX.replace(raw.trim(), "");
        let clean: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();

        let bytes = STANDARD
            .decode(clean)
            .map_err(|_| FoodItemError::ImageDataInvalid)?;
        if bytes.is_empty() {
            return Err(FoodItemError::ImageDataInvalid);
        }
        Ok(bytes)
    }
}

#[async_trait]
impl UploadFoodImageUseCase for UploadFoodImageUseCaseImpl {
    async fn execute(
        &self,
        params: UploadFoodImageParams,
    ) -> Result<UploadedFoodImage, FoodItemError> {
        let bytes = Self::decode_image(&params.image_base64)?;

        let file_name =
            generate_image_file_name(&params.original_name, self.clock.now(), &mut rand::rng());
        let path = format!("{}/{}", IMAGE_FOLDER, file_name);
        self.logger.info(&format!(
            "Uploading food image {} ({} bytes)",
            path,
            bytes.len()
        ));

        let url = self.storage.upload(&path, &bytes).await.inspect_err(|e| {
            self.logger
                .error(&format!("Image upload failed for {}: {}", path, e))
        })?;

        Ok(UploadedFoodImage { file_name, url })
    }
}
