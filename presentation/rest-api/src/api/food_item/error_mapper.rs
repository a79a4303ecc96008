use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::food_item::errors::FoodItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FoodItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            FoodItemError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "food_item.name_empty",
            ),
            FoodItemError::ImageUrlInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "food_item.image_url_invalid",
            ),
            FoodItemError::ImageDataInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "food_item.image_data_invalid",
            ),
            FoodItemError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "food_item.not_found"),
            FoodItemError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "StorageError",
                "storage.upload_failed",
            ),
            FoodItemError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}
