use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::food_item::model::ClassifiedFoodItem;
use business::domain::food_item::value_objects::FoodCategory;
use business::domain::food_item::use_cases::upload_image::UploadedFoodImage;
use business::domain::shared::dates::{format_optional_date, parse_expiry_instant};

use crate::api::expiry::dto::ExpiryDto;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum FoodCategoryDto {
    #[oai(rename = "dairy")]
    Dairy,
    #[oai(rename = "meat")]
    Meat,
    #[oai(rename = "vegetables")]
    Vegetables,
    #[oai(rename = "fruits")]
    Fruits,
    #[oai(rename = "grains")]
    Grains,
    #[oai(rename = "beverages")]
    Beverages,
    #[oai(rename = "snacks")]
    Snacks,
    #[oai(rename = "frozen")]
    Frozen,
    #[oai(rename = "canned")]
    Canned,
    #[oai(rename = "condiments")]
    Condiments,
    #[oai(rename = "other")]
    Other,
}

impl From<FoodCategory> for FoodCategoryDto {
    fn from(category: FoodCategory) -> Self {
        match category {
            FoodCategory::Dairy => FoodCategoryDto::Dairy,
            FoodCategory::Meat => FoodCategoryDto::Meat,
            FoodCategory::Vegetables => FoodCategoryDto::Vegetables,
            FoodCategory::Fruits => FoodCategoryDto::Fruits,
            FoodCategory::Grains => FoodCategoryDto::Grains,
            FoodCategory::Beverages => FoodCategoryDto::Beverages,
            FoodCategory::Snacks => FoodCategoryDto::Snacks,
            FoodCategory::Frozen => FoodCategoryDto::Frozen,
            FoodCategory::Canned => FoodCategoryDto::Canned,
            FoodCategory::Condiments => FoodCategoryDto::Condiments,
            FoodCategory::Other => FoodCategoryDto::Other,
        }
    }
}

impl From<FoodCategoryDto> for FoodCategory {
    fn from(dto: FoodCategoryDto) -> Self {
        match dto {
            FoodCategoryDto::Dairy => FoodCategory::Dairy,
            FoodCategoryDto::Meat => FoodCategory::Meat,
            FoodCategoryDto::Vegetables => FoodCategory::Vegetables,
            FoodCategoryDto::Fruits => FoodCategory::Fruits,
            FoodCategoryDto::Grains => FoodCategory::Grains,
            FoodCategoryDto::Beverages => FoodCategory::Beverages,
            FoodCategoryDto::Snacks => FoodCategory::Snacks,
            FoodCategoryDto::Frozen => FoodCategory::Frozen,
            FoodCategoryDto::Canned => FoodCategory::Canned,
            FoodCategoryDto::Condiments => FoodCategory::Condiments,
            FoodCategoryDto::Other => FoodCategory::Other,
        }
    }
}

/// Body shared by create and update requests.
#[derive(Debug, Clone, Object)]
pub struct FoodItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Food category
    pub category: FoodCategoryDto,
    /// Public URL of an uploaded photo
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Expiry as an RFC 3339 timestamp or a `YYYY-MM-DD` date
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<String>,
}

/// A request carried an expiry value that is neither RFC 3339 nor `YYYY-MM-DD`.
#[derive(Debug, PartialEq)]
pub struct InvalidExpiryDate;

impl FoodItemRequest {
    pub fn parsed_expiry_date(&self) -> Result<Option<DateTime<Utc>>, InvalidExpiryDate> {
        match self.expiry_date.as_deref() {
            None => Ok(None),
            Some(raw) => parse_expiry_instant(raw)
                .map(Some)
                .ok_or(InvalidExpiryDate),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FoodItemResponse {
    /// Item unique identifier
    pub id: String,
    /// Item name
    pub name: String,
    /// Food category
    pub category: FoodCategoryDto,
    /// Category display name
    pub category_name: String,
    /// Category icon
    pub category_icon: String,
    /// Public URL of the item's photo
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Expiry instant
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<DateTime<Utc>>,
    /// Expiry formatted for display, empty when unknown
    pub expiry_date_display: String,
    /// Freshness at the time of the request
    pub expiry: ExpiryDto,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<ClassifiedFoodItem> for FoodItemResponse {
    fn from(classified: ClassifiedFoodItem) -> Self {
        let ClassifiedFoodItem { item, expiry } = classified;
        Self {
            id: item.id.to_string(),
            name: item.name,
            category: item.category.into(),
            category_name: item.category.display_name().to_string(),
            category_icon: item.category.icon().to_string(),
            image_url: item.image_url,
            expiry_date: item.expiry_date,
            expiry_date_display: format_optional_date(item.expiry_date),
            expiry: expiry.into(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Request to upload a food photo.
#[derive(Debug, Clone, Object)]
pub struct UploadImageRequest {
    /// Original file name on the device, used for its extension
    pub file_name: String,
    /// Base64-encoded image data, data URL prefix allowed
    pub image_base64: String,
}

#[derive(Debug, Clone, Object)]
pub struct UploadImageResponse {
    /// Generated object name
    pub file_name: String,
    /// Public URL to store in the item's `image_url`
    pub url: String,
}

impl From<UploadedFoodImage> for UploadImageResponse {
    fn from(uploaded: UploadedFoodImage) -> Self {
        Self {
            file_name: uploaded.file_name,
            url: uploaded.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::food_item::model::FoodItem;
    use business::domain::shared::value_objects::UserId;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn request(expiry: Option<&str>) -> FoodItemRequest {
        FoodItemRequest {
            name: "Yogurt".to_string(),
            category: FoodCategoryDto::Dairy,
            image_url: None,
            expiry_date: expiry.map(str::to_string),
        }
    }

    #[test]
    fn should_parse_request_expiry_formats() {
        assert_eq!(request(None).parsed_expiry_date(), Ok(None));
        assert_eq!(
            request(Some("2024-01-05")).parsed_expiry_date(),
            Ok(Some(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap()))
        );
        assert!(request(Some("soon")).parsed_expiry_date().is_err());
    }

    #[test]
    fn should_map_classified_item_to_response() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let item = FoodItem::from_repository(
            Uuid::new_v4(),
            UserId::new("uid"),
            "Yogurt".to_string(),
            FoodCategory::Dairy,
            None,
            Some(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap()),
            now,
            now,
        );

        let response: FoodItemResponse = ClassifiedFoodItem::classify(item, now).into();

        assert_eq!(response.category, FoodCategoryDto::Dairy);
        assert_eq!(response.category_name, "Dairy & Eggs");
        assert_eq!(response.category_icon, "🥛");
        assert_eq!(response.expiry_date_display, "Jan 5, 2024");
        assert_eq!(response.expiry.label, "Expiring This Week");
        assert_eq!(response.expiry.days_until_expiry, Some(4));
        assert_eq!(response.expiry.description.as_deref(), Some("4 days left"));
    }
}
