use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::ClassifiedFoodItem;
use crate::domain::food_item::value_objects::FoodCategory;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateFoodItemParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub category: FoodCategory,
    pub image_url: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait UpdateFoodItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateFoodItemParams)
    -> Result<ClassifiedFoodItem, FoodItemError>;
}
