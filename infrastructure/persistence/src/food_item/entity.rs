use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::food_item::model::FoodItem;
use business::domain::food_item::value_objects::FoodCategory;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct FoodItemEntity {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FoodItemEntity {
    pub fn into_domain(self) -> FoodItem {
        FoodItem::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.name,
            FoodCategory::from_id_or_other(&self.category),
            self.image_url,
            self.expiry_date,
            self.created_at,
            self.updated_at,
        )
    }
}
