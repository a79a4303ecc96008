use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::ClassifiedFoodItem;
use crate::domain::shared::value_objects::UserId;

pub struct GetFoodItemByIdParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait GetFoodItemByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetFoodItemByIdParams,
    ) -> Result<ClassifiedFoodItem, FoodItemError>;
}
