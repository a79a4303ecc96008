use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteFoodItemParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteFoodItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteFoodItemParams) -> Result<(), FoodItemError>;
}
