use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::ClassifiedFoodItem;
use crate::domain::shared::value_objects::UserId;

pub struct GetAllFoodItemsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAllFoodItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllFoodItemsParams,
    ) -> Result<Vec<ClassifiedFoodItem>, FoodItemError>;
}
