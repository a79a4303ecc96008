use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::ClassifiedFoodItem;
use crate::domain::shared::value_objects::UserId;

pub struct GetExpiringFoodItemsParams {
    pub user_id: UserId,
}

/// Items due within the weekly window, overdue ones included.
#[async_trait]
pub trait GetExpiringFoodItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetExpiringFoodItemsParams,
    ) -> Result<Vec<ClassifiedFoodItem>, FoodItemError>;
}
