use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::{ClassifiedFoodItem, by_expiry_ascending};
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::get_all::{
    GetAllFoodItemsParams, GetAllFoodItemsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::clock::Clock;

pub struct GetAllFoodItemsUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllFoodItemsUseCase for GetAllFoodItemsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllFoodItemsParams,
    ) -> Result<Vec<ClassifiedFoodItem>, FoodItemError> {
        self.logger
            .info(&format!("Fetching food items for user {}", params.user_id));

        let mut items = self.repository.get_all(&params.user_id).await?;
        items.sort_by(by_expiry_ascending);

        let now = self.clock.now();
        let classified: Vec<ClassifiedFoodItem> = items
            .into_iter()
            .map(|item| ClassifiedFoodItem::classify(item, now))
            .collect();

        self.logger
            .info(&format!("Found {} food items", classified.len()));
        Ok(classified)
    }
}
