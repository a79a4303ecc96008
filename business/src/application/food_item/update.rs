use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::{ClassifiedFoodItem, FoodItemChanges};
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::update::{UpdateFoodItemParams, UpdateFoodItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::clock::Clock;

pub struct UpdateFoodItemUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateFoodItemUseCase for UpdateFoodItemUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateFoodItemParams,
    ) -> Result<ClassifiedFoodItem, FoodItemError> {
        self.logger
            .info(&format!("Updating food item: {}", params.id));

        let mut item = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(FoodItemError::from_lookup)?;

        let now = self.clock.now();
        item.apply_changes(
            FoodItemChanges {
                name: params.name,
                category: params.category,
                image_url: params.image_url,
                expiry_date: params.expiry_date,
            },
            now,
        )?;

        self.repository.save(&item).await?;

        self.logger
            .info(&format!("Food item updated: {}", item.id));
        Ok(ClassifiedFoodItem::classify(item, now))
    }
}
