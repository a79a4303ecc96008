use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::{ClassifiedFoodItem, FoodItem, NewFoodItemProps};
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::create::{CreateFoodItemParams, CreateFoodItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::clock::Clock;

pub struct CreateFoodItemUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateFoodItemUseCase for CreateFoodItemUseCaseImpl {
    async fn execute(
        &self,
        params: CreateFoodItemParams,
    ) -> Result<ClassifiedFoodItem, FoodItemError> {
        self.logger
            .info(&format!("Creating food item: {}", params.name));

        let now = self.clock.now();
        let item = FoodItem::new(
            NewFoodItemProps {
                user_id: params.user_id,
                name: params.name,
                category: params.category,
                image_url: params.image_url,
                expiry_date: params.expiry_date,
            },
            now,
        )?;

        self.repository.save(&item).await?;

        self.logger
            .info(&format!("Food item created with id: {}", item.id));
        Ok(ClassifiedFoodItem::classify(item, now))
    }
}
