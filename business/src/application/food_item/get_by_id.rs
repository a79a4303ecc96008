use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::ClassifiedFoodItem;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::get_by_id::{
    GetFoodItemByIdParams, GetFoodItemByIdUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::clock::Clock;

pub struct GetFoodItemByIdUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFoodItemByIdUseCase for GetFoodItemByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetFoodItemByIdParams,
    ) -> Result<ClassifiedFoodItem, FoodItemError> {
        self.logger
            .debug(&format!("Fetching food item: {}", params.id));

        let item = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(FoodItemError::from_lookup)?;

        Ok(ClassifiedFoodItem::classify(item, self.clock.now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::food_item::test_support::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::food_item::expiry::ExpiryStatus;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_classified_item_when_found() {
        let item = stored_item("Salmon", Some(-3));
        let id = item.id;
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |requested, user_id| *requested == id && *user_id == test_user_id())
            .returning(move |_, _| Ok(item.clone()));

        let use_case = GetFoodItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: fixed_clock(),
            logger: mock_logger(),
        };

        let found = use_case
            .execute(GetFoodItemByIdParams {
                id,
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert_eq!(found.item.name, "Salmon");
        assert_eq!(found.expiry.status, ExpiryStatus::Expired);
        assert_eq!(found.expiry.days_until_expiry, Some(-3));
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_does_not_exist() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = GetFoodItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: fixed_clock(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetFoodItemByIdParams {
                id: Uuid::new_v4(),
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result, Err(FoodItemError::NotFound)));
    }
}
