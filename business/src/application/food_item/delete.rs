use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::delete::{DeleteFoodItemParams, DeleteFoodItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteFoodItemUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteFoodItemUseCase for DeleteFoodItemUseCaseImpl {
    async fn execute(&self, params: DeleteFoodItemParams) -> Result<(), FoodItemError> {
        self.logger
            .info(&format!("Deleting food item: {}", params.id));

        // Ownership check: another user's item reads as missing.
        self.repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(FoodItemError::from_lookup)?;

        self.repository.delete(params.id, &params.user_id).await?;

        self.logger
            .info(&format!("Food item deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::food_item::test_support::*;
    use crate::domain::errors::RepositoryError;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_item_when_it_exists() {
        let existing = stored_item("Bread", Some(2));
        let id = existing.id;

        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_, _| Ok(existing.clone()));
        mock_repo
            .expect_delete()
            .withf(move |requested, _| *requested == id)
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = DeleteFoodItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteFoodItemParams {
                id,
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_and_skip_delete_when_missing() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteFoodItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteFoodItemParams {
                id: Uuid::new_v4(),
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result, Err(FoodItemError::NotFound)));
    }
}
