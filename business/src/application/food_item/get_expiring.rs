use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::expiry::EXPIRING_THIS_WEEK_DAYS;
use crate::domain::food_item::model::{ClassifiedFoodItem, by_expiry_ascending};
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::get_expiring::{
    GetExpiringFoodItemsParams, GetExpiringFoodItemsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::clock::Clock;

pub struct GetExpiringFoodItemsUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetExpiringFoodItemsUseCase for GetExpiringFoodItemsUseCaseImpl {
    async fn execute(
        &self,
        params: GetExpiringFoodItemsParams,
    ) -> Result<Vec<ClassifiedFoodItem>, FoodItemError> {
        let now = self.clock.now();
        let cutoff = now + Duration::days(EXPIRING_THIS_WEEK_DAYS);
        self.logger.info(&format!(
            "Fetching food items expiring before {} for user {}",
            cutoff.to_rfc3339(),
            params.user_id
        ));

        let mut items = self
            .repository
            .get_expiring_before(&params.user_id, cutoff)
            .await?;
        items.retain(|item| item.expiry_date.is_some_and(|expiry| expiry <= cutoff));
        items.sort_by(by_expiry_ascending);

        let classified: Vec<ClassifiedFoodItem> = items
            .into_iter()
            .map(|item| ClassifiedFoodItem::classify(item, now))
            .collect();

        self.logger
            .info(&format!("Found {} expiring food items", classified.len()));
        Ok(classified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::food_item::test_support::*;
    use crate::domain::food_item::expiry::ExpiryStatus;

    #[tokio::test]
    async fn should_query_with_weekly_cutoff_and_keep_overdue_items() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo
            .expect_get_expiring_before()
            .withf(|user_id, cutoff| {
                *user_id == test_user_id() && *cutoff == fixed_now() + Duration::days(7)
            })
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    stored_item("Ham", Some(7)),
                    stored_item("Eggs", Some(-4)),
                    stored_item("Lettuce", Some(0)),
                ])
            });

        let use_case = GetExpiringFoodItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: fixed_clock(),
            logger: mock_logger(),
        };

        let items = use_case
            .execute(GetExpiringFoodItemsParams {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        let summary: Vec<(&str, ExpiryStatus)> = items
            .iter()
            .map(|c| (c.item.name.as_str(), c.expiry.status))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Eggs", ExpiryStatus::Expired),
                ("Lettuce", ExpiryStatus::ExpiringSoon),
                ("Ham", ExpiryStatus::ExpiringThisWeek),
            ]
        );
    }

    #[tokio::test]
    async fn should_drop_items_outside_the_window() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo.expect_get_expiring_before().returning(|_, _| {
            Ok(vec![
                stored_item("Pasta", None),
                stored_item("Honey", Some(40)),
                stored_item("Tofu", Some(3)),
            ])
        });

        let use_case = GetExpiringFoodItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: fixed_clock(),
            logger: mock_logger(),
        };

        let items = use_case
            .execute(GetExpiringFoodItemsParams {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item.name, "Tofu");
    }
}
