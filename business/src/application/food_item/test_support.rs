use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::{RepositoryError, StorageError};
use crate::domain::food_item::model::FoodItem;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::services::ImageStorage;
use crate::domain::food_item::value_objects::FoodCategory;
use crate::domain::logger::Logger;
use crate::domain::shared::clock::Clock;
use crate::domain::shared::value_objects::UserId;

mock! {
    pub FoodItemRepo {}

    #[async_trait]
    impl FoodItemRepository for FoodItemRepo {
        async fn get_all(&self, user_id: &UserId) -> Result<Vec<FoodItem>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<FoodItem, RepositoryError>;
        async fn save(&self, item: &FoodItem) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
        async fn get_expiring_before(
            &self,
            user_id: &UserId,
            cutoff: DateTime<Utc>,
        ) -> Result<Vec<FoodItem>, RepositoryError>;
    }
}

mock! {
    pub Storage {}

    #[async_trait]
    impl ImageStorage for Storage {
        async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, StorageError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(fixed_now()))
}

pub fn test_user_id() -> UserId {
    UserId::new("test-user-id")
}

/// A persisted item expiring `days` after [`fixed_now`], or undated.
pub fn stored_item(name: &str, days: Option<i64>) -> FoodItem {
    FoodItem::from_repository(
        Uuid::new_v4(),
        test_user_id(),
        name.to_string(),
        FoodCategory::Other,
        None,
        days.map(|d| fixed_now() + Duration::days(d)),
        fixed_now() - Duration::days(30),
        fixed_now() - Duration::days(30),
    )
}
