use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::FoodItem;

/// Persistence port for food items. Every query is scoped to one owner.
#[async_trait]
pub trait FoodItemRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<FoodItem>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<FoodItem, RepositoryError>;
    async fn save(&self, item: &FoodItem) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
    /// Dated items whose expiry is at or before `cutoff`, soonest first.
    async fn get_expiring_before(
        &self,
        user_id: &UserId,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<FoodItem>, RepositoryError>;
}
