use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::food_item::model::FoodItem;
use business::domain::food_item::repository::FoodItemRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::FoodItemEntity;

const COLUMNS: &str =
    "id, user_id, name, category, image_url, expiry_date, created_at, updated_at";

pub struct FoodItemRepositoryPostgres {
    pool: PgPool,
}

impl FoodItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FoodItemRepository for FoodItemRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<FoodItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, FoodItemEntity>(&format!(
            "SELECT {COLUMNS} FROM food_items WHERE user_id = $1 \
             ORDER BY expiry_date ASC NULLS LAST, created_at ASC"
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("food_items.get_all failed: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<FoodItem, RepositoryError> {
        let entity = sqlx::query_as::<_, FoodItemEntity>(&format!(
            "SELECT {COLUMNS} FROM food_items WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("food_items.get_by_id failed: {e}");
            RepositoryError::DatabaseError
        })?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, item: &FoodItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO food_items (id, user_id, name, category, image_url, expiry_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                category = EXCLUDED.category,
                image_url = EXCLUDED.image_url,
                expiry_date = EXCLUDED.expiry_date,
                updated_at = EXCLUDED.updated_at
            WHERE food_items.user_id = EXCLUDED.user_id"#,
        )
        .bind(item.id)
        .bind(item.user_id.as_str())
        .bind(&item.name)
        .bind(item.category.id())
        .bind(&item.image_url)
        .bind(item.expiry_date)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("food_items.save failed: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM food_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("food_items.delete failed: {e}");
                RepositoryError::DatabaseError
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get_expiring_before(
        &self,
        user_id: &UserId,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<FoodItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, FoodItemEntity>(&format!(
            "SELECT {COLUMNS} FROM food_items \
             WHERE user_id = $1 AND expiry_date IS NOT NULL AND expiry_date <= $2 \
             ORDER BY expiry_date ASC"
        ))
        .bind(user_id.as_str())
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("food_items.get_expiring_before failed: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
