use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

use super::errors::FoodItemError;
use super::expiry::{ExpiryAssessment, assess};
use super::value_objects::FoodCategory;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub category: FoodCategory,
    pub image_url: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewFoodItemProps {
    pub user_id: UserId,
    pub name: String,
    pub category: FoodCategory,
    pub image_url: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
}

/// Editable fields of an existing item.
pub struct FoodItemChanges {
    pub name: String,
    pub category: FoodCategory,
    pub image_url: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
}

impl FoodItem {
    pub fn new(props: NewFoodItemProps, now: DateTime<Utc>) -> Result<Self, FoodItemError> {
        validate_name(&props.name)?;
        validate_image_url(props.image_url.as_deref())?;

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            name: props.name.trim().to_string(),
            category: props.category,
            image_url: props.image_url,
            expiry_date: props.expiry_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        category: FoodCategory,
        image_url: Option<String>,
        expiry_date: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            category,
            image_url,
            expiry_date,
            created_at,
            updated_at,
        }
    }

    /// Replaces the editable fields; `created_at` is never touched.
    pub fn apply_changes(
        &mut self,
        changes: FoodItemChanges,
        now: DateTime<Utc>,
    ) -> Result<(), FoodItemError> {
        validate_name(&changes.name)?;
        validate_image_url(changes.image_url.as_deref())?;

        self.name = changes.name.trim().to_string();
        self.category = changes.category;
        self.image_url = changes.image_url;
        self.expiry_date = changes.expiry_date;
        self.updated_at = now;
        Ok(())
    }

    pub fn assess_expiry(&self, now: DateTime<Utc>) -> ExpiryAssessment {
        assess(self.expiry_date, now)
    }
}

/// A food item together with its freshness at the moment it was read.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedFoodItem {
    pub item: FoodItem,
    pub expiry: ExpiryAssessment,
}

impl ClassifiedFoodItem {
    pub fn classify(item: FoodItem, now: DateTime<Utc>) -> Self {
        let expiry = item.assess_expiry(now);
        Self { item, expiry }
    }
}

/// Soonest expiry first; undated items go last, ties broken by creation time.
pub fn by_expiry_ascending(a: &FoodItem, b: &FoodItem) -> Ordering {
    let expiry = match (a.expiry_date, b.expiry_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    expiry.then_with(|| a.created_at.cmp(&b.created_at))
}

fn validate_name(name: &str) -> Result<(), FoodItemError> {
    if name.trim().is_empty() {
        return Err(FoodItemError::NameEmpty);
    }
    Ok(())
}

fn validate_image_url(image_url: Option<&str>) -> Result<(), FoodItemError> {
    let Some(raw) = image_url else {
        return Ok(());
    };
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(FoodItemError::ImageUrlInvalid),
    }
}
