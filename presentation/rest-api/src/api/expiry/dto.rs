use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::food_item::expiry::{ExpiryAssessment, ExpiryStatus, describe_days};
use business::domain::food_item::use_cases::classify_expiry::ExpiryClassification;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum ExpiryStatusDto {
    #[oai(rename = "expired")]
    Expired,
    #[oai(rename = "expiring_soon")]
    ExpiringSoon,
    #[oai(rename = "expiring_this_week")]
    ExpiringThisWeek,
    #[oai(rename = "fresh")]
    Fresh,
    #[oai(rename = "unknown")]
    Unknown,
}

impl From<ExpiryStatus> for ExpiryStatusDto {
    fn from(status: ExpiryStatus) -> Self {
        match status {
            ExpiryStatus::Expired => ExpiryStatusDto::Expired,
            ExpiryStatus::ExpiringSoon => ExpiryStatusDto::ExpiringSoon,
            ExpiryStatus::ExpiringThisWeek => ExpiryStatusDto::ExpiringThisWeek,
            ExpiryStatus::Fresh => ExpiryStatusDto::Fresh,
            ExpiryStatus::Unknown => ExpiryStatusDto::Unknown,
        }
    }
}

/// Freshness of an item as rendered by clients.
#[derive(Debug, Clone, Object)]
pub struct ExpiryDto {
    /// Freshness tier
    pub status: ExpiryStatusDto,
    /// Whole days until expiry, rounded up; negative when overdue
    #[oai(skip_serializing_if_is_none)]
    pub days_until_expiry: Option<i64>,
    /// Display label for the tier
    pub label: String,
    /// Hex color for the tier
    pub color: String,
    /// "N days left" / "N days ago"
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl From<ExpiryAssessment> for ExpiryDto {
    fn from(assessment: ExpiryAssessment) -> Self {
        Self {
            status: assessment.status.into(),
            days_until_expiry: assessment.days_until_expiry,
            label: assessment.label.to_string(),
            color: assessment.color.to_string(),
            description: assessment.days_until_expiry.map(describe_days),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClassifyExpiryRequest {
    /// Expiry as RFC 3339 or `YYYY-MM-DD`; unparsable values classify as unknown
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ClassifyExpiryResponse {
    pub expiry: ExpiryDto,
    /// Parsed expiry instant, absent when missing or unparsable
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<DateTime<Utc>>,
    /// When the status will next degrade
    #[oai(skip_serializing_if_is_none)]
    pub next_transition: Option<DateTime<Utc>>,
    /// Instant the classification was computed at
    pub classified_at: DateTime<Utc>,
}

impl From<ExpiryClassification> for ClassifyExpiryResponse {
    fn from(classification: ExpiryClassification) -> Self {
        Self {
            expiry: classification.assessment.into(),
            expiry_date: classification.expiry_date,
            next_transition: classification.next_transition,
            classified_at: classification.classified_at,
        }
    }
}

/// One entry of the status legend.
#[derive(Debug, Clone, Object)]
pub struct ExpiryStatusInfo {
    pub status: ExpiryStatusDto,
    pub label: String,
    pub color: String,
}

impl From<ExpiryStatus> for ExpiryStatusInfo {
    fn from(status: ExpiryStatus) -> Self {
        Self {
            status: status.into(),
            label: status.label().to_string(),
            color: status.severity_color().to_string(),
        }
    }
}
