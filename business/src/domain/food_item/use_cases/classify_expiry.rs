use chrono::{DateTime, Utc};

use crate::domain::food_item::expiry::ExpiryAssessment;

pub struct ClassifyExpiryParams {
    /// Raw expiry value as sent by the client; unparsable values count as absent.
    pub expiry_date: Option<String>,
}

pub struct ExpiryClassification {
    pub assessment: ExpiryAssessment,
    pub expiry_date: Option<DateTime<Utc>>,
    pub next_transition: Option<DateTime<Utc>>,
    pub classified_at: DateTime<Utc>,
}

pub trait ClassifyExpiryUseCase: Send + Sync {
    fn execute(&self, params: ClassifyExpiryParams) -> ExpiryClassification;
}
