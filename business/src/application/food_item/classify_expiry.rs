use std::sync::Arc;

use crate::domain::food_item::expiry::{assess, next_transition, resolve_raw_expiry};
use crate::domain::food_item::use_cases::classify_expiry::{
    ClassifyExpiryParams, ClassifyExpiryUseCase, ExpiryClassification,
};
use crate::domain::shared::clock::Clock;

pub struct ClassifyExpiryUseCaseImpl {
    pub clock: Arc<dyn Clock>,
}

impl ClassifyExpiryUseCase for ClassifyExpiryUseCaseImpl {
    fn execute(&self, params: ClassifyExpiryParams) -> ExpiryClassification {
        let now = self.clock.now();
        let expiry_date = resolve_raw_expiry(params.expiry_date.as_deref());

        ExpiryClassification {
            assessment: assess(expiry_date, now),
            expiry_date,
            next_transition: next_transition(expiry_date, now),
            classified_at: now,
        }
    }
}
