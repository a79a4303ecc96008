use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::food_item::expiry::ExpiryStatus;
use business::domain::food_item::use_cases::classify_expiry::{
    ClassifyExpiryParams, ClassifyExpiryUseCase,
};

use crate::api::expiry::dto::{ClassifyExpiryRequest, ClassifyExpiryResponse, ExpiryStatusInfo};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct ExpiryApi {
    classify_use_case: Arc<dyn ClassifyExpiryUseCase>,
}

impl ExpiryApi {
    pub fn new(classify_use_case: Arc<dyn ClassifyExpiryUseCase>) -> Self {
        Self { classify_use_case }
    }
}

/// Expiry classification API
#[OpenApi]
impl ExpiryApi {
    /// Classify an expiry date
    ///
    /// Computes the freshness tier of a date at the server's current time.
    /// Missing or unparsable dates classify as unknown.
    #[oai(path = "/expiry/classify", method = "post", tag = "ApiTags::Expiry")]
    async fn classify_expiry(
        &self,
        _auth: FirebaseBearer,
        body: Json<ClassifyExpiryRequest>,
    ) -> Json<ClassifyExpiryResponse> {
        let classification = self.classify_use_case.execute(ClassifyExpiryParams {
            expiry_date: body.0.expiry_date,
        });
        Json(classification.into())
    }

    /// List expiry statuses
    ///
    /// Legend of every tier with its label and color, most urgent first.
    #[oai(path = "/expiry/statuses", method = "get", tag = "ApiTags::Expiry")]
    async fn list_statuses(&self) -> Json<Vec<ExpiryStatusInfo>> {
        Json(ExpiryStatus::ALL.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::food_item::classify_expiry::ClassifyExpiryUseCaseImpl;
    use business::domain::shared::clock::SystemClock;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    fn client() -> TestClient<impl poem::Endpoint> {
        let api = ExpiryApi::new(Arc::new(ClassifyExpiryUseCaseImpl {
            clock: Arc::new(SystemClock),
        }));
        TestClient::new(poem::Route::new().nest("/", OpenApiService::new(api, "test", "0.0.0")))
    }

    #[tokio::test]
    async fn should_list_every_status_most_urgent_first() {
        let response = client().get("/expiry/statuses").send().await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let statuses = json.value().array();
        statuses.assert_len(5);
        statuses.get(0).object().get("status").assert_string("expired");
        statuses.get(0).object().get("color").assert_string("#F44336");
        statuses
            .get(4)
            .object()
            .get("label")
            .assert_string("Unknown");
    }

    #[tokio::test]
    async fn should_require_bearer_token_to_classify() {
        let response = client()
            .post("/expiry/classify")
            .body_json(&serde_json::json!({ "expiry_date": "2024-01-05" }))
            .send()
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
