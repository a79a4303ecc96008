use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Body of every non-2xx response: an error family and a dotted message code.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn json(name: &str, message: &str) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }

    /// Malformed client input, e.g. an unparsable id or date.
    pub fn validation(message: &str) -> Json<Self> {
        Self::json("ValidationError", message)
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
