use super::error::{ConfigError, required_var};

/// Firebase project whose ID tokens the API accepts.
pub struct FirebaseConfig {
    pub project_id: String,
}

impl FirebaseConfig {
    /// Environment variables:
    /// - FIREBASE_PROJECT_ID: Firebase project id (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            project_id: required_var("FIREBASE_PROJECT_ID")?,
        })
    }

    pub fn expected_issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }
}
