use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use once_cell::sync::Lazy;
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;

use crate::config::firebase_config::FirebaseConfig;

const GOOGLE_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";
const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, thiserror::Error)]
enum AuthError {
    #[error("auth.certs_fetch_failed: {0}")]
    CertsFetch(String),
    #[error("auth.cert_decode_failed: {0}")]
    CertDecode(String),
    #[error("auth.cache_poisoned")]
    CachePoisoned,
    #[error("auth.certs_not_loaded")]
    CertsNotLoaded,
    #[error("auth.invalid_token_header: {0}")]
    InvalidHeader(String),
    #[error("auth.missing_kid")]
    MissingKid,
    #[error("auth.unknown_kid")]
    UnknownKid,
    #[error("auth.misconfigured: {0}")]
    Misconfigured(String),
    #[error("auth.token_validation_failed: {0}")]
    Validation(String),
}

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
}

struct CachedCerts {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

static CERTS_CACHE: Lazy<RwLock<Option<CachedCerts>>> = Lazy::new(|| RwLock::new(None));

async fn fetch_google_certs() -> Result<HashMap<String, DecodingKey>, AuthError> {
    let response: HashMap<String, String> = reqwest::get(GOOGLE_CERTS_URL)
        .await
        .map_err(|e| AuthError::CertsFetch(e.to_string()))?
        .json()
        .await
        .map_err(|e| AuthError::CertsFetch(e.to_string()))?;

    response
        .into_iter()
        .map(|(kid, pem)| {
            DecodingKey::from_rsa_pem(pem.as_bytes())
                .map(|key| (kid, key))
                .map_err(|e| AuthError::CertDecode(e.to_string()))
        })
        .collect()
}

fn certs_are_fresh() -> Result<bool, AuthError> {
    let cache = CERTS_CACHE.read().map_err(|_| AuthError::CachePoisoned)?;
    Ok(cache
        .as_ref()
        .is_some_and(|cached| cached.fetched_at.elapsed() < CACHE_TTL))
}

/// Makes sure Google's signing certificates are cached and not older than an hour.
async fn refresh_certs_if_stale() -> Result<(), AuthError> {
    if certs_are_fresh()? {
        return Ok(());
    }

    let keys = fetch_google_certs().await?;
    let mut cache = CERTS_CACHE.write().map_err(|_| AuthError::CachePoisoned)?;
    *cache = Some(CachedCerts {
        keys,
        fetched_at: Instant::now(),
    });
    Ok(())
}

/// Verifies a Firebase ID token against the cached certificates and returns its UID.
fn verify_token(token: &str, config: &FirebaseConfig) -> Result<UserId, AuthError> {
    let header = decode_header(token).map_err(|e| AuthError::InvalidHeader(e.to_string()))?;
    let kid = header.kid.ok_or(AuthError::MissingKid)?;

    let cache = CERTS_CACHE.read().map_err(|_| AuthError::CachePoisoned)?;
    let cached = cache.as_ref().ok_or(AuthError::CertsNotLoaded)?;
    let decoding_key = cached.keys.get(&kid).ok_or(AuthError::UnknownKid)?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[&config.project_id]);
    validation.set_issuer(&[config.expected_issuer()]);
    validation.validate_exp = true;

    let token_data = decode::<FirebaseClaims>(token, decoding_key, &validation)
        .map_err(|e| AuthError::Validation(e.to_string()))?;

    Ok(UserId::new(token_data.claims.sub))
}

async fn authenticate(token: &str) -> Result<UserId, AuthError> {
    let config = FirebaseConfig::from_env().map_err(|e| AuthError::Misconfigured(e.to_string()))?;
    refresh_certs_if_stale().await?;
    verify_token(token, &config)
}

/// Firebase Bearer token authentication; carries the caller's UID.
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    bearer_format = "JWT",
    checker = "firebase_bearer_checker"
)]
pub struct FirebaseBearer(pub UserId);

async fn firebase_bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<UserId> {
    match authenticate(&bearer.token).await {
        Ok(user_id) => Some(user_id),
        Err(e @ (AuthError::CertsFetch(_) | AuthError::CertDecode(_))) => {
            tracing::error!("Failed to load Google certs: {e}");
            None
        }
        Err(e) => {
            tracing::warn!("Firebase auth failed: {e}");
            None
        }
    }
}
