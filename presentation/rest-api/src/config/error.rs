/// Configuration errors raised while reading the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
    #[error("config.invalid_variable: {0}")]
    InvalidVariable(&'static str),
}

/// Reads a required variable; empty values count as missing.
pub fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVariable(name)),
    }
}
