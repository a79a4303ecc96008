/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Errors raised by the binary object storage holding food photos.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.invalid_path")]
    InvalidPath,
    #[error("storage.write_failed")]
    WriteFailed,
}
