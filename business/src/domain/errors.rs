/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}

/// Classification of every business error, independent of the concrete error type.
///
/// Transport adapters map a kind to a status code; the kind is the only
/// information about a failure they are allowed to rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed identifier or payload failing validation.
    InvalidArgument,
    /// Target row missing, or a write affected zero rows.
    NotFound,
    ImageLimitExceeded,
    VideoInUse,
    OwnerNotFound,
    ImageNotFoundOnOwner,
    /// Unclassified persistence or collaborator failure.
    Internal,
}

impl ErrorKind {
    /// Client errors are caused by the request and must not be retried as-is.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }
}
