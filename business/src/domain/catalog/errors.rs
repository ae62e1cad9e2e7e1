use crate::domain::errors::{ErrorKind, RepositoryError};
use crate::domain::shared::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{0}")]
    InvalidArgument(#[from] ValidationError),
    #[error("catalog.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for CatalogError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => CatalogError::NotFound,
            other => CatalogError::Repository(other),
        }
    }
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CatalogError::NotFound => ErrorKind::NotFound,
            CatalogError::Repository(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_missing_row_to_not_found() {
        let error: CatalogError = RepositoryError::NotFound.into();
        assert!(matches!(error, CatalogError::NotFound));
    }

    #[test]
    fn should_not_leak_persistence_details() {
        let error: CatalogError = RepositoryError::DatabaseError.into();
        assert_eq!(error.kind(), ErrorKind::Internal);
        assert_eq!(error.to_string(), "repository.persistence");
    }

    #[test]
    fn should_surface_validation_code_as_message() {
        let error: CatalogError = ValidationError("course.name_length").into();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert_eq!(error.to_string(), "course.name_length");
    }
}
