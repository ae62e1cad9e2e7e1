use crate::domain::errors::{ErrorKind, RepositoryError};
use crate::domain::shared::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("{0}")]
    InvalidArgument(#[from] ValidationError),
    #[error("media.owner_not_found")]
    OwnerNotFound,
    #[error("media.image_limit_exceeded")]
    ImageLimitExceeded,
    #[error("media.image_not_found_on_owner")]
    ImageNotFoundOnOwner,
    #[error("media.video_in_use")]
    VideoInUse,
    #[error("media.video_not_found")]
    VideoNotFound,
    #[error("media.service_unavailable")]
    MediaService(#[from] MediaCatalogError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl AttachmentError {
    /// Maps a failed owner lookup: a missing row means the owner does not exist.
    pub fn from_owner_lookup(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => AttachmentError::OwnerNotFound,
            other => AttachmentError::Repository(other),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AttachmentError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            AttachmentError::OwnerNotFound => ErrorKind::OwnerNotFound,
            AttachmentError::ImageLimitExceeded => ErrorKind::ImageLimitExceeded,
            AttachmentError::ImageNotFoundOnOwner => ErrorKind::ImageNotFoundOnOwner,
            AttachmentError::VideoInUse => ErrorKind::VideoInUse,
            AttachmentError::VideoNotFound => ErrorKind::NotFound,
            AttachmentError::MediaService(_) | AttachmentError::Repository(_) => {
                ErrorKind::Internal
            }
        }
    }
}

/// Failures talking to the external media-management service.
#[derive(Debug, thiserror::Error)]
pub enum MediaCatalogError {
    #[error("media_catalog.unavailable")]
    Unavailable,
    #[error("media_catalog.unexpected_status")]
    UnexpectedStatus(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_owner_row_to_owner_not_found() {
        let error = AttachmentError::from_owner_lookup(RepositoryError::NotFound);
        assert!(matches!(error, AttachmentError::OwnerNotFound));
        assert_eq!(error.kind(), ErrorKind::OwnerNotFound);
    }

    #[test]
    fn should_hide_database_failures_behind_internal_kind() {
        let error = AttachmentError::from_owner_lookup(RepositoryError::DatabaseError);
        assert_eq!(error.kind(), ErrorKind::Internal);
        assert_eq!(error.to_string(), "repository.persistence");
    }

    #[test]
    fn should_classify_unknown_video_as_not_found() {
        assert_eq!(AttachmentError::VideoNotFound.kind(), ErrorKind::NotFound);
    }
}
