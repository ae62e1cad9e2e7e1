use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::media::errors::AttachmentError;
use crate::domain::media::model::{Image, VideoRef};

/// Media attached to a single owner.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerAttachments {
    pub owner_id: Uuid,
    pub images: Vec<Image>,
    pub video: Option<VideoRef>,
}

#[async_trait]
pub trait GetAttachmentsUseCase: Send + Sync {
    /// Batch lookup; unknown identifiers are skipped.
    async fn execute(&self, owner_ids: Vec<String>) -> Result<Vec<OwnerAttachments>, AttachmentError>;
}
