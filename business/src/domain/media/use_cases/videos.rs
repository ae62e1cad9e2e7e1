use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::media::errors::AttachmentError;

pub struct AttachVideoParams {
    pub owner_id: String,
    pub video_id: String,
}

#[async_trait]
pub trait VideoManagerUseCase: Send + Sync {
    async fn add(&self, params: AttachVideoParams) -> Result<(), AttachmentError>;

    async fn remove(&self, owner_id: &str) -> Result<(), AttachmentError>;

    /// Clears a centrally deleted video from every owner referencing it.
    async fn unlink_video(&self, video_id: &str) -> Result<Vec<Uuid>, AttachmentError>;
}
