use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::media::errors::AttachmentError;
use crate::domain::media::model::{Image, NewImage};

pub struct AddImageParams {
    pub owner_id: String,
    pub image: NewImage,
}

pub struct DeleteImageParams {
    pub owner_id: String,
    pub media_id: String,
}

#[async_trait]
pub trait ImageManagerUseCase: Send + Sync {
    async fn add_image(&self, params: AddImageParams) -> Result<Image, AttachmentError>;

    async fn delete_image(&self, params: DeleteImageParams) -> Result<(), AttachmentError>;

    /// Detaches a centrally deleted image from every owner referencing it.
    /// Returns the identifiers of the owners that were updated.
    async fn unlink_image(&self, media_id: &str) -> Result<Vec<Uuid>, AttachmentError>;
}
