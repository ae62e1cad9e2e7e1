use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Image, MediaAttachments, VideoRef};
use crate::domain::errors::RepositoryError;
use crate::domain::product::value_objects::DetailsType;

/// Capability view over any Details record that can hold images and a video.
///
/// Implemented by each Details family; the attachment services only ever see
/// this trait.
pub trait Owner: Clone + Send + Sync + 'static {
    fn owner_id(&self) -> Uuid;
    fn media(&self) -> &MediaAttachments;

    fn images(&self) -> &[Image] {
        &self.media().images
    }

    fn uploaded_image_count(&self) -> u32 {
        self.media().uploaded_image_count
    }

    fn video(&self) -> Option<&VideoRef> {
        self.media().video.as_ref()
    }
}

/// Attachment persistence for one Details family.
///
/// Each family gets its own adapter bound to its concrete repository when the
/// service is wired, so no runtime type recovery is needed. Single-owner reads
/// include unpublished owners and exclude soft-deleted ones; the unlink lookups
/// (`find_owners_by_image`, `find_owners_by_video`) also match soft-deleted
/// owners so a restored owner never comes back with deleted media.
#[async_trait]
pub trait OwnerRepository<Tx: Send>: Send + Sync {
    type Owner: Owner;

    fn owner_type(&self) -> DetailsType;

    /// Loads a non-deleted owner and holds its row lock until the transaction ends.
    async fn lock_owner(&self, tx: &mut Tx, id: Uuid) -> Result<Self::Owner, RepositoryError>;

    async fn find_owners(
        &self,
        tx: &mut Tx,
        ids: &[Uuid],
    ) -> Result<Vec<Self::Owner>, RepositoryError>;

    async fn find_owners_by_image(
        &self,
        tx: &mut Tx,
        media_id: &str,
    ) -> Result<Vec<Self::Owner>, RepositoryError>;

    async fn find_owners_by_video(
        &self,
        tx: &mut Tx,
        video: &VideoRef,
    ) -> Result<Vec<Self::Owner>, RepositoryError>;

    /// Stores the image and recomputes the owner's counter from its image rows.
    async fn append_image(
        &self,
        tx: &mut Tx,
        owner_id: Uuid,
        image: &Image,
    ) -> Result<u64, RepositoryError>;

    /// Deletes the image and recomputes the owner's counter from its image rows.
    async fn remove_image(
        &self,
        tx: &mut Tx,
        owner_id: Uuid,
        media_id: &str,
    ) -> Result<u64, RepositoryError>;

    /// Batch variant of [`OwnerRepository::remove_image`]; returns the number of owners updated.
    async fn remove_image_from_owners(
        &self,
        tx: &mut Tx,
        owner_ids: &[Uuid],
        media_id: &str,
    ) -> Result<u64, RepositoryError>;

    async fn set_video(
        &self,
        tx: &mut Tx,
        owner_id: Uuid,
        video: &VideoRef,
    ) -> Result<u64, RepositoryError>;

    async fn clear_video(&self, tx: &mut Tx, owner_id: Uuid) -> Result<u64, RepositoryError>;

    /// Clears `video` on every listed owner still referencing it.
    async fn clear_video_from_owners(
        &self,
        tx: &mut Tx,
        owner_ids: &[Uuid],
        video: &VideoRef,
    ) -> Result<u64, RepositoryError>;
}
