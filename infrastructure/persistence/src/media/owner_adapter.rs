use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::catalog::details::SellableDetails;
use business::domain::catalog::repository::DetailsRepository;
use business::domain::errors::RepositoryError;
use business::domain::media::model::{Image, VideoRef};
use business::domain::media::owner::OwnerRepository;
use business::domain::product::value_objects::DetailsType;

use crate::details::repository::DetailsRepositoryPostgres;
use crate::details::table::DetailsTable;
use crate::transaction::PgTx;

/// Attachment view over one family's Details rows.
///
/// Owner reads include unpublished rows and skip soft-deleted ones, except the
/// unlink lookups which also lock soft-deleted owners. Every image write
/// recomputes `uploaded_image_count` from the image rows.
pub struct OwnerAdapterPostgres<F: DetailsTable> {
    details: Arc<DetailsRepositoryPostgres<F>>,
}

impl<F: DetailsTable> OwnerAdapterPostgres<F> {
    pub fn new(details: Arc<DetailsRepositoryPostgres<F>>) -> Self {
        Self { details }
    }

    fn owner_type_str() -> &'static str {
        F::Details::DETAILS_TYPE.as_str()
    }
}

#[async_trait]
impl<F: DetailsTable> OwnerRepository<PgTx> for OwnerAdapterPostgres<F> {
    type Owner = F::Details;

    fn owner_type(&self) -> DetailsType {
        F::Details::DETAILS_TYPE
    }

    async fn lock_owner(&self, tx: &mut PgTx, id: Uuid) -> Result<F::Details, RepositoryError> {
        self.details.lock_including_unpublished(tx, id).await
    }

    async fn find_owners(
        &self,
        tx: &mut PgTx,
        ids: &[Uuid],
    ) -> Result<Vec<F::Details>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut query = DetailsRepositoryPostgres::<F>::select();
        query
            .push("deleted_at IS NULL AND id = ANY(")
            .push_bind(ids.to_vec())
            .push(")");
        self.details.load(tx, query).await
    }

    async fn find_owners_by_image(
        &self,
        tx: &mut PgTx,
        media_id: &str,
    ) -> Result<Vec<F::Details>, RepositoryError> {
        let mut query = DetailsRepositoryPostgres::<F>::select();
        query
            .push("id IN (SELECT owner_id FROM images WHERE owner_type = ")
            .push_bind(Self::owner_type_str())
            .push(" AND media_id = ")
            .push_bind(media_id.to_string())
            .push(") FOR UPDATE");
        self.details.load(tx, query).await
    }

    async fn find_owners_by_video(
        &self,
        tx: &mut PgTx,
        video: &VideoRef,
    ) -> Result<Vec<F::Details>, RepositoryError> {
        let mut query = DetailsRepositoryPostgres::<F>::select();
        query
            .push("video_id = ")
            .push_bind(video.as_str().to_string())
            .push(" FOR UPDATE");
        self.details.load(tx, query).await
    }

    #[tracing::instrument(name = "owners.append_image", skip(self, tx, image), fields(media_id = %image.media_id), err)]
    async fn append_image(
        &self,
        tx: &mut PgTx,
        owner_id: Uuid,
        image: &Image,
    ) -> Result<u64, RepositoryError> {
        self.details
            .images()
            .insert(tx, Self::owner_type_str(), owner_id, image)
            .await?;
        self.details.refresh_image_counts(tx, &[owner_id]).await
    }

    async fn remove_image(
        &self,
        tx: &mut PgTx,
        owner_id: Uuid,
        media_id: &str,
    ) -> Result<u64, RepositoryError> {
        let removed = self
            .details
            .images()
            .delete(tx, Self::owner_type_str(), owner_id, media_id)
            .await?;
        if removed == 0 {
            return Ok(0);
        }
        self.details.refresh_image_counts(tx, &[owner_id]).await
    }

    async fn remove_image_from_owners(
        &self,
        tx: &mut PgTx,
        owner_ids: &[Uuid],
        media_id: &str,
    ) -> Result<u64, RepositoryError> {
        let removed = self
            .details
            .images()
            .delete_from_owners(tx, Self::owner_type_str(), owner_ids, media_id)
            .await?;
        tracing::debug!(removed, media_id, "removed image rows");
        self.details.refresh_image_counts(tx, owner_ids).await
    }

    async fn set_video(
        &self,
        tx: &mut PgTx,
        owner_id: Uuid,
        video: &VideoRef,
    ) -> Result<u64, RepositoryError> {
        self.details.set_video_column(tx, owner_id, Some(video)).await
    }

    async fn clear_video(&self, tx: &mut PgTx, owner_id: Uuid) -> Result<u64, RepositoryError> {
        self.details.set_video_column(tx, owner_id, None).await
    }

    async fn clear_video_from_owners(
        &self,
        tx: &mut PgTx,
        owner_ids: &[Uuid],
        video: &VideoRef,
    ) -> Result<u64, RepositoryError> {
        self.details
            .clear_video_where_matching(tx, owner_ids, video)
            .await
    }
}
