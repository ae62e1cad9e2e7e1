use async_trait::async_trait;
use uuid::Uuid;

use super::details::SellableDetails;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::diff::FieldDiff;
use crate::domain::shared::value_objects::{Page, Visibility};

/// Details rows of one family.
///
/// Write methods return the number of affected rows; zero means the row is
/// missing or not in a state the write applies to.
#[async_trait]
pub trait DetailsRepository<Tx: Send>: Send + Sync {
    type Details: SellableDetails;

    async fn get(
        &self,
        tx: &mut Tx,
        id: Uuid,
        visibility: Visibility,
    ) -> Result<Self::Details, RepositoryError>;

    /// Reads a non-deleted row and locks it until the transaction ends.
    async fn lock_including_unpublished(
        &self,
        tx: &mut Tx,
        id: Uuid,
    ) -> Result<Self::Details, RepositoryError>;

    async fn list(
        &self,
        tx: &mut Tx,
        visibility: Visibility,
        page: Page,
    ) -> Result<Vec<Self::Details>, RepositoryError>;

    async fn count(&self, tx: &mut Tx, visibility: Visibility) -> Result<u64, RepositoryError>;

    async fn create(&self, tx: &mut Tx, details: &Self::Details) -> Result<(), RepositoryError>;

    async fn set_published(
        &self,
        tx: &mut Tx,
        id: Uuid,
        published: bool,
    ) -> Result<u64, RepositoryError>;

    async fn update_fields(
        &self,
        tx: &mut Tx,
        id: Uuid,
        diff: &FieldDiff,
    ) -> Result<u64, RepositoryError>;

    /// Marks the row deleted and forces it out of stock.
    async fn soft_delete(&self, tx: &mut Tx, id: Uuid) -> Result<u64, RepositoryError>;

    /// Removes an unpublished or soft-deleted row along with its images.
    async fn permanent_delete(&self, tx: &mut Tx, id: Uuid) -> Result<u64, RepositoryError>;

    /// Clears the deletion marker of a soft-deleted row; it stays out of stock.
    async fn restore(&self, tx: &mut Tx, id: Uuid) -> Result<u64, RepositoryError>;
}
