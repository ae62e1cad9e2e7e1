use async_trait::async_trait;
use uuid::Uuid;

use super::model::Product;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::diff::FieldDiff;
use crate::domain::shared::value_objects::Visibility;

/// Product rows, always addressed through the Details identity they pair with.
///
/// Write methods return the number of affected rows; zero means the row is
/// missing or not in a state the write applies to.
#[async_trait]
pub trait ProductRepository<Tx: Send>: Send + Sync {
    async fn get_by_details(
        &self,
        tx: &mut Tx,
        details_id: Uuid,
        visibility: Visibility,
    ) -> Result<Product, RepositoryError>;

    /// Reads a non-deleted row and locks it until the transaction ends.
    async fn lock_by_details(&self, tx: &mut Tx, details_id: Uuid)
    -> Result<Product, RepositoryError>;

    async fn create(&self, tx: &mut Tx, product: &Product) -> Result<(), RepositoryError>;

    async fn set_published_by_details(
        &self,
        tx: &mut Tx,
        details_id: Uuid,
        published: bool,
    ) -> Result<u64, RepositoryError>;

    async fn update_fields_by_details(
        &self,
        tx: &mut Tx,
        details_id: Uuid,
        diff: &FieldDiff,
    ) -> Result<u64, RepositoryError>;

    /// Marks the row deleted and forces it out of stock.
    async fn soft_delete_by_details(
        &self,
        tx: &mut Tx,
        details_id: Uuid,
    ) -> Result<u64, RepositoryError>;

    /// Removes an unpublished or soft-deleted row.
    async fn permanent_delete_by_details(
        &self,
        tx: &mut Tx,
        details_id: Uuid,
    ) -> Result<u64, RepositoryError>;

    /// Clears the deletion marker of a soft-deleted row; it stays out of stock.
    async fn restore_by_details(
        &self,
        tx: &mut Tx,
        details_id: Uuid,
    ) -> Result<u64, RepositoryError>;
}
