use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;

#[async_trait]
pub trait DeleteSellableUseCase: Send + Sync {
    /// Unpublishes, then soft-deletes both records.
    async fn delete(&self, id: &str) -> Result<(), CatalogError>;

    /// Irreversibly removes an unpublished or soft-deleted pair.
    async fn delete_permanent(&self, id: &str) -> Result<(), CatalogError>;
}
