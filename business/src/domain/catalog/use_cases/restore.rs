use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;

#[async_trait]
pub trait RestoreSellableUseCase: Send + Sync {
    /// Brings a soft-deleted pair back as Unpublished.
    async fn execute(&self, id: &str) -> Result<(), CatalogError>;
}
