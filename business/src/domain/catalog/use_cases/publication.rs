use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;

/// Moves a pair between the Unpublished and Published states.
///
/// Repeating a transition is not short-circuited: publishing a published pair
/// rewrites both rows and succeeds again.
#[async_trait]
pub trait PublicationUseCase: Send + Sync {
    async fn publish(&self, id: &str) -> Result<(), CatalogError>;
    async fn unpublish(&self, id: &str) -> Result<(), CatalogError>;
}
