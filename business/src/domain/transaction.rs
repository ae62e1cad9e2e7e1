use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Port for opening and committing database transactions.
///
/// Every repository method receives the transaction handle explicitly as
/// `&mut Self::Tx`. A handle dropped without `commit` is rolled back, so an
/// early `?` return inside a use case discards every write made through it.
#[async_trait]
pub trait TransactionManager: Send + Sync {
    type Tx: Send + 'static;

    async fn begin(&self) -> Result<Self::Tx, RepositoryError>;
    async fn commit(&self, tx: Self::Tx) -> Result<(), RepositoryError>;
}
