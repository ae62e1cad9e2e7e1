use async_trait::async_trait;

use super::coordinator::{LifecycleCoordinator, ensure_affected};
use crate::domain::catalog::details::SellableDetails;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::use_cases::publication::PublicationUseCase;
use crate::domain::shared::value_objects::parse_id;
use crate::domain::transaction::TransactionManager;

impl<T, D> LifecycleCoordinator<T, D>
where
    T: TransactionManager,
    D: SellableDetails,
{
    async fn set_published(&self, raw_id: &str, published: bool) -> Result<(), CatalogError> {
        let id = parse_id(raw_id)?;

        let mut tx = self.transactions.begin().await?;
        let rows = self.details.set_published(&mut tx, id, published).await?;
        ensure_affected(rows)?;
        let rows = self
            .products
            .set_published_by_details(&mut tx, id, published)
            .await?;
        ensure_affected(rows)?;
        self.transactions.commit(tx).await?;

        Ok(())
    }
}

#[async_trait]
impl<T, D> PublicationUseCase for LifecycleCoordinator<T, D>
where
    T: TransactionManager,
    D: SellableDetails,
{
    async fn publish(&self, id: &str) -> Result<(), CatalogError> {
        self.logger
            .info(&format!("Publishing {}: {}", self.family(), id));
        self.set_published(id, true).await?;
        self.logger
            .info(&format!("{} published: {}", self.family(), id));
        Ok(())
    }

    async fn unpublish(&self, id: &str) -> Result<(), CatalogError> {
        self.logger
            .info(&format!("Unpublishing {}: {}", self.family(), id));
        self.set_published(id, false).await?;
        self.logger
            .info(&format!("{} unpublished: {}", self.family(), id));
        Ok(())
    }
}
