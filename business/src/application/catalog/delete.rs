use async_trait::async_trait;

use super::coordinator::{LifecycleCoordinator, ensure_affected};
use crate::domain::catalog::details::SellableDetails;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::use_cases::delete::DeleteSellableUseCase;
use crate::domain::shared::value_objects::parse_id;
use crate::domain::transaction::TransactionManager;

#[async_trait]
impl<T, D> DeleteSellableUseCase for LifecycleCoordinator<T, D>
where
    T: TransactionManager,
    D: SellableDetails,
{
    async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        let id = parse_id(id)?;
        self.logger
            .info(&format!("Deleting {}: {}", self.family(), id));

        let mut tx = self.transactions.begin().await?;
        self.details.lock_including_unpublished(&mut tx, id).await?;

        // Unpublish first, even when already unpublished.
        ensure_affected(self.details.set_published(&mut tx, id, false).await?)?;
        ensure_affected(
            self.products
                .set_published_by_details(&mut tx, id, false)
                .await?,
        )?;

        ensure_affected(self.details.soft_delete(&mut tx, id).await?)?;
        ensure_affected(self.products.soft_delete_by_details(&mut tx, id).await?)?;
        self.transactions.commit(tx).await?;

        self.logger
            .info(&format!("{} deleted: {}", self.family(), id));
        Ok(())
    }

    async fn delete_permanent(&self, id: &str) -> Result<(), CatalogError> {
        let id = parse_id(id)?;
        self.logger
            .warn(&format!("Permanently deleting {}: {}", self.family(), id));

        let mut tx = self.transactions.begin().await?;
        ensure_affected(self.details.permanent_delete(&mut tx, id).await?)?;
        ensure_affected(
            self.products
                .permanent_delete_by_details(&mut tx, id)
                .await?,
        )?;
        self.transactions.commit(tx).await?;

        self.logger
            .info(&format!("{} purged: {}", self.family(), id));
        Ok(())
    }
}
