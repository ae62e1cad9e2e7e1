use async_trait::async_trait;

use super::coordinator::{LifecycleCoordinator, ensure_affected};
use crate::domain::catalog::details::SellableDetails;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::use_cases::restore::RestoreSellableUseCase;
use crate::domain::shared::value_objects::parse_id;
use crate::domain::transaction::TransactionManager;

#[async_trait]
impl<T, D> RestoreSellableUseCase for LifecycleCoordinator<T, D>
where
    T: TransactionManager,
    D: SellableDetails,
{
    async fn execute(&self, id: &str) -> Result<(), CatalogError> {
        let id = parse_id(id)?;
        self.logger
            .info(&format!("Restoring {}: {}", self.family(), id));

        let mut tx = self.transactions.begin().await?;
        ensure_affected(self.details.restore(&mut tx, id).await?)?;
        ensure_affected(self.products.restore_by_details(&mut tx, id).await?)?;
        self.transactions.commit(tx).await?;

        self.logger.info(&format!(
            "{} restored as unpublished: {}",
            self.family(),
            id
        ));
        Ok(())
    }
}
