use async_trait::async_trait;

use super::coordinator::LifecycleCoordinator;
use crate::domain::catalog::details::{Sellable, SellableDetails};
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::use_cases::get::{GetSellableParams, GetSellableUseCase};
use crate::domain::shared::value_objects::parse_id;
use crate::domain::transaction::TransactionManager;

#[async_trait]
impl<T, D> GetSellableUseCase<D> for LifecycleCoordinator<T, D>
where
    T: TransactionManager,
    D: SellableDetails,
{
    async fn execute(&self, params: GetSellableParams) -> Result<Sellable<D>, CatalogError> {
        let id = parse_id(&params.id)?;
        self.logger.debug(&format!(
            "Fetching {} {} ({})",
            self.family(),
            id,
            params.visibility
        ));

        let mut tx = self.transactions.begin().await?;
        let details = self.details.get(&mut tx, id, params.visibility).await?;
        let product = self
            .products
            .get_by_details(&mut tx, id, params.visibility)
            .await?;
        self.transactions.commit(tx).await?;

        Ok(Sellable { details, product })
    }
}
