use async_trait::async_trait;

use super::coordinator::LifecycleCoordinator;
use crate::domain::catalog::details::SellableDetails;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::use_cases::list::{
    DetailsPage, ListSellablesParams, ListSellablesUseCase,
};
use crate::domain::shared::value_objects::Page;
use crate::domain::transaction::TransactionManager;

#[async_trait]
impl<T, D> ListSellablesUseCase<D> for LifecycleCoordinator<T, D>
where
    T: TransactionManager,
    D: SellableDetails,
{
    async fn execute(&self, params: ListSellablesParams) -> Result<DetailsPage<D>, CatalogError> {
        let page = Page::new(params.limit, params.offset)?;

        let mut tx = self.transactions.begin().await?;
        let items = self.details.list(&mut tx, params.visibility, page).await?;
        let total = self.details.count(&mut tx, params.visibility).await?;
        self.transactions.commit(tx).await?;

        self.logger.debug(&format!(
            "Listed {} {} of {} ({})",
            items.len(),
            self.family(),
            total,
            params.visibility
        ));
        Ok(DetailsPage { items, total })
    }
}
