use async_trait::async_trait;

use super::coordinator::{LifecycleCoordinator, ensure_affected};
use crate::domain::catalog::details::SellableDetails;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::use_cases::update::{
    UpdateOutcome, UpdateSellableParams, UpdateSellableUseCase,
};
use crate::domain::product::model::validate_price;
use crate::domain::shared::diff::{FieldDiff, record_change};
use crate::domain::shared::value_objects::parse_id;
use crate::domain::transaction::TransactionManager;

#[async_trait]
impl<T, D> UpdateSellableUseCase<D> for LifecycleCoordinator<T, D>
where
    T: TransactionManager,
    D: SellableDetails,
{
    async fn execute(
        &self,
        params: UpdateSellableParams<D::Patch>,
    ) -> Result<UpdateOutcome, CatalogError> {
        let id = parse_id(&params.id)?;
        D::validate_patch(&params.details)?;
        if let Some(price) = &params.price {
            validate_price(price)?;
        }

        let mut tx = self.transactions.begin().await?;
        let details = self.details.lock_including_unpublished(&mut tx, id).await?;
        let product = self.products.lock_by_details(&mut tx, id).await?;

        let details_diff = details.diff(&params.details)?;
        let mut product_diff = FieldDiff::new();
        record_change(&mut product_diff, "price", &product.price, params.price.as_ref());

        if !details_diff.is_empty() {
            let rows = self.details.update_fields(&mut tx, id, &details_diff).await?;
            ensure_affected(rows)?;
        }
        if !product_diff.is_empty() {
            let rows = self
                .products
                .update_fields_by_details(&mut tx, id, &product_diff)
                .await?;
            ensure_affected(rows)?;
        }
        self.transactions.commit(tx).await?;

        let outcome = UpdateOutcome {
            details: details_diff,
            product: product_diff,
        };
        if outcome.is_empty() {
            self.logger
                .debug(&format!("No changes requested for {} {}", self.family(), id));
        } else {
            self.logger.info(&format!(
                "{} {} updated: {} details field(s), {} product field(s)",
                self.family(),
                id,
                outcome.details.len(),
                outcome.product.len()
            ));
        }
        Ok(outcome)
    }
}
