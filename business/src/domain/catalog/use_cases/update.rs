use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::catalog::details::SellableDetails;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::shared::diff::FieldDiff;

pub struct UpdateSellableParams<Patch> {
    pub id: String,
    pub price: Option<BigDecimal>,
    pub details: Patch,
}

/// What an update changed, per record. Both maps are empty for a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOutcome {
    pub details: FieldDiff,
    pub product: FieldDiff,
}

impl UpdateOutcome {
    pub fn is_empty(&self) -> bool {
        self.details.is_empty() && self.product.is_empty()
    }
}

#[async_trait]
pub trait UpdateSellableUseCase<D: SellableDetails>: Send + Sync {
    async fn execute(
        &self,
        params: UpdateSellableParams<D::Patch>,
    ) -> Result<UpdateOutcome, CatalogError>;
}
