use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::catalog::details::SellableDetails;
use crate::domain::catalog::errors::CatalogError;

pub struct CreateSellableParams<Draft> {
    pub price: BigDecimal,
    pub details: Draft,
}

/// Identities generated for a newly created pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedSellable {
    pub details_id: Uuid,
    pub product_id: Uuid,
}

#[async_trait]
pub trait CreateSellableUseCase<D: SellableDetails>: Send + Sync {
    async fn execute(
        &self,
        params: CreateSellableParams<D::Draft>,
    ) -> Result<CreatedSellable, CatalogError>;
}
