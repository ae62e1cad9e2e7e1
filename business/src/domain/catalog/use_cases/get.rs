use async_trait::async_trait;

use crate::domain::catalog::details::{Sellable, SellableDetails};
use crate::domain::catalog::errors::CatalogError;
use crate::domain::shared::value_objects::Visibility;

pub struct GetSellableParams {
    pub id: String,
    pub visibility: Visibility,
}

#[async_trait]
pub trait GetSellableUseCase<D: SellableDetails>: Send + Sync {
    async fn execute(&self, params: GetSellableParams) -> Result<Sellable<D>, CatalogError>;
}
