use async_trait::async_trait;

use crate::domain::catalog::details::SellableDetails;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::shared::value_objects::Visibility;

pub struct ListSellablesParams {
    pub visibility: Visibility,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsPage<D> {
    pub items: Vec<D>,
    pub total: u64,
}

#[async_trait]
pub trait ListSellablesUseCase<D: SellableDetails>: Send + Sync {
    async fn execute(&self, params: ListSellablesParams) -> Result<DetailsPage<D>, CatalogError>;
}
