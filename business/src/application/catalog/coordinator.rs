use std::sync::Arc;

use crate::domain::catalog::details::SellableDetails;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::repository::DetailsRepository;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::transaction::TransactionManager;

/// Keeps a Details record and its Product in step for one Details family.
///
/// Every operation runs inside a single transaction opened through
/// `transactions`; the handle is passed explicitly to both repositories and
/// is only committed once every write has reported success. The individual
/// operations live next to their use case trait (`create`, `update`,
/// `publication`, `delete`, `restore`, `get`, `list`).
pub struct LifecycleCoordinator<T: TransactionManager, D: SellableDetails> {
    pub transactions: Arc<T>,
    pub products: Arc<dyn ProductRepository<T::Tx>>,
    pub details: Arc<dyn DetailsRepository<T::Tx, Details = D>>,
    pub logger: Arc<dyn Logger>,
}

impl<T: TransactionManager, D: SellableDetails> LifecycleCoordinator<T, D> {
    pub fn new(
        transactions: Arc<T>,
        products: Arc<dyn ProductRepository<T::Tx>>,
        details: Arc<dyn DetailsRepository<T::Tx, Details = D>>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            transactions,
            products,
            details,
            logger,
        }
    }

    pub(crate) fn family(&self) -> &'static str {
        D::DETAILS_TYPE.as_str()
    }
}

/// Turns a row count into `NotFound` when the write matched nothing.
pub(crate) fn ensure_affected(rows: u64) -> Result<(), CatalogError> {
    if rows == 0 {
        return Err(CatalogError::NotFound);
    }
    Ok(())
}
