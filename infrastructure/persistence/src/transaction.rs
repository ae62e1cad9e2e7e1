use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use business::domain::errors::RepositoryError;
use business::domain::transaction::TransactionManager;

use crate::errors::map_sqlx_error;

/// Transaction handle threaded through every Postgres repository method.
pub type PgTx = Transaction<'static, Postgres>;

/// Opens transactions on the shared pool. A [`PgTx`] dropped without
/// [`TransactionManager::commit`] is rolled back by sqlx.
pub struct PgTransactionManager {
    pool: PgPool,
}

impl PgTransactionManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionManager for PgTransactionManager {
    type Tx = PgTx;

    async fn begin(&self) -> Result<PgTx, RepositoryError> {
        self.pool.begin().await.map_err(map_sqlx_error)
    }

    async fn commit(&self, tx: PgTx) -> Result<(), RepositoryError> {
        tx.commit().await.map_err(map_sqlx_error)
    }
}
