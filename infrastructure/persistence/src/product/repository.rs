use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::diff::FieldDiff;
use business::domain::shared::value_objects::Visibility;

use super::entity::ProductEntity;
use crate::details::fields::build_update;
use crate::errors::map_sqlx_error;
use crate::transaction::PgTx;
use crate::visibility::visibility_filter;

const COLUMNS: &str =
    "id, price, details_id, details_type, in_stock, deleted_at, created_at, updated_at";
const UPDATABLE: &[&str] = &["price"];

#[derive(Debug, Clone, Default)]
pub struct ProductRepositoryPostgres;

impl ProductRepositoryPostgres {
    pub fn new() -> Self {
        Self
    }

    async fn fetch_by_details(
        &self,
        tx: &mut PgTx,
        details_id: Uuid,
        predicate: &str,
        suffix: &str,
    ) -> Result<Product, RepositoryError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM products WHERE details_id = $1 AND {predicate} {suffix}"
        );
        sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(details_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?
            .into_domain()
    }

    async fn execute_by_details(
        &self,
        tx: &mut PgTx,
        sql: &str,
        details_id: Uuid,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(sql)
            .bind(details_id)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ProductRepository<PgTx> for ProductRepositoryPostgres {
    async fn get_by_details(
        &self,
        tx: &mut PgTx,
        details_id: Uuid,
        visibility: Visibility,
    ) -> Result<Product, RepositoryError> {
        self.fetch_by_details(tx, details_id, visibility_filter(visibility), "")
            .await
    }

    async fn lock_by_details(
        &self,
        tx: &mut PgTx,
        details_id: Uuid,
    ) -> Result<Product, RepositoryError> {
        self.fetch_by_details(tx, details_id, "deleted_at IS NULL", "FOR UPDATE")
            .await
    }

    #[tracing::instrument(name = "products.repository.create", skip(self, tx, product), fields(product_id = %product.id), err)]
    async fn create(&self, tx: &mut PgTx, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, price, details_id, details_type, in_stock, deleted_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(product.id)
        .bind(&product.price)
        .bind(product.details_id)
        .bind(product.details_type.as_str())
        .bind(product.in_stock)
        .bind(product.deleted_at)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn set_published_by_details(
        &self,
        tx: &mut PgTx,
        details_id: Uuid,
        published: bool,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET in_stock = $2, updated_at = NOW() WHERE details_id = $1 AND deleted_at IS NULL",
        )
        .bind(details_id)
        .bind(published)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn update_fields_by_details(
        &self,
        tx: &mut PgTx,
        details_id: Uuid,
        diff: &FieldDiff,
    ) -> Result<u64, RepositoryError> {
        let mut query = build_update("products", "details_id", details_id, diff, UPDATABLE)?;
        let result = query
            .build()
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn soft_delete_by_details(
        &self,
        tx: &mut PgTx,
        details_id: Uuid,
    ) -> Result<u64, RepositoryError> {
        self.execute_by_details(
            tx,
            "UPDATE products SET deleted_at = NOW(), in_stock = FALSE, updated_at = NOW() WHERE details_id = $1 AND deleted_at IS NULL",
            details_id,
        )
        .await
    }

    async fn permanent_delete_by_details(
        &self,
        tx: &mut PgTx,
        details_id: Uuid,
    ) -> Result<u64, RepositoryError> {
        self.execute_by_details(
            tx,
            "DELETE FROM products WHERE details_id = $1 AND NOT in_stock",
            details_id,
        )
        .await
    }

    async fn restore_by_details(
        &self,
        tx: &mut PgTx,
        details_id: Uuid,
    ) -> Result<u64, RepositoryError> {
        self.execute_by_details(
            tx,
            "UPDATE products SET deleted_at = NULL, in_stock = FALSE, updated_at = NOW() WHERE details_id = $1 AND deleted_at IS NOT NULL",
            details_id,
        )
        .await
    }
}
