use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder, query_as};
use uuid::Uuid;

use business::domain::catalog::details::SellableDetails;
use business::domain::catalog::repository::DetailsRepository;
use business::domain::errors::RepositoryError;
use business::domain::media::model::VideoRef;
use business::domain::shared::diff::FieldDiff;
use business::domain::shared::value_objects::{Page, Visibility};

use super::fields::build_update;
use super::table::DetailsTable;
use crate::errors::map_sqlx_error;
use crate::media::image_repository::ImageRepositoryPostgres;
use crate::transaction::PgTx;
use crate::visibility::visibility_filter;

/// Details rows of the family described by `F`, images included.
pub struct DetailsRepositoryPostgres<F: DetailsTable> {
    images: ImageRepositoryPostgres,
    table: PhantomData<F>,
}

impl<F: DetailsTable> Default for DetailsRepositoryPostgres<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: DetailsTable> DetailsRepositoryPostgres<F> {
    pub fn new() -> Self {
        Self {
            images: ImageRepositoryPostgres::new(),
            table: PhantomData,
        }
    }

    pub(crate) fn owner_type() -> &'static str {
        F::Details::DETAILS_TYPE.as_str()
    }

    pub(crate) fn images(&self) -> &ImageRepositoryPostgres {
        &self.images
    }

    /// `SELECT <columns> FROM <table> WHERE `; the caller pushes the predicate.
    pub(crate) fn select() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new(format!("SELECT {} FROM {} WHERE ", F::COLUMNS, F::TABLE))
    }

    /// Runs a select built by [`Self::select`] and attaches each row's images.
    pub(crate) async fn load(
        &self,
        tx: &mut PgTx,
        mut query: QueryBuilder<'static, Postgres>,
    ) -> Result<Vec<F::Details>, RepositoryError> {
        let entities = query
            .build_query_as::<F::Entity>()
            .fetch_all(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        let ids = entities.iter().map(F::entity_id).collect::<Vec<_>>();
        let mut images = self
            .images
            .for_owners(tx, Self::owner_type(), &ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let owned = images.remove(&F::entity_id(&entity)).unwrap_or_default();
                F::into_domain(entity, owned)
            })
            .collect())
    }

    async fn load_one(
        &self,
        tx: &mut PgTx,
        query: QueryBuilder<'static, Postgres>,
    ) -> Result<F::Details, RepositoryError> {
        self.load(tx, query)
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::not_found())
    }

    async fn execute_by_id(&self, tx: &mut PgTx, sql: &str, id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query(sql)
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }

    /// Recomputes `uploaded_image_count` of the listed owners from their image rows.
    ///
    /// Soft-deleted owners are included so central unlinks keep them consistent.
    pub(crate) async fn refresh_image_counts(
        &self,
        tx: &mut PgTx,
        owner_ids: &[Uuid],
    ) -> Result<u64, RepositoryError> {
        let sql = format!(
            "UPDATE {table} SET uploaded_image_count = (SELECT COUNT(*) FROM images i WHERE i.owner_type = $1 AND i.owner_id = {table}.id), updated_at = NOW() WHERE id = ANY($2)",
            table = F::TABLE
        );
        let result = sqlx::query(&sql)
            .bind(Self::owner_type())
            .bind(owner_ids)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }

    pub(crate) async fn set_video_column(
        &self,
        tx: &mut PgTx,
        owner_id: Uuid,
        video: Option<&VideoRef>,
    ) -> Result<u64, RepositoryError> {
        let sql = format!(
            "UPDATE {} SET video_id = $2, updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
            F::TABLE
        );
        let result = sqlx::query(&sql)
            .bind(owner_id)
            .bind(video.map(|v| v.as_str().to_string()))
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }

    pub(crate) async fn clear_video_where_matching(
        &self,
        tx: &mut PgTx,
        owner_ids: &[Uuid],
        video: &VideoRef,
    ) -> Result<u64, RepositoryError> {
        let sql = format!(
            "UPDATE {} SET video_id = NULL, updated_at = NOW() WHERE id = ANY($1) AND video_id = $2",
            F::TABLE
        );
        let result = sqlx::query(&sql)
            .bind(owner_ids)
            .bind(video.as_str())
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl<F: DetailsTable> DetailsRepository<PgTx> for DetailsRepositoryPostgres<F> {
    type Details = F::Details;

    #[tracing::instrument(name = "details.repository.get", skip(self, tx), err)]
    async fn get(
        &self,
        tx: &mut PgTx,
        id: Uuid,
        visibility: Visibility,
    ) -> Result<F::Details, RepositoryError> {
        let mut query = Self::select();
        query
            .push("id = ")
            .push_bind(id)
            .push(" AND ")
            .push(visibility_filter(visibility));
        self.load_one(tx, query).await
    }

    async fn lock_including_unpublished(
        &self,
        tx: &mut PgTx,
        id: Uuid,
    ) -> Result<F::Details, RepositoryError> {
        let mut query = Self::select();
        query
            .push("id = ")
            .push_bind(id)
            .push(" AND deleted_at IS NULL FOR UPDATE");
        self.load_one(tx, query).await
    }

    async fn list(
        &self,
        tx: &mut PgTx,
        visibility: Visibility,
        page: Page,
    ) -> Result<Vec<F::Details>, RepositoryError> {
        let mut query = Self::select();
        query
            .push(visibility_filter(visibility))
            .push(" ORDER BY created_at DESC, id LIMIT ")
            .push_bind(i64::from(page.limit))
            .push(" OFFSET ")
            .push_bind(i64::from(page.offset));
        self.load(tx, query).await
    }

    async fn count(&self, tx: &mut PgTx, visibility: Visibility) -> Result<u64, RepositoryError> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {}",
            F::TABLE,
            visibility_filter(visibility)
        );
        let (total,): (i64,) = query_as(&sql)
            .fetch_one(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    #[tracing::instrument(name = "details.repository.create", skip(self, tx, details), err)]
    async fn create(&self, tx: &mut PgTx, details: &F::Details) -> Result<(), RepositoryError> {
        F::insert(details)
            .build()
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn set_published(
        &self,
        tx: &mut PgTx,
        id: Uuid,
        published: bool,
    ) -> Result<u64, RepositoryError> {
        let sql = format!(
            "UPDATE {} SET in_stock = $2, updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
            F::TABLE
        );
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(published)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }

    async fn update_fields(
        &self,
        tx: &mut PgTx,
        id: Uuid,
        diff: &FieldDiff,
    ) -> Result<u64, RepositoryError> {
        let mut query = build_update(F::TABLE, "id", id, diff, F::UPDATABLE)?;
        let result = query
            .build()
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }

    async fn soft_delete(&self, tx: &mut PgTx, id: Uuid) -> Result<u64, RepositoryError> {
        let sql = format!(
            "UPDATE {} SET deleted_at = NOW(), in_stock = FALSE, updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
            F::TABLE
        );
        self.execute_by_id(tx, &sql, id).await
    }

    #[tracing::instrument(name = "details.repository.permanent_delete", skip(self, tx), err)]
    async fn permanent_delete(&self, tx: &mut PgTx, id: Uuid) -> Result<u64, RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 AND NOT in_stock", F::TABLE);
        let rows = self.execute_by_id(tx, &sql, id).await?;
        if rows > 0 {
            let images = self.images.delete_all(tx, Self::owner_type(), id).await?;
            tracing::debug!(images, "purged owner images");
        }
        Ok(rows)
    }

    async fn restore(&self, tx: &mut PgTx, id: Uuid) -> Result<u64, RepositoryError> {
        let sql = format!(
            "UPDATE {} SET deleted_at = NULL, in_stock = FALSE, updated_at = NOW() WHERE id = $1 AND deleted_at IS NOT NULL",
            F::TABLE
        );
        self.execute_by_id(tx, &sql, id).await
    }
}
