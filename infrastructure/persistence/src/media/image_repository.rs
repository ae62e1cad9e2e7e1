use std::collections::HashMap;

use sqlx::query_as;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::media::model::Image;

use super::entity::ImageEntity;
use crate::errors::map_sqlx_error;
use crate::transaction::PgTx;

/// Rows of the polymorphic `images` table, keyed by `(owner_type, owner_id)`.
#[derive(Debug, Clone, Default)]
pub struct ImageRepositoryPostgres;

impl ImageRepositoryPostgres {
    pub fn new() -> Self {
        Self
    }

    /// Images of every listed owner, grouped by owner and oldest first.
    pub async fn for_owners(
        &self,
        tx: &mut PgTx,
        owner_type: &str,
        owner_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Image>>, RepositoryError> {
        if owner_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = query_as::<_, ImageEntity>(
            "SELECT owner_id, media_id, url, secure_url, public_id, created_at FROM images WHERE owner_type = $1 AND owner_id = ANY($2) ORDER BY created_at, media_id",
        )
        .bind(owner_type)
        .bind(owner_ids)
        .fetch_all(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        let mut grouped: HashMap<Uuid, Vec<Image>> = HashMap::new();
        for row in rows {
            grouped.entry(row.owner_id).or_default().push(row.into_domain());
        }
        Ok(grouped)
    }

    #[tracing::instrument(name = "images.repository.insert", skip(self, tx, image), fields(media_id = %image.media_id), err)]
    pub async fn insert(
        &self,
        tx: &mut PgTx,
        owner_type: &str,
        owner_id: Uuid,
        image: &Image,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO images (owner_type, owner_id, media_id, url, secure_url, public_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(owner_type)
        .bind(owner_id)
        .bind(&image.media_id)
        .bind(&image.url)
        .bind(&image.secure_url)
        .bind(&image.public_id)
        .bind(image.created_at)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    pub async fn delete(
        &self,
        tx: &mut PgTx,
        owner_type: &str,
        owner_id: Uuid,
        media_id: &str,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "DELETE FROM images WHERE owner_type = $1 AND owner_id = $2 AND media_id = $3",
        )
        .bind(owner_type)
        .bind(owner_id)
        .bind(media_id)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    pub async fn delete_from_owners(
        &self,
        tx: &mut PgTx,
        owner_type: &str,
        owner_ids: &[Uuid],
        media_id: &str,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "DELETE FROM images WHERE owner_type = $1 AND owner_id = ANY($2) AND media_id = $3",
        )
        .bind(owner_type)
        .bind(owner_ids)
        .bind(media_id)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    pub async fn delete_all(
        &self,
        tx: &mut PgTx,
        owner_type: &str,
        owner_id: Uuid,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM images WHERE owner_type = $1 AND owner_id = $2")
            .bind(owner_type)
            .bind(owner_id)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
