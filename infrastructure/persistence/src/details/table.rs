use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::catalog::details::SellableDetails;
use business::domain::media::model::{Image, MediaAttachments, VideoRef};
use business::domain::media::owner::Owner;

/// Table layout of one Details family.
///
/// Every family table carries `id`, `name`, `in_stock`, `deleted_at`,
/// `uploaded_image_count`, `video_id`, `created_at` and `updated_at`; the
/// family adds its own columns on top.
pub trait DetailsTable: Send + Sync + 'static {
    type Details: SellableDetails + Owner;
    type Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin;

    const TABLE: &'static str;
    /// Select list, in the order the entity expects.
    const COLUMNS: &'static str;
    /// Columns a diff may touch.
    const UPDATABLE: &'static [&'static str];

    fn entity_id(entity: &Self::Entity) -> Uuid;

    fn into_domain(entity: Self::Entity, images: Vec<Image>) -> Self::Details;

    fn insert(details: &Self::Details) -> QueryBuilder<'static, Postgres>;
}

/// Rebuilds media state from the stored counter, image rows and video column.
pub fn media_from_row(
    uploaded_image_count: i32,
    images: Vec<Image>,
    video_id: Option<String>,
) -> MediaAttachments {
    MediaAttachments {
        uploaded_image_count: u32::try_from(uploaded_image_count).unwrap_or_default(),
        images,
        video: video_id.map(VideoRef::from_repository),
    }
}
