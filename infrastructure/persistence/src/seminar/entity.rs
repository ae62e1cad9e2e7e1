use chrono::{DateTime, Utc};
use sqlx::{FromRow, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::media::model::Image;
use business::domain::seminar::model::Seminar;

use crate::details::table::{DetailsTable, media_from_row};

#[derive(Debug, FromRow)]
pub struct SeminarEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub location: Option<String>,
    pub in_stock: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub uploaded_image_count: i32,
    pub video_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct SeminarTable;

impl DetailsTable for SeminarTable {
    type Details = Seminar;
    type Entity = SeminarEntity;

    const TABLE: &'static str = "seminars";
    const COLUMNS: &'static str = "id, name, description, starts_at, ends_at, location, in_stock, deleted_at, uploaded_image_count, video_id, created_at, updated_at";
    const UPDATABLE: &'static [&'static str] =
        &["name", "description", "starts_at", "ends_at", "location"];

    fn entity_id(entity: &SeminarEntity) -> Uuid {
        entity.id
    }

    fn into_domain(entity: SeminarEntity, images: Vec<Image>) -> Seminar {
        Seminar {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            location: entity.location,
            in_stock: entity.in_stock,
            deleted_at: entity.deleted_at,
            media: media_from_row(entity.uploaded_image_count, images, entity.video_id),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    fn insert(seminar: &Seminar) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(format!("INSERT INTO {} ({}) ", Self::TABLE, Self::COLUMNS));
        query.push_values(std::iter::once(seminar), |mut row, seminar| {
            row.push_bind(seminar.id)
                .push_bind(seminar.name.clone())
                .push_bind(seminar.description.clone())
                .push_bind(seminar.starts_at)
                .push_bind(seminar.ends_at)
                .push_bind(seminar.location.clone())
                .push_bind(seminar.in_stock)
                .push_bind(seminar.deleted_at)
                .push_bind(0_i32)
                .push_bind(None::<String>)
                .push_bind(seminar.created_at)
                .push_bind(seminar.updated_at);
        });
        query
    }
}
