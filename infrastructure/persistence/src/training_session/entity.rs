use chrono::{DateTime, Utc};
use sqlx::{FromRow, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::media::model::Image;
use business::domain::training_session::model::TrainingSession;

use crate::details::table::{DetailsTable, media_from_row};

#[derive(Debug, FromRow)]
pub struct TrainingSessionEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    pub location: Option<String>,
    pub in_stock: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub uploaded_image_count: i32,
    pub video_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct TrainingSessionTable;

impl DetailsTable for TrainingSessionTable {
    type Details = TrainingSession;
    type Entity = TrainingSessionEntity;

    const TABLE: &'static str = "training_sessions";
    const COLUMNS: &'static str = "id, name, description, duration_minutes, location, in_stock, deleted_at, uploaded_image_count, video_id, created_at, updated_at";
    const UPDATABLE: &'static [&'static str] =
        &["name", "description", "duration_minutes", "location"];

    fn entity_id(entity: &TrainingSessionEntity) -> Uuid {
        entity.id
    }

    fn into_domain(entity: TrainingSessionEntity, images: Vec<Image>) -> TrainingSession {
        TrainingSession {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            duration_minutes: entity.duration_minutes,
            location: entity.location,
            in_stock: entity.in_stock,
            deleted_at: entity.deleted_at,
            media: media_from_row(entity.uploaded_image_count, images, entity.video_id),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    fn insert(session: &TrainingSession) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(format!("INSERT INTO {} ({}) ", Self::TABLE, Self::COLUMNS));
        query.push_values(std::iter::once(session), |mut row, session| {
            row.push_bind(session.id)
                .push_bind(session.name.clone())
                .push_bind(session.description.clone())
                .push_bind(session.duration_minutes)
                .push_bind(session.location.clone())
                .push_bind(session.in_stock)
                .push_bind(session.deleted_at)
                .push_bind(0_i32)
                .push_bind(None::<String>)
                .push_bind(session.created_at)
                .push_bind(session.updated_at);
        });
        query
    }
}
