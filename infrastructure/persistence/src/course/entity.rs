use chrono::{DateTime, Utc};
use sqlx::{FromRow, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::course::model::Course;
use business::domain::media::model::Image;

use crate::details::table::{DetailsTable, media_from_row};

#[derive(Debug, FromRow)]
pub struct CourseEntity {
    pub id: Uuid,
    pub name: String,
    pub short_description: Option<String>,
    pub description: String,
    pub duration_hours: i32,
    pub access_days: i32,
    pub in_stock: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub uploaded_image_count: i32,
    pub video_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct CourseTable;

impl DetailsTable for CourseTable {
    type Details = Course;
    type Entity = CourseEntity;

    const TABLE: &'static str = "courses";
    const COLUMNS: &'static str = "id, name, short_description, description, duration_hours, access_days, in_stock, deleted_at, uploaded_image_count, video_id, created_at, updated_at";
    const UPDATABLE: &'static [&'static str] = &[
        "name",
        "short_description",
        "description",
        "duration_hours",
        "access_days",
    ];

    fn entity_id(entity: &CourseEntity) -> Uuid {
        entity.id
    }

    fn into_domain(entity: CourseEntity, images: Vec<Image>) -> Course {
        Course {
            id: entity.id,
            name: entity.name,
            short_description: entity.short_description,
            description: entity.description,
            duration_hours: entity.duration_hours,
            access_days: entity.access_days,
            in_stock: entity.in_stock,
            deleted_at: entity.deleted_at,
            media: media_from_row(entity.uploaded_image_count, images, entity.video_id),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    fn insert(course: &Course) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(format!("INSERT INTO {} ({}) ", Self::TABLE, Self::COLUMNS));
        query.push_values(std::iter::once(course), |mut row, course| {
            row.push_bind(course.id)
                .push_bind(course.name.clone())
                .push_bind(course.short_description.clone())
                .push_bind(course.description.clone())
                .push_bind(course.duration_hours)
                .push_bind(course.access_days)
                .push_bind(course.in_stock)
                .push_bind(course.deleted_at)
                .push_bind(0_i32)
                .push_bind(None::<String>)
                .push_bind(course.created_at)
                .push_bind(course.updated_at);
        });
        query
    }
}
