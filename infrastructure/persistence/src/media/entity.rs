use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::media::model::Image;

#[derive(Debug, FromRow)]
pub struct ImageEntity {
    pub owner_id: Uuid,
    pub media_id: String,
    pub url: String,
    pub secure_url: String,
    pub public_id: String,
    pub created_at: DateTime<Utc>,
}

impl ImageEntity {
    pub fn into_domain(self) -> Image {
        Image {
            media_id: self.media_id,
            url: self.url,
            secure_url: self.secure_url,
            public_id: self.public_id,
            created_at: self.created_at,
        }
    }
}
