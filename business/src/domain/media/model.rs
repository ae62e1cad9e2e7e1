use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::validation::ValidationError;

/// Maximum number of images a single owner can hold.
pub const MAX_UPLOADED_IMAGES: u32 = 5;

static MEDIA_IDENTIFIER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_\-./]{0,254}$").ok());

/// Image metadata attached to exactly one owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Identifier assigned by the media-management service.
    pub media_id: String,
    pub url: String,
    pub secure_url: String,
    pub public_id: String,
    pub created_at: DateTime<Utc>,
}

/// Image confirmed by the media-management service, not yet attached.
#[derive(Debug, Clone, PartialEq)]
pub struct NewImage {
    pub media_id: String,
    pub url: String,
    pub secure_url: String,
    pub public_id: String,
}

impl NewImage {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_media_identifier(&self.media_id, "media.invalid_media_id")?;
        check_media_identifier(&self.public_id, "media.invalid_public_id")?;
        check_url(&self.url, "media.invalid_url")?;
        check_url(&self.secure_url, "media.invalid_secure_url")?;
        if !self.secure_url.starts_with("https://") {
            return Err(ValidationError("media.invalid_secure_url"));
        }
        Ok(())
    }

    pub fn into_image(self, created_at: DateTime<Utc>) -> Image {
        Image {
            media_id: self.media_id,
            url: self.url,
            secure_url: self.secure_url,
            public_id: self.public_id,
            created_at,
        }
    }
}

/// Reference to a video owned by the media-management service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoRef(String);

impl VideoRef {
    pub fn parse(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        check_media_identifier(&id, "media.invalid_video_id")?;
        Ok(Self(id))
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Media state carried by every Details record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaAttachments {
    pub uploaded_image_count: u32,
    pub images: Vec<Image>,
    pub video: Option<VideoRef>,
}

impl MediaAttachments {
    pub fn has_image_capacity(&self) -> bool {
        self.uploaded_image_count < MAX_UPLOADED_IMAGES
    }

    pub fn find_image(&self, media_id: &str) -> Option<&Image> {
        self.images.iter().find(|image| image.media_id == media_id)
    }
}

pub fn check_media_identifier(value: &str, code: &'static str) -> Result<(), ValidationError> {
    match MEDIA_IDENTIFIER.as_ref() {
        Some(pattern) if pattern.is_match(value) => Ok(()),
        _ => Err(ValidationError(code)),
    }
}

fn check_url(value: &str, code: &'static str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => Ok(()),
        _ => Err(ValidationError(code)),
    }
}
