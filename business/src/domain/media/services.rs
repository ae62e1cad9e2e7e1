use async_trait::async_trait;

use super::errors::MediaCatalogError;
use super::model::VideoRef;

/// Service port for the external media-management service.
///
/// Binary content lives there; this system only asks whether a referenced
/// object still exists.
#[async_trait]
pub trait MediaCatalog: Send + Sync {
    async fn video_exists(&self, video: &VideoRef) -> Result<bool, MediaCatalogError>;
}
