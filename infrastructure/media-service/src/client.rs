use std::time::Duration;

use reqwest::{Client, Url};

#[derive(Debug, thiserror::Error)]
pub enum MediaServiceError {
    #[error("media_service.invalid_base_url")]
    InvalidBaseUrl,
}

/// Shared HTTP client for the media-management service.
pub struct MediaServiceClient {
    pub client: Client,
    pub base_url: Url,
}

impl MediaServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MediaServiceError> {
        let base_url = Url::parse(base_url).map_err(|_| MediaServiceError::InvalidBaseUrl)?;
        if base_url.cannot_be_a_base() {
            return Err(MediaServiceError::InvalidBaseUrl);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Ok(Self { client, base_url })
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
