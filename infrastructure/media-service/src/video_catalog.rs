use async_trait::async_trait;
use reqwest::StatusCode;

use business::domain::media::errors::MediaCatalogError;
use business::domain::media::model::VideoRef;
use business::domain::media::services::MediaCatalog;

use crate::client::MediaServiceClient;

/// Answers whether a video is still known to the media-management service
/// with `GET {base}/videos/{id}`.
pub struct VideoCatalogHttp {
    client: MediaServiceClient,
}

impl VideoCatalogHttp {
    pub fn new(client: MediaServiceClient) -> Self {
        Self { client }
    }

    fn interpret(status: StatusCode) -> Result<bool, MediaCatalogError> {
        match status {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND | StatusCode::GONE => Ok(false),
            other => Err(MediaCatalogError::UnexpectedStatus(other.as_u16())),
        }
    }
}

#[async_trait]
impl MediaCatalog for VideoCatalogHttp {
    async fn video_exists(&self, video: &VideoRef) -> Result<bool, MediaCatalogError> {
        let url = self.client.endpoint(&["videos", video.as_str()]);

        let response = self
            .client
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Media service request for video {} failed: {}", video, e);
                MediaCatalogError::Unavailable
            })?;

        Self::interpret(response.status()).inspect_err(|_| {
            tracing::warn!(
                "Media service answered {} for video {}",
                response.status(),
                video
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn should_treat_success_as_existing() {
        assert!(VideoCatalogHttp::interpret(StatusCode::OK).unwrap());
        assert!(VideoCatalogHttp::interpret(StatusCode::NO_CONTENT).unwrap());
    }

    #[test]
    fn should_treat_not_found_and_gone_as_missing() {
        assert!(!VideoCatalogHttp::interpret(StatusCode::NOT_FOUND).unwrap());
        assert!(!VideoCatalogHttp::interpret(StatusCode::GONE).unwrap());
    }

    #[test]
    fn should_surface_server_errors() {
        assert!(matches!(
            VideoCatalogHttp::interpret(StatusCode::BAD_GATEWAY),
            Err(MediaCatalogError::UnexpectedStatus(502))
        ));
    }

    #[tokio::test]
    async fn should_report_unreachable_service_as_unavailable() {
        let client =
            MediaServiceClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        let catalog = VideoCatalogHttp::new(client);

        let result = catalog
            .video_exists(&VideoRef::parse("vid_1").unwrap())
            .await;

        assert!(matches!(result, Err(MediaCatalogError::Unavailable)));
    }
}
