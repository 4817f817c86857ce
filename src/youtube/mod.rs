pub mod channels;
pub mod playlist_items;
pub mod thumbnails;
pub mod videos;

use reqwest::{Client, Response};
use serde::Deserialize;
use crate::errors::YouTubeError;

pub use channels::ChannelRecord;
pub use playlist_items::PlaylistPage;
pub use videos::{LicenseFlag, VideoRecord};

pub const API_BASE: &str = "https://youtube.googleapis.com/youtube/v3";

/// The YouTube Data API calls the importer needs.
///
/// [`YouTubeClient`] talks to the real API; tests substitute an in-memory fixture.
pub trait YouTubeApi {
    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
        max_results: u32,
    ) -> Result<PlaylistPage, YouTubeError>;

    /// Looks up status and snippet for every id in one batched request.
    async fn list_videos(&self, video_ids: &[String]) -> Result<Vec<VideoRecord>, YouTubeError>;

    async fn get_channel(&self, channel_id: &str) -> Result<ChannelRecord, YouTubeError>;
}

pub struct YouTubeClient {
    client: Client,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(client: Client, api_key: String) -> Self {
        YouTubeClient { client, api_key }
    }
}

impl YouTubeApi for YouTubeClient {
    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
        max_results: u32,
    ) -> Result<PlaylistPage, YouTubeError> {
        playlist_items::get_playlist_items(&self.client, playlist_id, &self.api_key, page_token, max_results).await
    }

    async fn list_videos(&self, video_ids: &[String]) -> Result<Vec<VideoRecord>, YouTubeError> {
        videos::get_videos(&self.client, video_ids, &self.api_key).await
    }

    async fn get_channel(&self, channel_id: &str) -> Result<ChannelRecord, YouTubeError> {
        channels::get_channel(&self.client, channel_id, &self.api_key).await
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

const QUOTA_EXCEEDED_PREFIX: &str = "The request cannot be completed because you have exceeded your";

/// Maps non-OK statuses to [`YouTubeError`], passing OK responses through.
async fn check_status(resp: Response) -> Result<Response, YouTubeError> {
    match resp.status() {
        reqwest::StatusCode::TOO_MANY_REQUESTS => Err(YouTubeError::Ratelimited),
        reqwest::StatusCode::FORBIDDEN => {
            let body = resp
                .text()
                .await
                .map_err(|e| YouTubeError::ParseError(e.to_string()))?;

            // A 403 without the usual JSON error body is still a plain Forbidden.
            let quota_exceeded = serde_json::from_str::<ErrorResponse>(&body)
                .map(|r| is_quota_exceeded(&r.error.message))
                .unwrap_or(false);
            if quota_exceeded {
                return Err(YouTubeError::Ratelimited);
            }
            Err(YouTubeError::Forbidden)
        },
        reqwest::StatusCode::NOT_FOUND => Err(YouTubeError::NotFound),
        reqwest::StatusCode::UNAUTHORIZED => Err(YouTubeError::Unauthorized),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR | reqwest::StatusCode::SERVICE_UNAVAILABLE => {
            Err(YouTubeError::InternalServerError)
        },
        reqwest::StatusCode::OK => Ok(resp),
        status => {
            let body = resp
                .text()
                .await
                .map_err(|e| YouTubeError::ParseError(e.to_string()))?;
            tracing::error!(status = status.as_u16(), %body, "Unknown status code");
            Err(YouTubeError::UnknownStatusCode(status))
        }
    }
}

fn is_quota_exceeded(message: &str) -> bool {
    message.starts_with(QUOTA_EXCEEDED_PREFIX)
}
