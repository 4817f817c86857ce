use reqwest::Client;
use serde::Deserialize;
use chrono::DateTime;
use std::fmt;
use crate::errors::YouTubeError;
use super::thumbnails::Thumbnails;
use super::{check_status, API_BASE};

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiVideo>>
}

#[derive(Debug, Deserialize)]
struct ApiVideo {
    id: String,
    status: Option<Status>,
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
struct Status {
    license: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    title: Option<String>,
    description: Option<String>,
    #[serde(rename = "defaultLanguage")]
    default_language: Option<String>,
    #[serde(rename = "defaultAudioLanguage")]
    default_audio_language: Option<String>,
    thumbnails: Option<Thumbnails>,
}

/// The `status.license` value YouTube reports for a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseFlag(String);

impl LicenseFlag {
    pub const CREATIVE_COMMON: &'static str = "creativeCommon";

    pub fn new(flag: impl Into<String>) -> Self {
        LicenseFlag(flag.into())
    }

    pub fn is_creative_commons(&self) -> bool {
        self.0 == Self::CREATIVE_COMMON
    }
}

impl fmt::Display for LicenseFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub id: String,
    pub license: LicenseFlag,
    pub title: String,
    pub description: String,
    pub language: Option<String>,
    pub published_at: Option<i64>,
    pub thumbnails: Thumbnails,
}

fn into_record(video: ApiVideo) -> Result<VideoRecord, YouTubeError> {
    let missing = |field| YouTubeError::MissingField {
        record: format!("video {}", video.id),
        field,
    };

    let license = video.status
        .and_then(|s| s.license)
        .ok_or_else(|| missing("status.license"))?;
    let snippet = video.snippet.ok_or_else(|| missing("snippet"))?;
    let title = snippet.title.ok_or_else(|| missing("snippet.title"))?;

    let published_at = snippet.published_at
        .as_deref()
        .and_then(|dt| DateTime::parse_from_rfc3339(dt).ok())
        .map(|dt| dt.timestamp());

    Ok(VideoRecord {
        license: LicenseFlag::new(license),
        title,
        description: snippet.description.unwrap_or_default(),
        language: snippet.default_audio_language.or(snippet.default_language),
        published_at,
        thumbnails: snippet.thumbnails.unwrap_or_default(),
        id: video.id,
    })
}

pub async fn get_videos(
    client: &Client,
    video_ids: &[String],
    api_key: &str,
) -> Result<Vec<VideoRecord>, YouTubeError> {
    if video_ids.is_empty() {
        return Ok(Vec::new());
    }

    let ids = video_ids.join(",");
    tracing::debug!(count = video_ids.len(), "Looking up videos");

    let resp = client
        .get(format!("{}/videos", API_BASE))
        .query(&[("part", "status,snippet"), ("id", ids.as_str())])
        .header("X-Goog-Api-Key", api_key)
        .header("X-Goog-Fieldmask", "items(id,status.license,snippet(publishedAt,title,description,defaultLanguage,defaultAudioLanguage,thumbnails))")
        .send()
        .await
        .map_err(|e| YouTubeError::Other(Box::new(e)))?;

    let resp = check_status(resp).await?;

    let api_response: ApiResponse = resp
        .json()
        .await
        .map_err(|e| YouTubeError::ParseError(e.to_string()))?;

    api_response.items
        .unwrap_or_default()
        .into_iter()
        .map(into_record)
        .collect()
}
