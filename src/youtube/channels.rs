use reqwest::Client;
use serde::Deserialize;
use crate::errors::YouTubeError;
use super::thumbnails::Thumbnails;
use super::{check_status, API_BASE};

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiChannel>>
}

#[derive(Debug, Deserialize)]
struct ApiChannel {
    id: String,
    snippet: Option<ChannelSnippet>,
}

#[derive(Debug, Deserialize)]
struct ChannelSnippet {
    title: Option<String>,
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelRecord {
    pub id: String,
    pub title: Option<String>,
    pub thumbnails: Thumbnails,
}

fn into_record(api_response: ApiResponse) -> Result<ChannelRecord, YouTubeError> {
    let channel = api_response.items
        .and_then(|mut items| items.pop())
        .ok_or(YouTubeError::NotFound)?;

    let (title, thumbnails) = match channel.snippet {
        Some(snippet) => (snippet.title, snippet.thumbnails.unwrap_or_default()),
        None => (None, Thumbnails::new()),
    };

    Ok(ChannelRecord {
        id: channel.id,
        title,
        thumbnails,
    })
}

pub async fn get_channel(
    client: &Client,
    channel_id: &str,
    api_key: &str,
) -> Result<ChannelRecord, YouTubeError> {
    tracing::debug!(channel_id, "Fetching channel");

    let resp = client
        .get(format!("{}/channels", API_BASE))
        .query(&[("part", "snippet"), ("id", channel_id)])
        .header("X-Goog-Api-Key", api_key)
        .header("X-Goog-Fieldmask", "items(id,snippet(title,thumbnails))")
        .send()
        .await
        .map_err(|e| YouTubeError::Other(Box::new(e)))?;

    let resp = check_status(resp).await?;

    let api_response: ApiResponse = resp
        .json()
        .await
        .map_err(|e| YouTubeError::ParseError(e.to_string()))?;

    into_record(api_response)
}
