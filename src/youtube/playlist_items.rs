use reqwest::Client;
use serde::Deserialize;
use crate::errors::YouTubeError;
use super::{check_status, API_BASE};

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
    items: Option<Vec<ApiPlaylistItem>>
}

#[derive(Debug, Deserialize)]
struct ApiPlaylistItem {
    id: Option<String>,
    #[serde(rename = "contentDetails")]
    content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

/// One page of a playlist: the referenced video ids in playlist order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistPage {
    pub video_ids: Vec<String>,
    pub next_page_token: Option<String>,
}

fn into_page(api_response: ApiResponse) -> Result<PlaylistPage, YouTubeError> {
    let video_ids = api_response.items
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            item.content_details
                .and_then(|d| d.video_id)
                .ok_or_else(|| YouTubeError::MissingField {
                    record: format!("playlist item {}", item.id.as_deref().unwrap_or("<unknown>")),
                    field: "contentDetails.videoId",
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PlaylistPage {
        video_ids,
        next_page_token: api_response.next_page_token.filter(|t| !t.is_empty()),
    })
}

pub async fn get_playlist_items(
    client: &Client,
    playlist_id: &str,
    api_key: &str,
    page_token: Option<&str>,
    max_results: u32,
) -> Result<PlaylistPage, YouTubeError> {
    let max_results = max_results.to_string();
    let mut query = vec![
        ("part", "contentDetails"),
        ("playlistId", playlist_id),
        ("maxResults", max_results.as_str()),
    ];

    if let Some(token) = page_token {
        query.push(("pageToken", token));
    }

    tracing::debug!(playlist_id, page_token, "Fetching playlist items");

    let resp = client
        .get(format!("{}/playlistItems", API_BASE))
        .query(&query)
        .header("X-Goog-Api-Key", api_key)
        .header("X-Goog-Fieldmask", "nextPageToken,items(id,contentDetails.videoId)")
        .send()
        .await
        .map_err(|e| YouTubeError::Other(Box::new(e)))?;

    let resp = check_status(resp).await?;

    let api_response: ApiResponse = resp
        .json()
        .await
        .map_err(|e| YouTubeError::ParseError(e.to_string()))?;

    into_page(api_response)
}
