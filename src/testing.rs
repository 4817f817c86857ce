//! In-memory [`YouTubeApi`] used by the importer and builder tests.

use std::collections::{HashMap, VecDeque};
use parking_lot::Mutex;
use crate::errors::YouTubeError;
use crate::youtube::thumbnails::{Thumbnail, Thumbnails};
use crate::youtube::{ChannelRecord, LicenseFlag, PlaylistPage, VideoRecord, YouTubeApi};

#[derive(Debug, Default)]
struct Calls {
    page_requests: usize,
    video_lookups: usize,
}

#[derive(Default)]
pub struct FakeYouTube {
    playlists: HashMap<String, Vec<Vec<String>>>,
    videos: HashMap<String, VideoRecord>,
    lookups: Mutex<VecDeque<Vec<VideoRecord>>>,
    channel: Option<ChannelRecord>,
    failing_page: Option<usize>,
    calls: Mutex<Calls>,
}

/// A video record with a `medium` and a `default` thumbnail.
pub fn video(id: &str, title: &str, license: &str) -> VideoRecord {
    let thumbnails: Thumbnails = [("medium", "mqdefault"), ("default", "default")]
        .into_iter()
        .map(|(size, file)| {
            (size.to_string(), Thumbnail { url: Some(format!("https://i.ytimg.com/vi/{}/{}.jpg", id, file)) })
        })
        .collect();

    VideoRecord {
        id: id.to_string(),
        license: LicenseFlag::new(license),
        title: title.to_string(),
        description: String::new(),
        language: Some("ar".to_string()),
        published_at: Some(1688822964),
        thumbnails,
    }
}

impl FakeYouTube {
    pub fn new() -> Self {
        FakeYouTube::default()
    }

    /// Registers a playlist served as the given pages of video ids.
    pub fn with_playlist(mut self, playlist_id: &str, pages: Vec<Vec<&str>>) -> Self {
        let pages = pages
            .into_iter()
            .map(|page| page.into_iter().map(str::to_string).collect())
            .collect();
        self.playlists.insert(playlist_id.to_string(), pages);
        self
    }

    pub fn with_video(mut self, record: VideoRecord) -> Self {
        self.videos.insert(record.id.clone(), record);
        self
    }

    /// Registers standard-licensed videos titled `Video <id>`.
    pub fn with_videos(mut self, ids: &[&str]) -> Self {
        for id in ids {
            self.videos.insert(id.to_string(), video(id, &format!("Video {}", id), "youtube"));
        }
        self
    }

    /// Queues the exact response for the next `list_videos` call, ignoring
    /// the requested ids. Queued responses are served before the registry.
    pub fn with_lookup(self, records: Vec<VideoRecord>) -> Self {
        self.lookups.lock().push_back(records);
        self
    }

    pub fn with_channel(mut self, record: ChannelRecord) -> Self {
        self.channel = Some(record);
        self
    }

    /// Makes the `n`th page request (counting from zero, across playlists) fail.
    pub fn failing_page(mut self, n: usize) -> Self {
        self.failing_page = Some(n);
        self
    }

    pub fn page_requests(&self) -> usize {
        self.calls.lock().page_requests
    }

    pub fn video_lookups(&self) -> usize {
        self.calls.lock().video_lookups
    }
}

impl YouTubeApi for FakeYouTube {
    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
        max_results: u32,
    ) -> Result<PlaylistPage, YouTubeError> {
        assert_eq!(max_results, 50);

        let request = {
            let mut calls = self.calls.lock();
            calls.page_requests += 1;
            calls.page_requests - 1
        };
        if self.failing_page == Some(request) {
            return Err(YouTubeError::InternalServerError);
        }

        let pages = self.playlists.get(playlist_id).ok_or(YouTubeError::NotFound)?;
        let index = match page_token {
            None => 0,
            Some(token) => token
                .parse::<usize>()
                .map_err(|e| YouTubeError::ParseError(e.to_string()))?,
        };
        let video_ids = pages.get(index).cloned().ok_or(YouTubeError::NotFound)?;
        let next_page_token = (index + 1 < pages.len()).then(|| (index + 1).to_string());

        Ok(PlaylistPage {
            video_ids,
            next_page_token,
        })
    }

    async fn list_videos(&self, video_ids: &[String]) -> Result<Vec<VideoRecord>, YouTubeError> {
        self.calls.lock().video_lookups += 1;

        if let Some(records) = self.lookups.lock().pop_front() {
            return Ok(records);
        }

        Ok(video_ids
            .iter()
            .filter_map(|id| self.videos.get(id).cloned())
            .collect())
    }

    async fn get_channel(&self, channel_id: &str) -> Result<ChannelRecord, YouTubeError> {
        self.channel
            .clone()
            .filter(|c| c.id == channel_id)
            .ok_or(YouTubeError::NotFound)
    }
}
