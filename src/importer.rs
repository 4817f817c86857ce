use std::collections::HashSet;
use crate::errors::YouTubeError;
use crate::languages::is_subtitle_language_supported;
use crate::models::{License, LicenseKind, Node, TopicNode, VideoNode};
use crate::youtube::thumbnails::largest_thumbnail;
use crate::youtube::{VideoRecord, YouTubeApi};

/// Page size for `playlistItems.list`, the API maximum.
pub const MAX_RESULTS: u32 = 50;

#[derive(Debug, Clone)]
pub struct ImportOptions<'a> {
    pub subtitle_languages: &'a [&'a str],
    pub copyright_holder: &'a str,
    pub only_creative_commons: bool,
    pub default_license: LicenseKind,
    pub language: &'a str,
}

/// A video left out because it is not Creative Commons licensed.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseSkip {
    pub video_id: String,
    pub title: String,
    /// The raw `status.license` value, e.g. `youtube`.
    pub license: String,
}

/// A configured subtitle language that was not attached to a video.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedSubtitle {
    pub video_id: String,
    pub language: String,
}

/// What one playlist import did, including the policy skips it logged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// `playlistItems.list` pages fetched.
    pub pages: usize,
    /// Video nodes appended to the target topic.
    pub added: usize,
    /// Lookup results dropped because their id was already added in this run.
    pub duplicates: usize,
    /// Videos skipped under the Creative Commons only policy, in playlist order.
    pub license_skips: Vec<LicenseSkip>,
    /// One entry per video and unsupported language pair.
    pub unsupported_subtitles: Vec<UnsupportedSubtitle>,
}

impl ImportReport {
    /// Adds `other`'s counts and appends its skips.
    pub fn merge(&mut self, other: ImportReport) {
        self.pages += other.pages;
        self.added += other.added;
        self.duplicates += other.duplicates;
        self.license_skips.extend(other.license_skips);
        self.unsupported_subtitles.extend(other.unsupported_subtitles);
    }
}

/// Appends a video node to `target` for every video in `playlist_id`.
///
/// A video id appearing more than once in the playlist is added once, with
/// the data of its first occurrence. Errors from the API or from mapping a
/// single video abort the whole import.
pub async fn import_playlist<C: YouTubeApi>(
    client: &C,
    playlist_id: &str,
    target: &mut TopicNode,
    options: &ImportOptions<'_>,
) -> Result<ImportReport, YouTubeError> {
    let mut report = ImportReport::default();
    let mut videos_added: HashSet<String> = HashSet::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = client
            .list_playlist_items(playlist_id, page_token.as_deref(), MAX_RESULTS)
            .await?;
        report.pages += 1;

        let videos = if page.video_ids.is_empty() {
            Vec::new()
        } else {
            client.list_videos(&page.video_ids).await?
        };

        for video in videos {
            if videos_added.contains(&video.id) {
                report.duplicates += 1;
                continue;
            }

            if options.only_creative_commons && !video.license.is_creative_commons() {
                tracing::warn!(
                    video_id = %video.id,
                    license = %video.license,
                    "The video '{}' is not licensed as Creative Commons, it is licensed as {}",
                    video.title,
                    video.license
                );
                report.license_skips.push(LicenseSkip {
                    video_id: video.id,
                    title: video.title,
                    license: video.license.to_string(),
                });
                continue;
            }

            tracing::debug!(
                video_id = %video.id,
                published_at = video.published_at,
                audio_language = video.language.as_deref(),
                "Adding video '{}'",
                video.title
            );
            let node = build_video_node(&video, options, &mut report);
            target.add_child(Node::Video(node));
            report.added += 1;
            videos_added.insert(video.id);
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    tracing::info!(
        playlist_id,
        pages = report.pages,
        added = report.added,
        duplicates = report.duplicates,
        "Imported playlist into '{}'",
        target.title
    );

    Ok(report)
}

fn build_video_node(video: &VideoRecord, options: &ImportOptions<'_>, report: &mut ImportReport) -> VideoNode {
    let license_kind = if video.license.is_creative_commons() {
        LicenseKind::CcBy
    } else {
        options.default_license
    };

    let mut node = VideoNode::new(
        &video.id,
        video.title.clone(),
        video.description.clone(),
        options.language,
        License::new(license_kind, options.copyright_holder),
        largest_thumbnail(&video.thumbnails).map(str::to_string),
    );

    for &lang_code in options.subtitle_languages {
        if is_subtitle_language_supported(lang_code) {
            node.add_subtitle(lang_code);
        } else {
            tracing::warn!(video_id = %video.id, "Unsupported subtitle language code: {}", lang_code);
            report.unsupported_subtitles.push(UnsupportedSubtitle {
                video_id: video.id.clone(),
                language: lang_code.to_string(),
            });
        }
    }

    node
}
