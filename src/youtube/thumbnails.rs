use serde::Deserialize;
use std::collections::HashMap;

/// Size keys tried by [`largest_thumbnail`], largest first.
pub const THUMBNAIL_SIZES: [&str; 3] = ["high", "medium", "default"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Thumbnail {
    pub url: Option<String>,
}

/// Thumbnails keyed by size (`default`, `medium`, `high`, `standard`, `maxres`).
pub type Thumbnails = HashMap<String, Thumbnail>;

/// Returns the URL of the first size in [`THUMBNAIL_SIZES`] present in `thumbnails`.
///
/// Only the first present entry is consulted: if it carries no URL the
/// result is `None` even when a smaller size has one.
pub fn largest_thumbnail(thumbnails: &Thumbnails) -> Option<&str> {
    THUMBNAIL_SIZES
        .iter()
        .find_map(|size| thumbnails.get(*size))
        .and_then(|t| t.url.as_deref())
}
