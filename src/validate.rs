use std::collections::HashSet;
use crate::errors::ValidationError;
use crate::models::{ChannelNode, Node, TopicNode, VideoNode};

/// Checks the structure of a finished channel before it is written out.
pub fn validate_channel(channel: &ChannelNode) -> Result<(), ValidationError> {
    check_ids(&channel.source_id, &channel.title, "<root>")?;

    if channel.children.is_empty() {
        return Err(ValidationError::EmptyChannel);
    }

    check_siblings(&channel.source_id, channel.children.iter().map(|t| t.source_id.as_str()))?;

    for topic in &channel.children {
        validate_topic(topic, &channel.source_id)?;
    }

    Ok(())
}

fn validate_topic(topic: &TopicNode, parent: &str) -> Result<(), ValidationError> {
    check_ids(&topic.source_id, &topic.title, parent)?;

    if topic.children.is_empty() {
        tracing::warn!(source_id = %topic.source_id, "Topic '{}' has no content", topic.title);
    }

    check_siblings(&topic.source_id, topic.children.iter().map(Node::source_id))?;

    for child in &topic.children {
        check_ids(child.source_id(), child.title(), &topic.source_id)?;
    }

    for video in topic.videos() {
        validate_video(video)?;
    }

    for subtopic in topic.topics() {
        validate_topic(subtopic, &topic.source_id)?;
    }

    Ok(())
}

fn validate_video(video: &VideoNode) -> Result<(), ValidationError> {
    let mut languages = HashSet::new();
    for language in video.subtitle_languages() {
        if !languages.insert(language) {
            return Err(ValidationError::DuplicateSubtitle {
                source_id: video.source_id.clone(),
                language: language.to_string(),
            });
        }
    }
    Ok(())
}

fn check_ids(source_id: &str, title: &str, parent: &str) -> Result<(), ValidationError> {
    if source_id.trim().is_empty() {
        return Err(ValidationError::EmptySourceId { parent: parent.to_string() });
    }
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle { source_id: source_id.to_string() });
    }
    Ok(())
}

fn check_siblings<'a>(parent: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateSourceId {
                parent: parent.to_string(),
                source_id: id.to_string(),
            });
        }
    }
    Ok(())
}
