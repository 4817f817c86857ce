use crate::config::{ChannelConfig, Grade, GradeSource};
use crate::errors::ChefError;
use crate::importer::{import_playlist, ImportOptions, ImportReport};
use crate::models::{ChannelNode, Node, TopicNode};
use crate::validate::validate_channel;
use crate::youtube::thumbnails::largest_thumbnail;
use crate::youtube::YouTubeApi;

/// Builds and validates the full channel tree described by `config`.
///
/// Playlists are imported one at a time, in table order.
pub async fn build_channel<C: YouTubeApi>(client: &C, config: &ChannelConfig) -> Result<ChannelNode, ChefError> {
    let youtube_channel = client.get_channel(config.youtube_channel_id).await?;
    tracing::info!(
        channel_id = %youtube_channel.id,
        title = youtube_channel.title.as_deref(),
        "Fetched YouTube channel"
    );

    let mut channel = ChannelNode {
        source_domain: config.source_domain.to_string(),
        source_id: config.source_id.to_string(),
        title: config.name.to_string(),
        language: config.language.to_string(),
        thumbnail: largest_thumbnail(&youtube_channel.thumbnails).map(str::to_string),
        description: config.description.to_string(),
        children: Vec::new(),
    };

    let options = ImportOptions {
        subtitle_languages: &config.subtitle_languages,
        copyright_holder: config.copyright_holder,
        only_creative_commons: config.only_creative_commons,
        default_license: config.default_license,
        language: config.language,
    };

    let mut totals = ImportReport::default();
    for grade in &config.grades {
        let topic = build_grade(client, grade, &options, &mut totals).await?;
        channel.add_child(topic);
    }

    validate_channel(&channel)?;

    tracing::info!(
        topics = channel.topic_count(),
        videos = channel.video_count(),
        pages = totals.pages,
        duplicates = totals.duplicates,
        license_skips = totals.license_skips.len(),
        unsupported_subtitles = totals.unsupported_subtitles.len(),
        "Built channel '{}'",
        channel.title
    );

    Ok(channel)
}

async fn build_grade<C: YouTubeApi>(
    client: &C,
    grade: &Grade,
    options: &ImportOptions<'_>,
    totals: &mut ImportReport,
) -> Result<TopicNode, ChefError> {
    match &grade.source {
        GradeSource::Playlist(playlist_id) => playlist_topic(client, grade.title, playlist_id, options, totals).await,
        GradeSource::Subtopics { source_id, subtopics } => {
            let mut topic = TopicNode::new(grade.title, source_id);
            for (title, playlist_id) in subtopics {
                let subtopic = playlist_topic(client, title, playlist_id, options, totals).await?;
                topic.add_child(Node::Topic(subtopic));
            }
            Ok(topic)
        }
    }
}

async fn playlist_topic<C: YouTubeApi>(
    client: &C,
    title: &str,
    playlist_id: &str,
    options: &ImportOptions<'_>,
    totals: &mut ImportReport,
) -> Result<TopicNode, ChefError> {
    let mut topic = TopicNode::new(title, playlist_id);
    let report = import_playlist(client, playlist_id, &mut topic, options).await?;
    totals.merge(report);
    Ok(topic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ValidationError, YouTubeError};
    use crate::testing::FakeYouTube;
    use crate::youtube::thumbnails::{Thumbnail, Thumbnails};
    use crate::youtube::ChannelRecord;

    const PLAYLISTS: [&str; 7] = [
        "PL7PgvYjSilJD6uFfdqbQBUAZzbE48c8ns",
        "PL7PgvYjSilJAx5ib4t4z9X1j7foWrPp6j",
        "PL7PgvYjSilJCCvAhZkHocn0XixWQzhcMJ",
        "PL7PgvYjSilJAsUyCzGdDFw5X5q9CiUQCN",
        "PL7PgvYjSilJCRcrTWwyARbyZ8zwN6v8PD",
        "PL7PgvYjSilJD-2MhwtwAMkdF7LhInCk5p",
        "PL7PgvYjSilJBMIX26GJ31YVOt8LEE_vC_",
    ];

    fn youtube_channel() -> ChannelRecord {
        let mut thumbnails = Thumbnails::new();
        thumbnails.insert("default".to_string(), Thumbnail { url: Some("https://yt3.ggpht.com/a=s88".to_string()) });
        thumbnails.insert("high".to_string(), Thumbnail { url: Some("https://yt3.ggpht.com/a=s800".to_string()) });

        ChannelRecord {
            id: "UCmB6aFgIMD2x7F1MJSjPHvQ".to_string(),
            title: Some("Basil Al-Zubaidi".to_string()),
            thumbnails,
        }
    }

    /// One video per playlist, ids `v0`..`v6`.
    fn fixture() -> FakeYouTube {
        let mut fake = FakeYouTube::new().with_channel(youtube_channel());
        for (i, playlist_id) in PLAYLISTS.iter().enumerate() {
            let id = format!("v{}", i);
            fake = fake
                .with_playlist(playlist_id, vec![vec![id.as_str()]])
                .with_videos(&[id.as_str()]);
        }
        fake
    }

    #[tokio::test]
    async fn test_builds_full_tree() {
        let fake = fixture();
        let config = ChannelConfig::al_riyadiyat();

        let channel = build_channel(&fake, &config).await.unwrap();

        assert_eq!(channel.source_id, "al-riyadiyat_basil_al-zubaidi");
        assert_eq!(channel.thumbnail.as_deref(), Some("https://yt3.ggpht.com/a=s800"));
        assert_eq!(channel.children.len(), 3);

        let titles: Vec<_> = channel.children.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["الرابع العلمي", "السادس الأدبي", "السادس الإحيائي والتطبيقي"]);
        assert_eq!(channel.children[0].source_id, PLAYLISTS[0]);
        assert_eq!(channel.children[1].source_id, PLAYLISTS[1]);

        let grade3 = &channel.children[2];
        assert_eq!(grade3.source_id, "al-riyadiyat-grade-3-playlists");
        let subtopics: Vec<_> = grade3.topics().collect();
        assert_eq!(subtopics.len(), 5);
        let subtopic_ids: Vec<_> = subtopics.iter().map(|t| t.source_id.as_str()).collect();
        assert_eq!(subtopic_ids, PLAYLISTS[2..].to_vec());
        for subtopic in &subtopics {
            assert_eq!(subtopic.video_count(), 1);
        }

        assert_eq!(channel.topic_count(), 8);
        assert_eq!(channel.video_count(), 7);
        assert_eq!(fake.page_requests(), 7);
        assert_eq!(fake.video_lookups(), 7);
    }

    #[tokio::test]
    async fn test_every_video_has_title_and_license() {
        let channel = build_channel(&fixture(), &ChannelConfig::al_riyadiyat()).await.unwrap();

        fn check(topic: &TopicNode, seen: &mut usize) {
            for video in topic.videos() {
                assert!(!video.title.is_empty());
                assert_eq!(video.license.copyright_holder.as_deref(), Some("Basil Al-Zubaidi"));
                assert_eq!(video.subtitle_languages().collect::<Vec<_>>(), vec!["ar"]);
                *seen += 1;
            }
            for subtopic in topic.topics() {
                check(subtopic, seen);
            }
        }

        let mut seen = 0;
        for grade in &channel.children {
            check(grade, &mut seen);
        }
        assert_eq!(seen, 7);
    }

    #[tokio::test]
    async fn test_missing_channel_aborts() {
        let fake = FakeYouTube::new();
        let result = build_channel(&fake, &ChannelConfig::al_riyadiyat()).await;

        assert!(matches!(result, Err(ChefError::YouTube(YouTubeError::NotFound))));
        assert_eq!(fake.page_requests(), 0);
    }

    #[tokio::test]
    async fn test_import_error_aborts() {
        let fake = fixture().failing_page(3);
        let result = build_channel(&fake, &ChannelConfig::al_riyadiyat()).await;

        assert!(matches!(result, Err(ChefError::YouTube(YouTubeError::InternalServerError))));
        assert_eq!(fake.page_requests(), 4);
    }

    #[tokio::test]
    async fn test_invalid_tree_aborts() {
        let mut config = ChannelConfig::al_riyadiyat();
        config.grades[1].source = GradeSource::Playlist(PLAYLISTS[0]);

        let result = build_channel(&fixture(), &config).await;

        assert!(matches!(
            result,
            Err(ChefError::Validation(ValidationError::DuplicateSourceId { .. }))
        ));
    }
}
