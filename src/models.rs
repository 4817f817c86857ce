use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LicenseKind {
    #[serde(rename = "CC BY")]
    CcBy,
    #[serde(rename = "All Rights Reserved")]
    AllRightsReserved,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct License {
    pub kind: LicenseKind,
    pub copyright_holder: Option<String>,
}

impl License {
    pub fn new(kind: LicenseKind, copyright_holder: &str) -> Self {
        License {
            kind,
            copyright_holder: Some(copyright_holder.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentFile {
    YoutubeVideo {
        youtube_id: String,
    },
    YoutubeSubtitle {
        youtube_id: String,
        language: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoNode {
    pub source_id: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub license: License,
    pub thumbnail: Option<String>,
    pub files: Vec<ContentFile>,
}

impl VideoNode {
    /// Creates a video node backed by the YouTube video `youtube_id`.
    pub fn new(
        youtube_id: &str,
        title: String,
        description: String,
        language: &str,
        license: License,
        thumbnail: Option<String>,
    ) -> Self {
        VideoNode {
            source_id: youtube_id.to_string(),
            title,
            description,
            language: language.to_string(),
            license,
            thumbnail,
            files: vec![ContentFile::YoutubeVideo {
                youtube_id: youtube_id.to_string(),
            }],
        }
    }

    pub fn add_subtitle(&mut self, language: &str) {
        self.files.push(ContentFile::YoutubeSubtitle {
            youtube_id: self.source_id.clone(),
            language: language.to_string(),
        });
    }

    pub fn subtitle_languages(&self) -> impl Iterator<Item = &str> {
        self.files.iter().filter_map(|f| match f {
            ContentFile::YoutubeSubtitle { language, .. } => Some(language.as_str()),
            ContentFile::YoutubeVideo { .. } => None,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Topic(TopicNode),
    Video(VideoNode),
}

impl Node {
    pub fn source_id(&self) -> &str {
        match self {
            Node::Topic(topic) => &topic.source_id,
            Node::Video(video) => &video.source_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Node::Topic(topic) => &topic.title,
            Node::Video(video) => &video.title,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicNode {
    pub source_id: String,
    pub title: String,
    pub children: Vec<Node>,
}

impl TopicNode {
    pub fn new(title: &str, source_id: &str) -> Self {
        TopicNode {
            source_id: source_id.to_string(),
            title: title.to_string(),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn videos(&self) -> impl Iterator<Item = &VideoNode> {
        self.children.iter().filter_map(|c| match c {
            Node::Video(video) => Some(video),
            Node::Topic(_) => None,
        })
    }

    pub fn topics(&self) -> impl Iterator<Item = &TopicNode> {
        self.children.iter().filter_map(|c| match c {
            Node::Topic(topic) => Some(topic),
            Node::Video(_) => None,
        })
    }

    /// Number of video nodes anywhere below this topic.
    pub fn video_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| match c {
                Node::Video(_) => 1,
                Node::Topic(topic) => topic.video_count(),
            })
            .sum()
    }

    pub fn topic_count(&self) -> usize {
        self.topics().map(|t| 1 + t.topic_count()).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelNode {
    pub source_domain: String,
    pub source_id: String,
    pub title: String,
    pub language: String,
    pub thumbnail: Option<String>,
    pub description: String,
    pub children: Vec<TopicNode>,
}

impl ChannelNode {
    pub fn add_child(&mut self, topic: TopicNode) {
        self.children.push(topic);
    }

    pub fn video_count(&self) -> usize {
        self.children.iter().map(TopicNode::video_count).sum()
    }

    pub fn topic_count(&self) -> usize {
        self.children.iter().map(|t| 1 + t.topic_count()).sum()
    }
}
