//! Channel definition and runtime settings.
//!
//! [`ChannelConfig`] is the fixed description of the channel being built:
//! metadata, licensing policy and the grade/playlist table. [`Settings`]
//! holds what varies per run and is read from the environment (a `.env`
//! file is loaded first when present).

use std::env;
use std::path::PathBuf;
use crate::errors::ConfigError;
use crate::models::LicenseKind;

/// Where a grade's videos come from.
#[derive(Debug, Clone)]
pub enum GradeSource {
    /// Videos imported straight from one playlist.
    Playlist(&'static str),
    /// A topic holding one subtopic per `(title, playlist id)`, in order.
    Subtopics {
        source_id: &'static str,
        subtopics: Vec<(&'static str, &'static str)>,
    },
}

#[derive(Debug, Clone)]
pub struct Grade {
    pub title: &'static str,
    pub source: GradeSource,
}

#[derive(Debug, Clone)]
pub struct ChannelConfig {
    pub name: &'static str,
    pub source_id: &'static str,
    pub source_domain: &'static str,
    pub language: &'static str,
    pub description: &'static str,
    pub youtube_channel_id: &'static str,
    pub copyright_holder: &'static str,
    pub only_creative_commons: bool,
    /// License given to videos YouTube does not report as Creative Commons.
    pub default_license: LicenseKind,
    pub subtitle_languages: Vec<&'static str>,
    pub grades: Vec<Grade>,
}

impl ChannelConfig {
    pub fn al_riyadiyat() -> Self {
        ChannelConfig {
            name: "Al-Riyadiyat with Basil Al-Zubaidi العربيّة [source-channel]",
            source_id: "al-riyadiyat_basil_al-zubaidi",
            source_domain: "learningequality.org",
            language: "ar",
            description: "Basil Al-Zubaidi is a secondary math teacher in Iraq. He owns this YouTube channel through which he provides recordings of his live math classes for different levels for secondary education learners in Iraq.",
            youtube_channel_id: "UCmB6aFgIMD2x7F1MJSjPHvQ",
            copyright_holder: "Basil Al-Zubaidi",
            only_creative_commons: false,
            default_license: LicenseKind::AllRightsReserved,
            // Auto-generated and auto-translated tracks are only available to the channel owner.
            subtitle_languages: vec!["ar"],
            grades: vec![
                Grade {
                    title: "الرابع العلمي",
                    source: GradeSource::Playlist("PL7PgvYjSilJD6uFfdqbQBUAZzbE48c8ns"),
                },
                Grade {
                    title: "السادس الأدبي",
                    source: GradeSource::Playlist("PL7PgvYjSilJAx5ib4t4z9X1j7foWrPp6j"),
                },
                Grade {
                    title: "السادس الإحيائي والتطبيقي",
                    source: GradeSource::Subtopics {
                        source_id: "al-riyadiyat-grade-3-playlists",
                        subtopics: vec![
                            ("المعادلات التفاضلية", "PL7PgvYjSilJCCvAhZkHocn0XixWQzhcMJ"),
                            ("المجاميع العليا والسفلى والتكامل", "PL7PgvYjSilJAsUyCzGdDFw5X5q9CiUQCN"),
                            ("التفاضل", "PL7PgvYjSilJCRcrTWwyARbyZ8zwN6v8PD"),
                            ("القطوع المكافئة", "PL7PgvYjSilJD-2MhwtwAMkdF7LhInCk5p"),
                            ("الأعداد المركبة", "PL7PgvYjSilJBMIX26GJ31YVOt8LEE_vC_"),
                        ],
                    },
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    /// Tree output file; stdout when unset.
    pub output_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = var("API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingVar("API_KEY"))?;

        let output_path = var("OUTPUT_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let log_format = match var("LOG_FORMAT").as_deref() {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Settings {
            api_key,
            output_path,
            log_format,
        })
    }
}
