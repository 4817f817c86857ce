use thiserror::Error;
use reqwest::StatusCode;
use std::error::Error;

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("Not found")]
    NotFound,
    #[error("Ratelimited")]
    Ratelimited,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Internal server error")]
    InternalServerError,
    #[error("Unknown status code {0}")]
    UnknownStatusCode(StatusCode),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("{record} is missing field `{field}`")]
    MissingField {
        record: String,
        field: &'static str,
    },
    #[error("Other error: {0}")]
    Other(Box<dyn Error + Send + Sync>),
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Channel has no topics")]
    EmptyChannel,
    #[error("Node under {parent} has an empty source id")]
    EmptySourceId { parent: String },
    #[error("Node {source_id} has an empty title")]
    EmptyTitle { source_id: String },
    #[error("Duplicate source id {source_id} under {parent}")]
    DuplicateSourceId { parent: String, source_id: String },
    #[error("Video {source_id} has more than one subtitle for {language}")]
    DuplicateSubtitle { source_id: String, language: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum ChefError {
    #[error("YouTube error: {0}")]
    YouTube(#[from] YouTubeError),
    #[error("Invalid channel: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
