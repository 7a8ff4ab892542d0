use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content query failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Failed to decode content record: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Unexpected query response: {message}")]
    ResponseError { message: String },

    #[error("Invalid image reference: {reference}")]
    ImageRefError { reference: String },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ContentError>;
