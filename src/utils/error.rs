use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned an error: {message}")]
    ApiRejectionError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Content is not SVG: {reason}")]
    MalformedInputError { reason: String },

    #[error("SVG failed the well-formedness check: {message}")]
    ParseValidationError { message: String },

    #[error("SVG decode failed: {message}")]
    ImageDecodeError { message: String },

    #[error("PNG encoding failed: {message}")]
    EncodeError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GalleryError>;
