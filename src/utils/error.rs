use thiserror::Error;

#[derive(Error, Debug)]
pub enum LiturgiaError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with HTTP {status}")]
    HttpStatusError { status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Invalid calendar date '{value}', expected YYYY-MM-DD")]
    InvalidDateError { value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Date {value} is outside the selectable range {min} .. {max}")]
    DateOutOfRangeError {
        value: String,
        min: String,
        max: String,
    },
}

impl LiturgiaError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LiturgiaError::ApiError(_) | LiturgiaError::HttpStatusError { .. } => {
                "Could not reach the liturgy service".to_string()
            }
            LiturgiaError::SerializationError(_) => {
                "The liturgy service returned an unreadable response".to_string()
            }
            LiturgiaError::IoError(e) => format!("File operation failed: {}", e),
            LiturgiaError::InvalidDateError { value } => {
                format!("'{}' is not a valid date", value)
            }
            LiturgiaError::DateOutOfRangeError { value, min, max } => {
                format!("{} is outside {} .. {}", value, min, max)
            }
            LiturgiaError::UrlError(_)
            | LiturgiaError::ConfigError { .. }
            | LiturgiaError::ConfigValidationError { .. }
            | LiturgiaError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LiturgiaError::ApiError(_) | LiturgiaError::HttpStatusError { .. } => {
                "Check that the server is running and --base-url points at it"
            }
            LiturgiaError::SerializationError(_) => {
                "Make sure --base-url points at a liturgy API and not some other service"
            }
            LiturgiaError::IoError(_) => "Check the output directory exists and is writable",
            LiturgiaError::InvalidDateError { .. } => "Use the YYYY-MM-DD format, e.g. 2026-01-06",
            LiturgiaError::DateOutOfRangeError { .. } => {
                "Pick a date within one year of today (see `liturgia range`)"
            }
            _ => "Review the configuration file and command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, LiturgiaError>;
