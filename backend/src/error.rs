//! Error types for the dataset and translation stages.

use common::search_error::SearchError;


/// Failure while querying the schemes dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// Client could not be built from its configuration
    Config(String),
    /// Connection, timeout or transport failure
    Network(String),
    /// Non-success HTTP status; `message` is the service's own error text when it sent one
    Http { status: u16, message: String },
    /// Response body was not a list of scheme rows
    Decode(String),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Config(msg) => write!(f, "Dataset configuration error: {}", msg),
            DatasetError::Network(msg) => write!(f, "Dataset network error: {}", msg),
            DatasetError::Http { status, message } => write!(f, "Dataset query failed ({}): {}", status, message),
            DatasetError::Decode(msg) => write!(f, "Dataset response could not be read: {}", msg),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<reqwest::Error> for DatasetError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DatasetError::Decode(e.to_string())
        } else {
            DatasetError::Network(e.to_string())
        }
    }
}

/// Failure of a single translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// Missing key, bad engine name, client build failure
    Config(String),
    /// Target language code is empty or malformed
    InvalidLanguage(String),
    Network(String),
    /// Translation API answered with an error status
    Api { status: u16, message: String },
    /// Translation API answered, but not with a translation
    InvalidResponse(String),
    /// Text rejected before sending
    TextTooLong { len: usize, max: usize },
    Other(String),
}

impl std::fmt::Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationError::Config(msg) => write!(f, "Translation configuration error: {}", msg),
            TranslationError::InvalidLanguage(msg) => write!(f, "Invalid target language: {}", msg),
            TranslationError::Network(msg) => write!(f, "Translation network error: {}", msg),
            TranslationError::Api { status, message } => write!(f, "Translation API error ({}): {}", status, message),
            TranslationError::InvalidResponse(msg) => write!(f, "Invalid translation response: {}", msg),
            TranslationError::TextTooLong { len, max } => {
                write!(f, "Text of {} characters exceeds maximum length of {} characters", len, max)
            }
            TranslationError::Other(msg) => write!(f, "Translation failed: {}", msg),
        }
    }
}

impl std::error::Error for TranslationError {}

impl From<reqwest::Error> for TranslationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TranslationError::InvalidResponse(e.to_string())
        } else {
            TranslationError::Network(e.to_string())
        }
    }
}

pub type TranslationResult<T> = Result<T, TranslationError>;

impl From<DatasetError> for SearchError {
    fn from(e: DatasetError) -> Self {
        SearchError::Dataset(e.to_string())
    }
}

impl From<TranslationError> for SearchError {
    fn from(e: TranslationError) -> Self {
        SearchError::Translation(e.to_string())
    }
}
