use thiserror::Error;

#[derive(Error, Debug)]
pub enum NozomiError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Vibrato error: {0}")]
    Vibrato(Box<vibrato::errors::VibratoError>),

    /// The tagger could not process the input, or produced nothing for it.
    #[error("Tokenization failed for {text:?}: {reason}")]
    TokenizationFailure { text: String, reason: String },

    #[error("Invalid embedded data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("NozomiError: {0}")]
    Custom(String),
}

impl NozomiError {
    pub fn tokenization(text: &str, reason: impl Into<String>) -> Self {
        NozomiError::TokenizationFailure { text: text.to_string(), reason: reason.into() }
    }
}

impl From<std::io::Error> for NozomiError {
    fn from(error: std::io::Error) -> Self {
        NozomiError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for NozomiError {
    fn from(error: reqwest::Error) -> Self {
        NozomiError::Reqwest(Box::new(error))
    }
}

impl From<vibrato::errors::VibratoError> for NozomiError {
    fn from(error: vibrato::errors::VibratoError) -> Self {
        NozomiError::Vibrato(Box::new(error))
    }
}
