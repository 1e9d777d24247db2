use thiserror::Error;

pub type HelpbotResult<T> = Result<T, HelpbotError>;

#[derive(Debug, Error)]
pub enum HelpbotError {
    #[error("API error: {0}")]
    Api(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("session error: {0}")]
    Session(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HelpbotError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        HelpbotError::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        HelpbotError::Config(msg.into())
    }

    pub fn decode_error(msg: impl Into<String>) -> Self {
        HelpbotError::Decode(msg.into())
    }

    pub fn session_error(msg: impl Into<String>) -> Self {
        HelpbotError::Session(msg.into())
    }
}
