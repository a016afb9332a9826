use thiserror::Error;

/// Errors raised while talking to the catalog or preparing the service
#[derive(Error, Debug)]
pub enum MovieMoodError {
    /// Connection failure, timeout or body read failure. The request URL is
    /// stripped since it carries the API key.
    #[error("catalog request failed: {0}")]
    Transport(reqwest::Error),

    #[error("catalog responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode catalog payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A field the payload must carry was absent or null
    #[error("catalog payload is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for MovieMoodError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.without_url())
    }
}

pub type Result<T> = std::result::Result<T, MovieMoodError>;
