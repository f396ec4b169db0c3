use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification used by callers that only care about the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    BadStatus,
    Parse,
    Other,
}

impl PortfolioError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PortfolioError::Transport(_) => ErrorKind::Transport,
            PortfolioError::BadStatus { .. } => ErrorKind::BadStatus,
            PortfolioError::Parse(_) => ErrorKind::Parse,
            PortfolioError::InvalidUrl(_) | PortfolioError::Config(_) => ErrorKind::Other,
        }
    }

    /// HTTP status carried by a `BadStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            PortfolioError::BadStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for PortfolioError {
    fn from(err: url::ParseError) -> Self {
        PortfolioError::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
