use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("model API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("model request timed out after {0}s")]
    Timeout(u64),

    #[error("invalid model response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
