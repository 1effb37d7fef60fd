use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Sweep grid has no configurations")]
    EmptyGrid,
    #[error("Encode error: {0}")]
    Encode(#[from] d2_encoder::EncodeError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;
