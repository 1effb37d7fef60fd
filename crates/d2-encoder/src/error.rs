use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("value tree nesting exceeds depth limit {limit}")]
    TooDeep { limit: usize },
}

pub type Result<T> = std::result::Result<T, EncodeError>;
