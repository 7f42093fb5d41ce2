use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),

    #[error("Character pool is empty. Enable at least one character type or provide a charset.")]
    EmptyPool,
}

impl CodeError {
    pub fn invalid_length() -> Self {
        Self::InvalidArgument("length must be a positive integer".into())
    }
}

impl From<serde_json::Error> for CodeError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CodeError>;
