use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("Word is too long: {len} characters (limit is {max})")]
    WordTooLong { len: usize, max: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for TrieError {
    fn from(e: serde_json::Error) -> Self {
        TrieError::InvalidConfig(e.to_string())
    }
}

pub type TrieResult<T> = Result<T, TrieError>;
