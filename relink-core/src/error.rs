use thiserror::Error;

use crate::link::LinkError;

#[derive(Error, Debug)]
pub enum RelinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Link(#[from] LinkError),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, RelinkError>;
