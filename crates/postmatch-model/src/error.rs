use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostmatchError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid match policy: {0}")]
    InvalidPolicy(String),
    #[error("invalid extraction pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("roster is missing required column `{0}`")]
    MissingColumn(&'static str),
}

pub type Result<T> = std::result::Result<T, PostmatchError>;
