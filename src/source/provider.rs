use std::fmt;

use async_trait::async_trait;

use crate::core::questions::QuestionSet;

/// Errors that can occur while loading the question resource.
/// None of them are retried: a failed load leaves the view loading.
#[derive(Debug)]
pub enum LoadError {
    /// Reading a local file failed.
    Io(std::io::Error),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not a JSON object of string arrays.
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "I/O error: {e}"),
            LoadError::Network(msg) => write!(f, "network error: {msg}"),
            LoadError::Api { status, message } => {
                write!(f, "HTTP {status}: {message}")
            }
            LoadError::Parse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Returns the name of the source kind.
    fn name(&self) -> &str;

    /// Fetch and parse the full question set.
    async fn fetch(&self) -> Result<QuestionSet, LoadError>;
}
