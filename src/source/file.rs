//! Question set read from a local JSON file.

use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, info};

use crate::core::questions::QuestionSet;
use crate::source::{LoadError, QuestionSource};

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<QuestionSet, LoadError> {
        info!("Reading questions from {}", self.path.display());
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(LoadError::Io)?;
        debug!("Read {} bytes", contents.len());
        QuestionSet::from_json(&contents).map_err(LoadError::Parse)
    }
}
