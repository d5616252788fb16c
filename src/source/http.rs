//! Question set fetched with a single HTTP GET.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::questions::QuestionSet;
use crate::source::{LoadError, QuestionSource};

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self) -> Result<QuestionSet, LoadError> {
        info!("Fetching questions from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        debug!("Question source response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Question source error: {} - {}", status, err_body);
            return Err(LoadError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        QuestionSet::from_json(&body).map_err(LoadError::Parse)
    }
}
