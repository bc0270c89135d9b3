//! NER sidecar client for zero-shot named entity recognition.
//!
//! The analyzer extracts party names, organizations, dates, and amounts
//! through a small sidecar service exposing `/extract` and `/health`.
//! The collaborator is optional: when no base URL is configured the
//! analyzer runs without entities.
//!
//! # Configuration
//!
//! - `SOLOCASE_NER_BASE_URL`: Base URL of the sidecar. Unset or empty
//!   disables NER.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use solocase_core::defaults::ENV_NER_BASE_URL;
use solocase_core::{Error, NerBackend, NerEntity, Result};

/// NER sidecar client.
pub struct NerClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl NerClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            model: "gliner".to_string(),
            client: reqwest::Client::new(),
            timeout_secs: 30,
        }
    }

    /// Create from environment variables.
    /// Returns None when no sidecar URL is configured.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(ENV_NER_BASE_URL).unwrap_or_default();
        if base_url.is_empty() {
            return None;
        }
        Some(Self::new(base_url))
    }
}

/// Request payload for the sidecar `/extract` endpoint.
#[derive(Serialize)]
struct ExtractRequest<'a> {
    text: &'a str,
    entity_types: &'a [&'a str],
}

/// Response payload from the sidecar `/extract` endpoint.
#[derive(Deserialize)]
struct ExtractResponse {
    entities: Vec<NerEntity>,
}

/// Health check response from the sidecar.
#[derive(Deserialize)]
struct HealthResponse {
    status: String,
    #[allow(dead_code)]
    model: String,
}

#[async_trait]
impl NerBackend for NerClient {
    async fn extract_entities(&self, text: &str, entity_types: &[&str]) -> Result<Vec<NerEntity>> {
        let url = format!("{}/extract", self.base_url.trim_end_matches('/'));

        let request = ExtractRequest { text, entity_types };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(std::time::Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| Error::Request(format!("NER request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Request(format!(
                "NER sidecar returned {}: {}",
                status, body
            )));
        }

        let result: ExtractResponse = response
            .json()
            .await
            .map_err(|e| Error::Request(format!("Failed to parse NER response: {}", e)))?;

        debug!(count = result.entities.len(), "entities extracted");
        Ok(result.entities)
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));
        match self
            .client
            .get(&url)
            .timeout(std::time::Duration::from_secs(5))
            .send()
            .await
        {
            Ok(resp) => {
                if resp.status().is_success() {
                    if let Ok(health) = resp.json::<HealthResponse>().await {
                        return Ok(health.status == "healthy");
                    }
                    Ok(false)
                } else {
                    warn!(status = %resp.status(), "NER health check failed");
                    Ok(false)
                }
            }
            Err(e) => {
                warn!(error = %e, "NER health check error");
                Ok(false)
            }
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
