//! Mock inference backend for deterministic testing.
//!
//! Implements the embedding, generation, and NER collaborator traits
//! with deterministic outputs: embeddings are seeded from a hash of the
//! input text, so identical text always yields identical vectors.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use solocase_core::{
    ChatTurn, EmbeddingBackend, Error, GenerationBackend, NerBackend, NerEntity, Result,
};

/// Mock inference backend for testing.
#[derive(Clone)]
pub struct MockInferenceBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    dimension: usize,
    fixed_responses: HashMap<String, String>,
    default_response: String,
    entities: Vec<NerEntity>,
    fail_all: bool,
}

/// One recorded call against the mock, for assertions.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub operation: String,
    pub input: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            dimension: 1536,
            fixed_responses: HashMap::new(),
            default_response: "Mock response".to_string(),
            entities: Vec::new(),
            fail_all: false,
        }
    }
}

impl Default for MockInferenceBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockInferenceBackend {
    /// Create a new mock backend with default configuration.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the embedding dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        Arc::make_mut(&mut self.config).dimension = dimension;
        self
    }

    /// Set the default response for generation requests.
    pub fn with_fixed_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).default_response = response.into();
        self
    }

    /// Add a response mapping for a specific user message.
    pub fn with_response_mapping(
        mut self,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Arc::make_mut(&mut self.config)
            .fixed_responses
            .insert(input.into(), output.into());
        self
    }

    /// Set the entities returned by every extraction call.
    pub fn with_entities(mut self, entities: Vec<NerEntity>) -> Self {
        Arc::make_mut(&mut self.config).entities = entities;
        self
    }

    /// Make every operation fail, for error-path testing.
    pub fn with_failures(mut self) -> Self {
        Arc::make_mut(&mut self.config).fail_all = true;
        self
    }

    /// Get all logged calls for assertion.
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of calls recorded for one operation.
    pub fn call_count(&self, operation: &str) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    fn record(&self, operation: &str, input: &str) {
        self.call_log.lock().unwrap().push(MockCall {
            operation: operation.to_string(),
            input: input.to_string(),
        });
    }

    /// Deterministic unit-length embedding seeded from the text hash.
    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut rng = StdRng::seed_from_u64(hasher.finish());

        let mut vector: Vec<f32> = (0..self.config.dimension)
            .map(|_| rng.gen_range(-1.0..1.0))
            .collect();
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }
}

#[async_trait]
impl EmbeddingBackend for MockInferenceBackend {
    async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if self.config.fail_all {
            return Err(Error::Embedding("mock embedding failure".to_string()));
        }
        for text in texts {
            self.record("embed", text);
        }
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn model_name(&self) -> &str {
        "mock-embed"
    }
}

#[async_trait]
impl GenerationBackend for MockInferenceBackend {
    async fn complete(
        &self,
        _system: &str,
        _history: &[ChatTurn],
        user_message: &str,
    ) -> Result<String> {
        if self.config.fail_all {
            return Err(Error::Inference("mock generation failure".to_string()));
        }
        self.record("complete", user_message);
        Ok(self
            .config
            .fixed_responses
            .get(user_message)
            .cloned()
            .unwrap_or_else(|| self.config.default_response.clone()))
    }

    fn model_name(&self) -> &str {
        "mock-gen"
    }
}

#[async_trait]
impl NerBackend for MockInferenceBackend {
    async fn extract_entities(&self, text: &str, _entity_types: &[&str]) -> Result<Vec<NerEntity>> {
        if self.config.fail_all {
            return Err(Error::Request("mock ner failure".to_string()));
        }
        self.record("extract", text);
        Ok(self.config.entities.clone())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(!self.config.fail_all)
    }

    fn model_name(&self) -> &str {
        "mock-ner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_embeddings_are_deterministic() {
        let backend = MockInferenceBackend::new().with_dimension(64);
        let a = backend
            .embed_texts(&["breach of contract".to_string()])
            .await
            .unwrap();
        let b = backend
            .embed_texts(&["breach of contract".to_string()])
            .await
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].len(), 64);
    }

    #[tokio::test]
    async fn test_different_texts_differ() {
        let backend = MockInferenceBackend::new().with_dimension(64);
        let vectors = backend
            .embed_texts(&["alpha".to_string(), "beta".to_string()])
            .await
            .unwrap();
        assert_ne!(vectors[0], vectors[1]);
    }

    #[tokio::test]
    async fn test_embeddings_are_unit_length() {
        let backend = MockInferenceBackend::new().with_dimension(32);
        let vectors = backend.embed_texts(&["text".to_string()]).await.unwrap();
        let norm: f32 = vectors[0].iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_response_mapping() {
        let backend = MockInferenceBackend::new()
            .with_fixed_response("default")
            .with_response_mapping("specific question", "specific answer");

        let answer = backend.complete("", &[], "specific question").await.unwrap();
        assert_eq!(answer, "specific answer");

        let answer = backend.complete("", &[], "anything else").await.unwrap();
        assert_eq!(answer, "default");
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let backend = MockInferenceBackend::new().with_failures();
        assert!(backend.embed_texts(&["x".to_string()]).await.is_err());
        assert!(backend.complete("", &[], "x").await.is_err());
        assert!(backend.extract_entities("x", &[]).await.is_err());
        assert!(!backend.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_call_log() {
        let backend = MockInferenceBackend::new();
        backend.embed_texts(&["a".to_string()]).await.unwrap();
        backend.complete("", &[], "b").await.unwrap();

        assert_eq!(backend.call_count("embed"), 1);
        assert_eq!(backend.call_count("complete"), 1);
        assert_eq!(backend.calls().len(), 2);
    }
}
