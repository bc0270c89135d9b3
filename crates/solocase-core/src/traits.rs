//! Collaborator traits for solocase abstractions.
//!
//! These traits define the seams to external collaborators — embedding,
//! text generation, lexical NER, and the record stores — enabling
//! pluggable backends and testability. The core never assumes a concrete
//! transport or persistence mechanism behind them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::candidates::ReferralCandidate;
use crate::error::Result;
use crate::profile::{Category, Track};
use crate::records::{CaseRecord, KnowledgeEntry, KnowledgeKind};

// =============================================================================
// INFERENCE TRAITS
// =============================================================================

/// Backend for generating text embeddings.
#[async_trait]
pub trait EmbeddingBackend: Send + Sync {
    /// Generate embeddings for the given texts.
    ///
    /// Returns a vector of embedding vectors, one per input text. Failures
    /// surface as [`crate::Error::Embedding`]; there is no degraded mode.
    async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Get the expected dimension of embedding vectors.
    fn dimension(&self) -> usize;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}

/// Role of a turn in a generation conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One prior conversation turn passed to the generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Backend for text generation (LLM).
///
/// Errors distinguish quota/billing ([`crate::Error::Quota`]) from
/// transient ([`crate::Error::Inference`]) from fatal configuration
/// failures, so the orchestrator can select the right fallback.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate a completion given a system prompt, prior turns, and the
    /// current user message.
    async fn complete(
        &self,
        system: &str,
        history: &[ChatTurn],
        user_message: &str,
    ) -> Result<String>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}

/// A named entity extracted by the NER collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NerEntity {
    /// The entity text as it appears in the source.
    pub text: String,
    /// The entity type label (e.g., "organization", "person", "money").
    pub label: String,
    /// Confidence score from the NER model (0.0-1.0).
    pub score: f32,
    /// Character start offset in the source text.
    pub start: usize,
    /// Character end offset in the source text.
    pub end: usize,
}

/// Backend trait for named entity recognition.
///
/// Optional collaborator: the analyzer degrades to an empty entity set
/// when no backend is configured or a call fails.
#[async_trait]
pub trait NerBackend: Send + Sync {
    /// Extract named entities from text.
    async fn extract_entities(&self, text: &str, entity_types: &[&str]) -> Result<Vec<NerEntity>>;

    /// Check if the NER backend is available.
    async fn health_check(&self) -> Result<bool>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}

// =============================================================================
// RECORD STORE TRAITS
// =============================================================================

/// Filter for case-law searches.
///
/// `category`/`track` are conjunctive; `keywords` form one disjunctive
/// substring filter over summary and principles. An empty keyword list
/// leaves the disjunction vacuously true.
#[derive(Debug, Clone, Default)]
pub struct CaseFilter {
    pub category: Option<Category>,
    pub track: Option<Track>,
    pub keywords: Vec<String>,
    pub limit: usize,
}

/// Filter for procedure/statute searches. Same conjunctive/disjunctive
/// semantics as [`CaseFilter`], with the disjunction checked against
/// content and keywords.
#[derive(Debug, Clone)]
pub struct KnowledgeFilter {
    pub kind: KnowledgeKind,
    pub category: Option<Category>,
    pub track: Option<Track>,
    pub keywords: Vec<String>,
    pub limit: usize,
}

/// Store of case-law records.
///
/// Implementations must expose query failures as errors rather than empty
/// result sets; the retriever decides how to degrade.
#[async_trait]
pub trait CaseStore: Send + Sync {
    async fn search_cases(&self, filter: &CaseFilter) -> Result<Vec<CaseRecord>>;
}

/// Store of procedural and statutory knowledge entries.
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    async fn search_entries(&self, filter: &KnowledgeFilter) -> Result<Vec<KnowledgeEntry>>;
}

/// Store of referral candidates.
#[async_trait]
pub trait ReferralStore: Send + Sync {
    /// Active candidates whose value range contains `claim_value_pence`,
    /// or all active candidates when no value is given.
    async fn active_candidates(
        &self,
        claim_value_pence: Option<i64>,
    ) -> Result<Vec<ReferralCandidate>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_turn_constructors() {
        let turn = ChatTurn::user("what is the small claims limit?");
        assert_eq!(turn.role, ChatRole::User);

        let turn = ChatTurn::assistant("the limit is £10,000");
        assert_eq!(turn.role, ChatRole::Assistant);
    }

    #[test]
    fn test_chat_role_serde() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&ChatRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_ner_entity_serialization() {
        let entity = NerEntity {
            text: "Acme Ltd".to_string(),
            label: "organization".to_string(),
            score: 0.92,
            start: 0,
            end: 8,
        };

        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["text"], "Acme Ltd");
        assert_eq!(json["label"], "organization");

        let back: NerEntity = serde_json::from_value(json).unwrap();
        assert_eq!(back, entity);
    }

    #[test]
    fn test_case_filter_default_is_unconstrained() {
        let filter = CaseFilter::default();
        assert!(filter.category.is_none());
        assert!(filter.track.is_none());
        assert!(filter.keywords.is_empty());
    }
}
