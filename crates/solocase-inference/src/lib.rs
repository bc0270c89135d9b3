//! # solocase-inference
//!
//! External inference collaborators for solocase:
//! - [`openai`]: OpenAI-compatible embedding and chat-completion backend
//! - [`ner`]: NER sidecar client for entity extraction
//! - [`mock`]: deterministic mock backend for tests (behind the `mock`
//!   feature outside of test builds)
//!
//! All backends implement the collaborator traits from `solocase-core`,
//! so the pipeline never depends on a concrete transport.

pub mod ner;
pub mod openai;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core traits
pub use solocase_core::{
    ChatRole, ChatTurn, EmbeddingBackend, GenerationBackend, NerBackend, NerEntity,
};

pub use ner::NerClient;
pub use openai::{OpenAIBackend, OpenAIConfig};
