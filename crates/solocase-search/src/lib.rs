//! # solocase-search
//!
//! Semantic matcher for solocase: nearest-neighbor retrieval over the two
//! fixed knowledge corpora (procedural rules and case law).
//!
//! This crate provides:
//! - A flat cosine-similarity vector index with a lock-step excerpt table,
//!   integrity-checked at load time
//! - A [`SemanticMatcher`] that embeds queries via the embedding
//!   collaborator and maps neighbors back to excerpts
//!
//! Embedding failures propagate to the caller; this layer has no
//! meaningful degraded mode.

pub mod index;
pub mod matcher;

// Re-export core types
pub use solocase_core::{EmbeddingBackend, Error, Result};

pub use index::{cosine_similarity, Neighbor, SemanticIndex};
pub use matcher::{Corpus, SemanticMatcher};
