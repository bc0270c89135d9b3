//! # solocase-kb
//!
//! Knowledge retrieval for solocase: bounded keyword search over the
//! case-law, procedure, and statute record stores with length-capped
//! excerpts for display.
//!
//! This crate provides:
//! - [`InMemoryKnowledgeBase`], the reference implementation of the core
//!   store traits
//! - [`KnowledgeRetriever`], the query-side entry point with per-section
//!   degradation on store failure
//! - Sample reference data behind the `fixtures` feature

pub mod excerpt;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod retriever;
pub mod store;

// Re-export core types
pub use solocase_core::{
    CaseFilter, CaseRecord, CaseStore, KnowledgeEntry, KnowledgeFilter, KnowledgeKind,
    KnowledgeStore, ReferralCandidate, ReferralStore,
};

pub use excerpt::excerpt;
pub use retriever::{
    KnowledgeRetriever, RetrievedCase, RetrievedEntry, RetrievedKnowledge, Section,
};
pub use store::{parse_candidates, InMemoryKnowledgeBase};
