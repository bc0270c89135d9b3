//! # solocase-core
//!
//! Core types, traits, and abstractions for the solocase legal-query
//! assistant.
//!
//! This crate provides the foundational data structures and trait
//! definitions that the other solocase crates depend on: the case
//! [`QueryProfile`] and its enums, knowledge-base record types, referral
//! candidate records, collaborator traits, the shared error type, the
//! structured-logging schema, and civil-procedure utilities.

pub mod candidates;
pub mod civil;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod profile;
pub mod records;
pub mod traits;

// Re-export commonly used types at crate root
pub use candidates::{
    ReferralCandidate, TAG_ALL_TRACKS, TAG_GENERAL_LITIGATION, TAG_INJUNCTIONS,
    TAG_URGENT_APPLICATIONS,
};
pub use civil::{
    court_fees, extract_case_reference, format_citation, format_currency, limitation_period,
    limitation_status, CourtFees, LimitationPeriod, LimitationStatus,
};
pub use error::{Error, Result};
pub use profile::{Category, Entity, QueryProfile, Tier, Track};
pub use records::{CaseRecord, KnowledgeEntry, KnowledgeKind};
pub use traits::{
    CaseFilter, CaseStore, ChatRole, ChatTurn, EmbeddingBackend, GenerationBackend,
    KnowledgeFilter, KnowledgeStore, NerBackend, NerEntity, ReferralStore,
};
