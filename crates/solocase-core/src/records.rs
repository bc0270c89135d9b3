//! Immutable knowledge-base record types.
//!
//! Records are reference data: loaded once by an out-of-scope seeding
//! process and read-only at query time. Construction is strict — serde
//! rejects unknown fields so a malformed seed fails at load, not by
//! silently growing arbitrary attributes.

use serde::{Deserialize, Serialize};

use crate::profile::Track;

/// A reported case precedent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseRecord {
    pub case_name: String,
    /// Neutral or report citation, e.g. `[1915] AC 79`.
    pub citation: String,
    pub court: String,
    pub year: i32,
    pub track: Track,
    /// Claim value in pence.
    pub claim_value_pence: i64,
    pub summary: String,
    pub principles: String,
    pub url: String,
}

/// Whether a knowledge entry documents procedure or statute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeKind {
    Procedure,
    Statute,
}

impl std::fmt::Display for KnowledgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Procedure => write!(f, "procedure"),
            Self::Statute => write!(f, "statute"),
        }
    }
}

/// A procedural rule or statutory provision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeEntry {
    pub title: String,
    pub content: String,
    pub kind: KnowledgeKind,
    /// Finer-grained grouping, e.g. "small_claims" or "contract_dispute".
    pub subcategory: String,
    /// Tracks this entry applies to. Empty means track-agnostic.
    pub track_relevance: Vec<Track>,
    /// Comma-separated search keywords maintained by the content editors.
    pub keywords: String,
    pub source_url: String,
}
