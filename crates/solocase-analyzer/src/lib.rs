//! # solocase-analyzer
//!
//! Query understanding for solocase: turns unstructured natural-language
//! civil-litigation queries into structured [`QueryProfile`]s.
//!
//! This crate provides:
//! - Keyword-scored category and track identification
//! - Monetary value extraction with value-derived track override
//! - Two-tier urgency and complexity assessment
//! - Optional named-entity enrichment via the NER collaborator
//! - Pre-analysis query triage
//!
//! ## Example
//!
//! ```
//! use solocase_analyzer::QueryAnalyzer;
//! use solocase_core::Track;
//!
//! let analyzer = QueryAnalyzer::new();
//! let profile = analyzer.analyze("my supplier breached our contract, I'm owed £15,000");
//! assert_eq!(profile.track, Track::FastTrack);
//! ```

pub mod analyzer;
pub mod lexicon;
pub mod money;
pub mod validate;

// Re-export core types
pub use solocase_core::{Category, Entity, QueryProfile, Tier, Track};

pub use analyzer::QueryAnalyzer;
pub use money::extract_money_values;
pub use validate::{validate_query, QueryValidation};
