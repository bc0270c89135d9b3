//! Centralized default constants for the solocase system.
//!
//! **This module is the single source of truth** for all shared default
//! values. Member crates reference these constants instead of defining
//! their own magic numbers.
//!
//! Organized by domain area. When adding new constants, place them in the
//! appropriate section and document the rationale for the chosen value.

// =============================================================================
// TRACK ALLOCATION (CPR Part 26 value bands)
// =============================================================================

/// Upper bound of the small claims track, in pounds.
pub const SMALL_CLAIMS_MAX_POUNDS: f64 = 10_000.0;

/// Upper bound of the fast track, in pounds.
pub const FAST_TRACK_MAX_POUNDS: f64 = 25_000.0;

/// Upper bound of the multi-track band this assistant covers, in pounds.
/// Values above this are flagged for the High Court.
pub const MULTI_TRACK_MAX_POUNDS: f64 = 100_000.0;

/// Minor currency units per pound, used when comparing extracted claim
/// values against record value ranges stored in pence.
pub const PENCE_PER_POUND: f64 = 100.0;

// =============================================================================
// KNOWLEDGE RETRIEVAL
// =============================================================================

/// Maximum case-law results per retrieval.
pub const CASE_RESULT_LIMIT: usize = 5;

/// Maximum procedural-rule results per retrieval.
pub const PROCEDURE_RESULT_LIMIT: usize = 3;

/// Maximum statutory-provision results per retrieval.
pub const STATUTE_RESULT_LIMIT: usize = 3;

/// Case summary excerpt length in characters.
pub const CASE_EXCERPT_CHARS: usize = 200;

/// Procedure content excerpt length in characters.
pub const PROCEDURE_EXCERPT_CHARS: usize = 300;

/// Statute content excerpt length in characters.
pub const STATUTE_EXCERPT_CHARS: usize = 250;

/// Query tokens must be strictly longer than this to act as keyword
/// filters; shorter tokens ("the", "of") match too broadly.
pub const KEYWORD_MIN_CHARS: usize = 3;

// =============================================================================
// SEMANTIC SEARCH
// =============================================================================

/// Default number of nearest-neighbor excerpts returned per corpus.
pub const SEMANTIC_TOP_K: usize = 3;

/// Default embedding model for the OpenAI-compatible backend.
pub const EMBED_MODEL: &str = "text-embedding-3-small";

/// Default embedding vector dimension for text-embedding-3-small.
pub const EMBED_DIMENSION: usize = 1536;

// =============================================================================
// REFERRAL RANKING
// =============================================================================

/// Number of top-scored candidates returned.
pub const REFERRAL_LIMIT: usize = 3;

/// Score for an exact specialty match against the query category.
pub const SPECIALTY_MATCH_SCORE: i32 = 10;

/// Fallback score for a general-litigation practice.
pub const GENERAL_LITIGATION_SCORE: i32 = 5;

/// Score for direct experience on the allocated track.
pub const TRACK_MATCH_SCORE: i32 = 8;

/// Fallback score for all-tracks experience.
pub const ALL_TRACKS_SCORE: i32 = 6;

/// Bonus per urgent-work specialty when the query urgency is high.
/// Applied independently for urgent applications and injunctions, so a
/// firm holding both stacks to twice this value.
pub const URGENCY_BONUS: i32 = 5;

// =============================================================================
// FUNDING THRESHOLDS (pounds; each rung is independent, not exclusive)
// =============================================================================

/// Minimum claim value for a Conditional Fee Arrangement to be worthwhile.
pub const CFA_MIN_POUNDS: f64 = 1_000.0;

/// Minimum claim value for After the Event insurance.
pub const ATE_MIN_POUNDS: f64 = 5_000.0;

/// Minimum claim value for a Damages Based Agreement.
pub const DBA_MIN_POUNDS: f64 = 10_000.0;

/// Minimum claim value for third-party litigation funding.
pub const THIRD_PARTY_FUNDING_MIN_POUNDS: f64 = 50_000.0;

/// Civil legal aid ceiling for the housing-type cases that still qualify.
pub const LEGAL_AID_MAX_POUNDS: f64 = 5_000.0;

// =============================================================================
// GENERATION
// =============================================================================

/// Default chat model for the OpenAI-compatible backend.
pub const GEN_MODEL: &str = "gpt-4o";

/// Number of prior conversation turns included in a generation request.
pub const HISTORY_WINDOW: usize = 6;

/// Default request timeout for collaborator HTTP calls, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// NAMED ENTITY RECOGNITION
// =============================================================================

/// Entity types requested from the NER collaborator for legal queries.
pub const NER_ENTITY_TYPES: &[&str] = &["person", "organization", "location", "date", "money"];

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Base URL of the OpenAI-compatible API.
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";

/// API key for the OpenAI-compatible API.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Override for the embedding model slug.
pub const ENV_EMBED_MODEL: &str = "SOLOCASE_EMBED_MODEL";

/// Override for the generation model slug.
pub const ENV_GEN_MODEL: &str = "SOLOCASE_GEN_MODEL";

/// Base URL of the NER sidecar. Unset or empty disables entity extraction.
pub const ENV_NER_BASE_URL: &str = "SOLOCASE_NER_BASE_URL";
