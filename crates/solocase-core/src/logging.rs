//! Structured logging schema and field name constants for solocase.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across
//! every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |
//! | TRACE | Per-item iteration, high-volume data (hits, excerpts) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated across a query's fan-out calls.
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "analyzer", "search", "kb", "referral", "inference", "assistant"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "semantic_matcher", "knowledge_retriever", "openai", "ner"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "analyze", "search", "get_relevant_information", "rank"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// User query text.
pub const QUERY: &str = "query";

/// Analyzed legal category.
pub const CATEGORY: &str = "category";

/// Allocated procedural track.
pub const TRACK: &str = "track";

/// Urgency tier of the query.
pub const URGENCY: &str = "urgency";

/// Corpus searched by the semantic matcher ("procedure", "case_law").
pub const CORPUS: &str = "corpus";

/// Knowledge section a log event refers to ("cases", "procedures", "statutes").
pub const SECTION: &str = "section";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of results returned by a search or ranking.
pub const RESULT_COUNT: &str = "result_count";

/// Requested number of nearest neighbors.
pub const TOP_K: &str = "top_k";

/// Number of candidates considered before filtering/scoring.
pub const CANDIDATE_COUNT: &str = "candidate_count";

/// Highest monetary value extracted from a query, in pounds.
pub const MAX_CLAIM_VALUE: &str = "max_claim_value";

// ─── Inference fields ──────────────────────────────────────────────────────

/// Model name used for embedding, generation, or NER.
pub const MODEL: &str = "model";

/// Byte length of a prompt or response.
pub const PROMPT_LEN: &str = "prompt_len";

/// Byte length of a model response.
pub const RESPONSE_LEN: &str = "response_len";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
