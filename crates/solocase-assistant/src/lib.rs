//! # solocase-assistant
//!
//! The conversation orchestrator for solocase: fans a query out through
//! the analyzer, knowledge retriever, referral ranker, and optional
//! semantic matcher, then merges the results with the generation
//! collaborator into a structured response with static fallbacks for
//! quota and transient failures.

pub mod assistant;
pub mod fallback;
pub mod prompt;

// Re-export core types
pub use solocase_core::{ChatRole, ChatTurn, QueryProfile};

pub use assistant::{AssistantResponse, LegalAssistant, ResponseKind};
pub use fallback::{quota_fallback, DISCLAIMER, TRANSIENT_APOLOGY};
pub use prompt::{build_system_prompt, SYSTEM_PROMPT};
