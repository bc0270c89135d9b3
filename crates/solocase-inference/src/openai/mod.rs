//! OpenAI-compatible backend for embeddings and chat completion.
//!
//! Works against the official API or any compatible endpoint (the base
//! URL is configurable). Error responses are classified into
//! quota/transient/configuration so the orchestrator can pick a fallback.

mod backend;
mod error;
mod types;

pub use backend::{OpenAIBackend, OpenAIConfig, DEFAULT_OPENAI_URL};
pub use error::{to_core_error, OpenAIErrorCode};
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
