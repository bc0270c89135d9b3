//! Pre-analysis query triage.
//!
//! A lightweight keyword screen run before the full pipeline: is this a
//! legal query at all, is it something this assistant should engage with,
//! and does it signal an emergency the caller should surface prominently.

use serde::{Deserialize, Serialize};

const LEGAL_KEYWORDS: &[&str] = &[
    "contract", "dispute", "claim", "court", "legal", "law", "liability", "damages",
    "compensation", "breach", "negligence", "debt", "payment", "employment", "property", "injury",
];

const INAPPROPRIATE_INDICATORS: &[&str] = &[
    "illegal", "criminal", "fraud", "money laundering", "tax evasion", "violence", "threats",
];

const EMERGENCY_INDICATORS: &[&str] = &[
    "served with", "court date", "deadline", "urgent", "injunction", "freezing order", "arrest",
];

/// Result of validating a query before analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryValidation {
    /// The query mentions civil-litigation subject matter.
    pub is_legal: bool,
    /// The query stays inside the assistant's civil remit.
    pub is_appropriate: bool,
    /// The query signals a deadline or enforcement emergency.
    pub requires_immediate_attention: bool,
}

/// Screen a query against the triage keyword lists.
pub fn validate_query(text: &str) -> QueryValidation {
    let lowered = text.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

    QueryValidation {
        is_legal: contains_any(LEGAL_KEYWORDS),
        is_appropriate: !contains_any(INAPPROPRIATE_INDICATORS),
        requires_immediate_attention: contains_any(EMERGENCY_INDICATORS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_query() {
        let validation = validate_query("I want to claim damages for breach of contract");
        assert!(validation.is_legal);
        assert!(validation.is_appropriate);
        assert!(!validation.requires_immediate_attention);
    }

    #[test]
    fn test_non_legal_query() {
        let validation = validate_query("what is the weather like today");
        assert!(!validation.is_legal);
        assert!(validation.is_appropriate);
    }

    #[test]
    fn test_inappropriate_query() {
        let validation = validate_query("how do I get away with tax evasion");
        assert!(!validation.is_appropriate);
    }

    #[test]
    fn test_emergency_query() {
        let validation = validate_query("I was served with a freezing order");
        assert!(validation.requires_immediate_attention);
    }
}
