//! In-memory record stores and their filter predicates.
//!
//! The store traits live in `solocase-core`; this module provides the
//! reference in-memory implementation used by tests, the demo binary, and
//! deployments small enough to hold the knowledge base resident. Records
//! are immutable after construction, so concurrent readers need no
//! synchronization.

use async_trait::async_trait;
use tracing::warn;

use solocase_core::{
    CaseFilter, CaseRecord, CaseStore, KnowledgeEntry, KnowledgeFilter, KnowledgeStore,
    ReferralCandidate, ReferralStore, Result,
};

/// Resident knowledge base holding all three record collections.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKnowledgeBase {
    cases: Vec<CaseRecord>,
    entries: Vec<KnowledgeEntry>,
    candidates: Vec<ReferralCandidate>,
}

impl InMemoryKnowledgeBase {
    pub fn new(
        cases: Vec<CaseRecord>,
        entries: Vec<KnowledgeEntry>,
        candidates: Vec<ReferralCandidate>,
    ) -> Self {
        Self {
            cases,
            entries,
            candidates,
        }
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}

/// Parse a JSON array of referral candidates, skipping malformed elements.
///
/// A single bad record must not abort the whole load: each failure is
/// logged and dropped, and the remaining candidates survive.
pub fn parse_candidates(json: &str) -> Result<Vec<ReferralCandidate>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;

    let mut candidates = Vec::with_capacity(raw.len());
    for (position, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<ReferralCandidate>(value) {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => {
                warn!(position, error = %e, "skipping malformed referral candidate");
            }
        }
    }

    Ok(candidates)
}

/// Case predicate: conjunctive category/track filters AND the disjunctive
/// keyword filter (vacuously true when no keywords were supplied).
///
/// Cases carry no category field, so the category conjunct matches the
/// category's human-readable words against the summary.
fn case_matches(record: &CaseRecord, filter: &CaseFilter) -> bool {
    let summary = record.summary.to_lowercase();
    let principles = record.principles.to_lowercase();

    if let Some(category) = filter.category {
        let phrase = category.as_str().replace('_', " ");
        if !summary.contains(&phrase) && !principles.contains(&phrase) {
            return false;
        }
    }
    if let Some(track) = filter.track {
        if record.track != track {
            return false;
        }
    }

    filter.keywords.is_empty()
        || filter
            .keywords
            .iter()
            .any(|word| summary.contains(word) || principles.contains(word))
}

/// Knowledge-entry predicate: kind equality, conjunctive subcategory/track
/// filters, and the disjunctive keyword filter over content and keywords.
fn entry_matches(entry: &KnowledgeEntry, filter: &KnowledgeFilter) -> bool {
    if entry.kind != filter.kind {
        return false;
    }
    if let Some(category) = filter.category {
        if !entry.subcategory.contains(category.as_str()) {
            return false;
        }
    }
    if let Some(track) = filter.track {
        if !entry.track_relevance.contains(&track) {
            return false;
        }
    }

    if filter.keywords.is_empty() {
        return true;
    }
    let content = entry.content.to_lowercase();
    let keywords = entry.keywords.to_lowercase();
    filter
        .keywords
        .iter()
        .any(|word| content.contains(word) || keywords.contains(word))
}

#[async_trait]
impl CaseStore for InMemoryKnowledgeBase {
    async fn search_cases(&self, filter: &CaseFilter) -> Result<Vec<CaseRecord>> {
        Ok(self
            .cases
            .iter()
            .filter(|record| case_matches(record, filter))
            .take(filter.limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl KnowledgeStore for InMemoryKnowledgeBase {
    async fn search_entries(&self, filter: &KnowledgeFilter) -> Result<Vec<KnowledgeEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry_matches(entry, filter))
            .take(filter.limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReferralStore for InMemoryKnowledgeBase {
    async fn active_candidates(
        &self,
        claim_value_pence: Option<i64>,
    ) -> Result<Vec<ReferralCandidate>> {
        Ok(self
            .candidates
            .iter()
            .filter(|candidate| candidate.active)
            .filter(|candidate| match claim_value_pence {
                Some(value) => candidate.accepts_value(value),
                None => true,
            })
            .cloned()
            .collect())
    }
}
