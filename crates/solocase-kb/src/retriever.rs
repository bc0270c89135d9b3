//! Keyword retrieval over the case, procedure, and statute stores.
//!
//! Each record type is queried independently with a conjunctive
//! category/track filter plus a disjunctive keyword filter built from the
//! query tokens. A store failure for one record type degrades that
//! section to empty but is reported on the `degraded` channel so callers
//! can tell "no results" from "store unavailable".

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use solocase_core::defaults::{
    CASE_EXCERPT_CHARS, CASE_RESULT_LIMIT, KEYWORD_MIN_CHARS, PROCEDURE_EXCERPT_CHARS,
    PROCEDURE_RESULT_LIMIT, STATUTE_EXCERPT_CHARS, STATUTE_RESULT_LIMIT,
};
use solocase_core::{
    CaseFilter, CaseStore, Category, KnowledgeFilter, KnowledgeKind, KnowledgeStore, Track,
};

use crate::excerpt::excerpt;

/// A record section that failed to load and was degraded to empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Cases,
    Procedures,
    Statutes,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Section::Cases => "cases",
            Section::Procedures => "procedures",
            Section::Statutes => "statutes",
        };
        f.write_str(s)
    }
}

/// A case-law hit with its summary cut down to excerpt length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedCase {
    pub case_name: String,
    pub citation: String,
    pub court: String,
    pub year: i32,
    pub track: Track,
    pub excerpt: String,
    pub url: String,
}

/// A procedure or statute hit with its content cut down to excerpt length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedEntry {
    pub title: String,
    pub excerpt: String,
    pub source_url: String,
}

/// Combined retrieval result across all three record types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievedKnowledge {
    pub cases: Vec<RetrievedCase>,
    pub procedures: Vec<RetrievedEntry>,
    pub statutes: Vec<RetrievedEntry>,
    /// Sections whose store query failed and returned empty.
    pub degraded: Vec<Section>,
}

impl RetrievedKnowledge {
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.procedures.is_empty() && self.statutes.is_empty()
    }
}

/// Tokens usable for the disjunctive keyword filter: lowercased words
/// longer than the minimum keyword length.
fn keyword_tokens(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > KEYWORD_MIN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Retrieves bounded, excerpted knowledge for a query.
#[derive(Clone)]
pub struct KnowledgeRetriever {
    case_store: Arc<dyn CaseStore>,
    knowledge_store: Arc<dyn KnowledgeStore>,
}

impl KnowledgeRetriever {
    pub fn new(case_store: Arc<dyn CaseStore>, knowledge_store: Arc<dyn KnowledgeStore>) -> Self {
        Self {
            case_store,
            knowledge_store,
        }
    }

    /// Query all three record stores and return capped, excerpted results.
    ///
    /// Never fails: a store error degrades its section to empty, logs a
    /// warning, and records the section in `degraded`.
    pub async fn get_relevant_information(
        &self,
        query: &str,
        category: Option<Category>,
        track: Option<Track>,
    ) -> RetrievedKnowledge {
        let keywords = keyword_tokens(query);
        let mut result = RetrievedKnowledge::default();

        let case_filter = CaseFilter {
            category,
            track,
            keywords: keywords.clone(),
            limit: CASE_RESULT_LIMIT,
        };
        match self.case_store.search_cases(&case_filter).await {
            Ok(cases) => {
                result.cases = cases
                    .into_iter()
                    .map(|record| RetrievedCase {
                        case_name: record.case_name,
                        citation: record.citation,
                        court: record.court,
                        year: record.year,
                        track: record.track,
                        excerpt: excerpt(&record.summary, CASE_EXCERPT_CHARS),
                        url: record.url,
                    })
                    .collect();
            }
            Err(e) => {
                warn!(
                    section = %Section::Cases,
                    error = %e,
                    "case store query failed, degrading section to empty"
                );
                result.degraded.push(Section::Cases);
            }
        }

        let procedure_filter = KnowledgeFilter {
            kind: KnowledgeKind::Procedure,
            category,
            track,
            keywords: keywords.clone(),
            limit: PROCEDURE_RESULT_LIMIT,
        };
        match self.knowledge_store.search_entries(&procedure_filter).await {
            Ok(entries) => {
                result.procedures = entries
                    .into_iter()
                    .map(|entry| RetrievedEntry {
                        title: entry.title,
                        excerpt: excerpt(&entry.content, PROCEDURE_EXCERPT_CHARS),
                        source_url: entry.source_url,
                    })
                    .collect();
            }
            Err(e) => {
                warn!(
                    section = %Section::Procedures,
                    error = %e,
                    "procedure store query failed, degrading section to empty"
                );
                result.degraded.push(Section::Procedures);
            }
        }

        // Statutes apply regardless of the allocated track, so the track
        // conjunct is deliberately left off.
        let statute_filter = KnowledgeFilter {
            kind: KnowledgeKind::Statute,
            category,
            track: None,
            keywords,
            limit: STATUTE_RESULT_LIMIT,
        };
        match self.knowledge_store.search_entries(&statute_filter).await {
            Ok(entries) => {
                result.statutes = entries
                    .into_iter()
                    .map(|entry| RetrievedEntry {
                        title: entry.title,
                        excerpt: excerpt(&entry.content, STATUTE_EXCERPT_CHARS),
                        source_url: entry.source_url,
                    })
                    .collect();
            }
            Err(e) => {
                warn!(
                    section = %Section::Statutes,
                    error = %e,
                    "statute store query failed, degrading section to empty"
                );
                result.degraded.push(Section::Statutes);
            }
        }

        debug!(
            query,
            result_count =
                result.cases.len() + result.procedures.len() + result.statutes.len(),
            cases = result.cases.len(),
            procedures = result.procedures.len(),
            statutes = result.statutes.len(),
            "knowledge retrieval complete"
        );

        result
    }
}
