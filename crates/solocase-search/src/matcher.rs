//! Semantic matching over the two fixed knowledge corpora.
//!
//! The matcher embeds the query via the embedding collaborator and runs
//! nearest-neighbor search against the chosen corpus index. Unlike the
//! analyzer there is no degraded mode here: an embedding failure
//! propagates, because silently returning empty or stale matches would
//! corrupt downstream citations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use solocase_core::{EmbeddingBackend, Error, Result};

use crate::index::SemanticIndex;

/// The corpora a semantic search can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corpus {
    /// Civil Procedure Rules excerpts.
    Procedure,
    /// Case-law excerpts.
    CaseLaw,
}

impl std::fmt::Display for Corpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Procedure => write!(f, "procedure"),
            Self::CaseLaw => write!(f, "case_law"),
        }
    }
}

/// Nearest-neighbor matcher over the procedure and case-law corpora.
pub struct SemanticMatcher {
    embedder: Arc<dyn EmbeddingBackend>,
    procedure: SemanticIndex,
    case_law: SemanticIndex,
}

impl SemanticMatcher {
    /// Build a matcher from the embedding collaborator and the two corpus
    /// indexes.
    ///
    /// Fails at construction when a non-empty index disagrees with the
    /// embedder on vector dimension; that is the same class of deployment
    /// fault as a lock-step mismatch and must not surface per query.
    pub fn new(
        embedder: Arc<dyn EmbeddingBackend>,
        procedure: SemanticIndex,
        case_law: SemanticIndex,
    ) -> Result<Self> {
        for (corpus, index) in [(Corpus::Procedure, &procedure), (Corpus::CaseLaw, &case_law)] {
            if !index.is_empty() && index.dimension() != embedder.dimension() {
                return Err(Error::Config(format!(
                    "{} index is {}-dimensional but embedding model {} produces {} dimensions",
                    corpus,
                    index.dimension(),
                    embedder.model_name(),
                    embedder.dimension()
                )));
            }
        }

        Ok(Self {
            embedder,
            procedure,
            case_law,
        })
    }

    fn index(&self, corpus: Corpus) -> &SemanticIndex {
        match corpus {
            Corpus::Procedure => &self.procedure,
            Corpus::CaseLaw => &self.case_law,
        }
    }

    /// Return up to `top_k` corpus excerpts nearest to the query text.
    ///
    /// Embedding failures propagate as [`Error::Embedding`].
    pub async fn search(
        &self,
        corpus: Corpus,
        query_text: &str,
        top_k: usize,
    ) -> Result<Vec<String>> {
        let vectors = self
            .embedder
            .embed_texts(&[query_text.to_string()])
            .await?;
        let query_vector = vectors
            .into_iter()
            .next()
            .ok_or_else(|| Error::Embedding("backend returned no vectors".to_string()))?;

        let index = self.index(corpus);
        let neighbors = index.nearest(&query_vector, top_k)?;

        let excerpts: Vec<String> = neighbors
            .iter()
            .filter_map(|n| index.excerpt(n.index))
            .map(str::to_string)
            .collect();

        debug!(
            corpus = %corpus,
            top_k,
            result_count = excerpts.len(),
            model = self.embedder.model_name(),
            "semantic search complete"
        );

        Ok(excerpts)
    }
}
