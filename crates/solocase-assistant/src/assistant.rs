//! Conversation orchestrator.
//!
//! One query fans out through the analyzer, knowledge retriever, and
//! referral ranker (plus the semantic matcher when corpora are loaded),
//! and the merged context drives the generation collaborator. Quota and
//! transient generation failures select static fallback bodies; fatal
//! configuration errors propagate.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use solocase_analyzer::{validate_query, QueryAnalyzer};
use solocase_core::defaults::{HISTORY_WINDOW, SEMANTIC_TOP_K};
use solocase_core::{ChatTurn, GenerationBackend, QueryProfile, Result};
use solocase_kb::{KnowledgeRetriever, RetrievedKnowledge};
use solocase_referral::{ReferralRanker, ReferralRecommendation};
use solocase_search::{Corpus, SemanticMatcher};

use crate::fallback::{quota_fallback, DISCLAIMER, INAPPROPRIATE_REFUSAL, TRANSIENT_APOLOGY};
use crate::prompt::build_system_prompt;

/// How the response body was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// Generated answer.
    Info,
    /// Static fallback (quota exhausted or query out of remit).
    Warning,
    /// Apology after a transient generation failure.
    Error,
}

/// Structured response assembled by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub body: String,
    pub kind: ResponseKind,
    pub profile: QueryProfile,
    pub knowledge: RetrievedKnowledge,
    pub referral: ReferralRecommendation,
    pub procedure_matches: Vec<String>,
    pub case_law_matches: Vec<String>,
    pub requires_immediate_attention: bool,
}

/// The assistant pipeline: analyzer, retriever, ranker, optional matcher,
/// and the generation collaborator.
pub struct LegalAssistant {
    analyzer: QueryAnalyzer,
    retriever: KnowledgeRetriever,
    ranker: ReferralRanker,
    matcher: Option<SemanticMatcher>,
    generator: Arc<dyn GenerationBackend>,
}

impl LegalAssistant {
    pub fn new(
        analyzer: QueryAnalyzer,
        retriever: KnowledgeRetriever,
        ranker: ReferralRanker,
        generator: Arc<dyn GenerationBackend>,
    ) -> Self {
        Self {
            analyzer,
            retriever,
            ranker,
            matcher: None,
            generator,
        }
    }

    /// Attach a semantic matcher over pre-built corpora.
    pub fn with_matcher(mut self, matcher: SemanticMatcher) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Answer a query given prior conversation turns.
    ///
    /// Degradation rules: quota exhaustion and transient generation
    /// failures yield static bodies, store failures surface through the
    /// knowledge `degraded` channel, and embedding failures from the
    /// matcher propagate as errors. Configuration errors are fatal.
    pub async fn respond(&self, query: &str, history: &[ChatTurn]) -> Result<AssistantResponse> {
        let validation = validate_query(query);
        let profile = self.analyzer.analyze_with_entities(query).await;

        // The category conjunct requires the category phrase to appear
        // verbatim in record text, which is too strict for free-form
        // summaries; the orchestrator constrains by track only and lets
        // the keyword disjunction do the topical narrowing.
        let (knowledge, referral) = tokio::join!(
            self.retriever
                .get_relevant_information(query, None, Some(profile.track)),
            self.ranker.rank(&profile),
        );

        let (procedure_matches, case_law_matches) = match &self.matcher {
            Some(matcher) => (
                matcher.search(Corpus::Procedure, query, SEMANTIC_TOP_K).await?,
                matcher.search(Corpus::CaseLaw, query, SEMANTIC_TOP_K).await?,
            ),
            None => (Vec::new(), Vec::new()),
        };

        let (body, kind) = if !validation.is_appropriate {
            warn!(query, "query outside remit, refusing");
            (INAPPROPRIATE_REFUSAL.to_string(), ResponseKind::Warning)
        } else {
            let system = build_system_prompt(&profile, &knowledge);
            let window_start = history.len().saturating_sub(HISTORY_WINDOW);
            match self
                .generator
                .complete(&system, &history[window_start..], query)
                .await
            {
                Ok(body) => (body, ResponseKind::Info),
                Err(e) if matches!(e, solocase_core::Error::Quota(_)) => {
                    warn!(error = %e, "generation quota exhausted, using static fallback");
                    (quota_fallback(query), ResponseKind::Warning)
                }
                Err(e) if e.is_transient() => {
                    warn!(error = %e, "transient generation failure");
                    (TRANSIENT_APOLOGY.to_string(), ResponseKind::Error)
                }
                Err(e) => return Err(e),
            }
        };

        info!(
            category = %profile.category,
            track = %profile.track,
            urgency = %profile.urgency,
            result_count = knowledge.cases.len()
                + knowledge.procedures.len()
                + knowledge.statutes.len(),
            referrals = referral.recommended.len(),
            kind = ?kind,
            "response assembled"
        );

        Ok(AssistantResponse {
            body: format!("{}\n\n{}", body, DISCLAIMER),
            kind,
            profile,
            knowledge,
            referral,
            procedure_matches,
            case_law_matches,
            requires_immediate_attention: validation.requires_immediate_attention,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use solocase_core::{Category, EmbeddingBackend, Error, Tier, Track};
    use solocase_inference::mock::MockInferenceBackend;
    use solocase_kb::{fixtures, InMemoryKnowledgeBase};
    use solocase_search::SemanticIndex;

    fn knowledge_base() -> Arc<InMemoryKnowledgeBase> {
        Arc::new(InMemoryKnowledgeBase::new(
            fixtures::sample_cases(),
            fixtures::sample_entries(),
            fixtures::sample_candidates(),
        ))
    }

    fn assistant_with(generator: Arc<dyn GenerationBackend>) -> LegalAssistant {
        let kb = knowledge_base();
        LegalAssistant::new(
            QueryAnalyzer::new(),
            KnowledgeRetriever::new(kb.clone(), kb.clone()),
            ReferralRanker::new(kb),
            generator,
        )
    }

    /// Generator that fails with a fixed error.
    struct ErringGen(fn() -> Error);

    #[async_trait]
    impl GenerationBackend for ErringGen {
        async fn complete(
            &self,
            _system: &str,
            _history: &[ChatTurn],
            _user_message: &str,
        ) -> Result<String> {
            Err((self.0)())
        }

        fn model_name(&self) -> &str {
            "erring-gen"
        }
    }

    /// Generator that records how many history turns it was handed.
    struct CountingGen {
        seen_turns: Arc<Mutex<usize>>,
    }

    #[async_trait]
    impl GenerationBackend for CountingGen {
        async fn complete(
            &self,
            _system: &str,
            history: &[ChatTurn],
            _user_message: &str,
        ) -> Result<String> {
            *self.seen_turns.lock().unwrap() = history.len();
            Ok("ok".to_string())
        }

        fn model_name(&self) -> &str {
            "counting-gen"
        }
    }

    #[tokio::test]
    async fn test_full_pipeline_response() {
        let mock = MockInferenceBackend::new()
            .with_fixed_response("You may have a claim for breach of contract.");
        let assistant = assistant_with(Arc::new(mock));

        let response = assistant
            .respond(
                "I am owed £15,000 for breach of contract with a penalty clause",
                &[],
            )
            .await
            .unwrap();

        assert_eq!(response.kind, ResponseKind::Info);
        assert!(response.body.contains("breach of contract"));
        assert!(response.body.contains("Important Legal Disclaimer"));
        assert_eq!(response.profile.category, Category::ContractDispute);
        assert_eq!(response.profile.track, Track::FastTrack);
        assert!(!response.knowledge.cases.is_empty());
        assert!(!response.referral.recommended.is_empty());
    }

    #[tokio::test]
    async fn test_quota_failure_selects_static_fallback() {
        let assistant =
            assistant_with(Arc::new(ErringGen(|| Error::Quota("hard limit".to_string()))));

        let response = assistant.respond("contract dispute", &[]).await.unwrap();
        assert_eq!(response.kind, ResponseKind::Warning);
        assert!(response.body.contains("UK Civil Litigation Guidance"));
        // Retrieval and referral still run on the quota path.
        assert!(!response.knowledge.procedures.is_empty() || !response.knowledge.cases.is_empty());
    }

    #[tokio::test]
    async fn test_transient_failure_selects_apology() {
        let assistant =
            assistant_with(Arc::new(ErringGen(|| Error::Inference("502".to_string()))));

        let response = assistant.respond("contract dispute", &[]).await.unwrap();
        assert_eq!(response.kind, ResponseKind::Error);
        assert!(response.body.contains("technical issue"));
    }

    #[tokio::test]
    async fn test_config_failure_is_fatal() {
        let assistant =
            assistant_with(Arc::new(ErringGen(|| Error::Config("bad key".to_string()))));

        let result = assistant.respond("contract dispute", &[]).await;
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_inappropriate_query_refused_without_generation() {
        let mock = MockInferenceBackend::new();
        let assistant = assistant_with(Arc::new(mock.clone()));

        let response = assistant
            .respond("can I recover this debt with threats of violence", &[])
            .await
            .unwrap();

        assert_eq!(response.kind, ResponseKind::Warning);
        assert!(response.body.contains("civil legal matters"));
        assert_eq!(mock.call_count("complete"), 0);
    }

    #[tokio::test]
    async fn test_history_windowed_to_last_six_turns() {
        let seen_turns = Arc::new(Mutex::new(0));
        let generator = CountingGen {
            seen_turns: seen_turns.clone(),
        };
        let assistant = assistant_with(Arc::new(generator));

        let history: Vec<ChatTurn> = (0..10)
            .map(|i| {
                if i % 2 == 0 {
                    ChatTurn::user(format!("question {}", i))
                } else {
                    ChatTurn::assistant(format!("answer {}", i))
                }
            })
            .collect();

        assistant
            .respond("follow-up question about my contract", &history)
            .await
            .unwrap();
        assert_eq!(*seen_turns.lock().unwrap(), HISTORY_WINDOW);
    }

    #[tokio::test]
    async fn test_urgent_query_flagged() {
        let assistant = assistant_with(Arc::new(MockInferenceBackend::new()));

        let response = assistant
            .respond("I received an eviction notice today, court date tomorrow", &[])
            .await
            .unwrap();

        assert!(response.requires_immediate_attention);
        assert_eq!(response.profile.urgency, Tier::High);
    }

    #[tokio::test]
    async fn test_matcher_embedding_failure_propagates() {
        let failing = MockInferenceBackend::new().with_dimension(2).with_failures();
        let matcher = SemanticMatcher::new(
            Arc::new(failing),
            SemanticIndex::new(vec![vec![1.0, 0.0]], vec!["CPR excerpt".to_string()]).unwrap(),
            SemanticIndex::empty(),
        )
        .unwrap();

        let assistant =
            assistant_with(Arc::new(MockInferenceBackend::new())).with_matcher(matcher);

        let result = assistant.respond("contract dispute", &[]).await;
        assert!(matches!(result, Err(Error::Embedding(_))));
    }

    #[tokio::test]
    async fn test_matcher_results_included() {
        let embedder = MockInferenceBackend::new().with_dimension(1536);
        let excerpt = "CPR 26: allocation of cases to tracks".to_string();
        // Build the corpus vector with the same embedder so the query has
        // a well-defined neighbor.
        let vector = embedder.embed_texts(&[excerpt.clone()]).await.unwrap();
        let matcher = SemanticMatcher::new(
            Arc::new(embedder),
            SemanticIndex::new(vector, vec![excerpt.clone()]).unwrap(),
            SemanticIndex::empty(),
        )
        .unwrap();

        let assistant =
            assistant_with(Arc::new(MockInferenceBackend::new())).with_matcher(matcher);

        let response = assistant
            .respond("which track will my claim be allocated to", &[])
            .await
            .unwrap();
        assert_eq!(response.procedure_matches, vec![excerpt]);
        assert!(response.case_law_matches.is_empty());
    }
}
