//! Interactive demo for the solocase pipeline.
//!
//! Reads a query from the command line, runs it through the full
//! orchestrator against the sample knowledge base, and prints the
//! structured response. Requires `OPENAI_API_KEY` (or a compatible
//! endpoint via `OPENAI_BASE_URL`).
//!
//! ```sh
//! solocase-demo "I am owed £15,000 for breach of contract"
//! ```

use std::sync::Arc;

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solocase_analyzer::QueryAnalyzer;
use solocase_assistant::LegalAssistant;
use solocase_inference::{NerClient, OpenAIBackend};
use solocase_kb::{fixtures, InMemoryKnowledgeBase, KnowledgeRetriever};
use solocase_referral::ReferralRanker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let query = match std::env::args().nth(1) {
        Some(q) => q,
        None => bail!("usage: solocase-demo \"<your legal question>\""),
    };

    let kb = Arc::new(InMemoryKnowledgeBase::new(
        fixtures::sample_cases(),
        fixtures::sample_entries(),
        fixtures::sample_candidates(),
    ));

    let generator = Arc::new(OpenAIBackend::from_env().context("OpenAI backend configuration")?);

    let mut analyzer = QueryAnalyzer::new();
    if let Some(ner) = NerClient::from_env() {
        analyzer = analyzer.with_ner(Arc::new(ner));
    }

    let assistant = LegalAssistant::new(
        analyzer,
        KnowledgeRetriever::new(kb.clone(), kb.clone()),
        ReferralRanker::new(kb),
        generator,
    );

    let response = assistant.respond(&query, &[]).await?;

    println!("{}", response.body);
    println!();
    println!(
        "[{:?}] category={} track={} urgency={}",
        response.kind, response.profile.category, response.profile.track, response.profile.urgency
    );

    if !response.referral.recommended.is_empty() {
        println!();
        println!("Recommended firms:");
        for referral in &response.referral.recommended {
            println!(
                "  {} ({}) — score {}",
                referral.candidate.firm_name, referral.candidate.location, referral.score
            );
        }
    }

    if !response.referral.funding_options.is_empty() {
        println!();
        println!("Funding options:");
        for option in &response.referral.funding_options {
            println!("  {} — {}", option.kind, option.cost);
        }
    }

    println!();
    println!("{}", response.referral.advice);

    Ok(())
}
