//! The query analyzer: free text in, complete [`QueryProfile`] out.
//!
//! `analyze` is a total function — unparseable or empty input yields the
//! default profile, never an error. Entity extraction is the only
//! collaborator call and degrades to an empty set on any failure.

use std::sync::Arc;

use tracing::{debug, warn};

use solocase_core::defaults::NER_ENTITY_TYPES;
use solocase_core::{Category, Entity, NerBackend, QueryProfile, Tier, Track};

use crate::lexicon::{
    CATEGORY_KEYWORDS, COMPLEXITY_TIERS, TRACK_COMPLEXITY_FALLBACK, TRACK_KEYWORDS, URGENCY_TIERS,
};
use crate::money::extract_money_values;

/// Analyzes free-text civil-litigation queries into structured profiles.
#[derive(Clone, Default)]
pub struct QueryAnalyzer {
    ner: Option<Arc<dyn NerBackend>>,
}

impl QueryAnalyzer {
    pub fn new() -> Self {
        Self { ner: None }
    }

    /// Attach an optional NER collaborator for entity extraction.
    pub fn with_ner(mut self, ner: Arc<dyn NerBackend>) -> Self {
        self.ner = Some(ner);
        self
    }

    /// Analyze a query into a complete profile. Pure and infallible; the
    /// entity set is always empty here (see [`Self::analyze_with_entities`]).
    pub fn analyze(&self, text: &str) -> QueryProfile {
        let lowered = text.to_lowercase();

        let category = identify_category(&lowered);
        let mut track = determine_track(&lowered);
        // Money patterns run over the original text so currency symbols
        // survive intact.
        let money_values = extract_money_values(text);

        // A concrete claim value dominates any keyword-derived track.
        if let Some(max_value) = money_values.iter().copied().reduce(f64::max) {
            let value_track = Track::for_value(max_value);
            if value_track != track {
                debug!(
                    keyword_track = %track,
                    value_track = %value_track,
                    max_value,
                    "claim value overrides keyword-derived track"
                );
            }
            track = value_track;
        }

        let profile = QueryProfile {
            category,
            track,
            money_values,
            urgency: scan_tiers(&lowered, &URGENCY_TIERS),
            complexity: scan_tiers(&lowered, &COMPLEXITY_TIERS),
            entities: Vec::new(),
        };

        debug!(
            category = %profile.category,
            track = %profile.track,
            urgency = %profile.urgency,
            complexity = %profile.complexity,
            value_count = profile.money_values.len(),
            "query analyzed"
        );

        profile
    }

    /// Analyze a query and enrich it with named entities.
    ///
    /// NER unavailability or failure degrades to an empty entity set with a
    /// warning; the profile is otherwise identical to [`Self::analyze`].
    pub async fn analyze_with_entities(&self, text: &str) -> QueryProfile {
        let mut profile = self.analyze(text);

        if let Some(ner) = &self.ner {
            match ner.extract_entities(text, NER_ENTITY_TYPES).await {
                Ok(entities) => {
                    profile.entities = entities
                        .into_iter()
                        .map(|e| Entity {
                            text: e.text,
                            label: e.label,
                        })
                        .collect();
                }
                Err(e) => {
                    warn!(error = %e, "entity extraction failed, continuing without entities");
                }
            }
        }

        profile
    }
}

/// Count keyword hits per category; first maximum in table order wins.
/// No hit at all falls back to `General`.
fn identify_category(lowered: &str) -> Category {
    let mut best = Category::General;
    let mut best_score = 0usize;

    for (category, keywords) in CATEGORY_KEYWORDS {
        let score = keyword_hits(lowered, keywords);
        if score > best_score {
            best = category;
            best_score = score;
        }
    }

    best
}

/// Keyword-derived track, before any claim-value override. Falls back to
/// multi-track when a complexity phrase is present, otherwise to the most
/// accessible track.
fn determine_track(lowered: &str) -> Track {
    let mut best: Option<Track> = None;
    let mut best_score = 0usize;

    for (track, keywords) in TRACK_KEYWORDS {
        let score = keyword_hits(lowered, keywords);
        if score > best_score {
            best = Some(track);
            best_score = score;
        }
    }

    if let Some(track) = best {
        return track;
    }

    if TRACK_COMPLEXITY_FALLBACK
        .iter()
        .any(|phrase| lowered.contains(phrase))
    {
        Track::MultiTrack
    } else {
        Track::SmallClaims
    }
}

/// First matching tier wins; tables list higher tiers first.
fn scan_tiers(lowered: &str, tiers: &[(Tier, &[&str])]) -> Tier {
    for (tier, keywords) in tiers {
        if keywords.iter().any(|phrase| lowered.contains(phrase)) {
            return *tier;
        }
    }
    Tier::Low
}

fn keyword_hits(lowered: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count()
}
