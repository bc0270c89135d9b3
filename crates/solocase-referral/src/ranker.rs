//! Referral candidate scoring and ranking.
//!
//! Candidates are pulled from the referral store (active only, value-range
//! filtered when a claim value is known), scored additively against the
//! profile, and the top three returned with their scores for transparency.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use solocase_core::candidates::{
    TAG_ALL_TRACKS, TAG_GENERAL_LITIGATION, TAG_INJUNCTIONS, TAG_URGENT_APPLICATIONS,
};
use solocase_core::defaults::{
    ALL_TRACKS_SCORE, GENERAL_LITIGATION_SCORE, PENCE_PER_POUND, REFERRAL_LIMIT,
    SPECIALTY_MATCH_SCORE, TRACK_MATCH_SCORE, URGENCY_BONUS,
};
use solocase_core::{Category, QueryProfile, ReferralCandidate, ReferralStore, Tier, Track};

use crate::advice::referral_advice;
use crate::funding::{funding_options, FundingOption};

/// A candidate together with its suitability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReferral {
    #[serde(flatten)]
    pub candidate: ReferralCandidate,
    pub score: i32,
}

/// Complete referral recommendation for a query profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralRecommendation {
    pub recommended: Vec<ScoredReferral>,
    pub funding_options: Vec<FundingOption>,
    pub advice: String,
    pub urgency: Tier,
}

/// Additive suitability score for one candidate.
///
/// Specialty match beats the general-litigation fallback; track match
/// beats the all-tracks fallback; the two high-urgency bonuses stack.
pub fn score_candidate(
    candidate: &ReferralCandidate,
    category: Category,
    track: Track,
    urgency: Tier,
) -> i32 {
    let mut score = 0;

    let has_specialty = |tag: &str| candidate.specialties.iter().any(|s| s == tag);
    let has_track = |tag: &str| candidate.track_experience.iter().any(|t| t == tag);

    if has_specialty(category.as_str()) {
        score += SPECIALTY_MATCH_SCORE;
    } else if has_specialty(TAG_GENERAL_LITIGATION) {
        score += GENERAL_LITIGATION_SCORE;
    }

    if has_track(track.as_str()) {
        score += TRACK_MATCH_SCORE;
    } else if has_track(TAG_ALL_TRACKS) {
        score += ALL_TRACKS_SCORE;
    }

    if urgency == Tier::High {
        if has_specialty(TAG_URGENT_APPLICATIONS) {
            score += URGENCY_BONUS;
        }
        if has_specialty(TAG_INJUNCTIONS) {
            score += URGENCY_BONUS;
        }
    }

    score
}

/// Ranks referral candidates against a query profile.
#[derive(Clone)]
pub struct ReferralRanker {
    store: Arc<dyn ReferralStore>,
}

impl ReferralRanker {
    pub fn new(store: Arc<dyn ReferralStore>) -> Self {
        Self { store }
    }

    /// Produce the full recommendation for a profile.
    ///
    /// Never fails: a store error degrades the recommended list to empty
    /// with a warning. Funding options and advice are pure functions of
    /// the profile and always present.
    pub async fn rank(&self, profile: &QueryProfile) -> ReferralRecommendation {
        let claim_value = profile.max_claim_value().unwrap_or(0.0);
        let claim_value_pence = profile
            .max_claim_value()
            .map(|pounds| (pounds * PENCE_PER_POUND) as i64);

        let recommended = match self.store.active_candidates(claim_value_pence).await {
            Ok(candidates) => {
                debug!(
                    candidate_count = candidates.len(),
                    category = %profile.category,
                    track = %profile.track,
                    "scoring referral candidates"
                );
                rank_candidates(candidates, profile)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "referral store query failed, returning no recommendations"
                );
                Vec::new()
            }
        };

        ReferralRecommendation {
            recommended,
            funding_options: funding_options(claim_value, profile.category),
            advice: referral_advice(
                profile.category,
                profile.track,
                profile.urgency,
                claim_value,
            ),
            urgency: profile.urgency,
        }
    }
}

/// Score, exclude zero-scorers, sort descending (stable, so equal scores
/// keep encounter order), and keep the top three.
fn rank_candidates(
    candidates: Vec<ReferralCandidate>,
    profile: &QueryProfile,
) -> Vec<ScoredReferral> {
    let mut scored: Vec<ScoredReferral> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let score = score_candidate(&candidate, profile.category, profile.track, profile.urgency);
            (score > 0).then_some(ScoredReferral { candidate, score })
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(REFERRAL_LIMIT);
    scored
}
