//! The structured case profile derived from a free-text query.
//!
//! A [`QueryProfile`] is ephemeral: built per request by the analyzer,
//! consumed by the retriever and referral ranker, then discarded. Every
//! primary field always carries a value; ambiguous input resolves to the
//! documented defaults rather than an error.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Legal category of a civil-litigation query.
///
/// Category selection scores keyword hits per category and takes the first
/// maximum in **declaration order** ([`Category::SCORED`]), so ties resolve
/// to the earlier-declared category. That order is part of the contract and
/// pinned by analyzer tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ContractDispute,
    DebtRecovery,
    PersonalInjury,
    Employment,
    PropertyDispute,
    ConsumerDispute,
    ProfessionalNegligence,
    /// Fallback when no category keyword scores above zero.
    #[default]
    General,
}

impl Category {
    /// The categories that participate in keyword scoring, in tie-break
    /// order. `General` is the fallback, never scored.
    pub const SCORED: [Category; 7] = [
        Category::ContractDispute,
        Category::DebtRecovery,
        Category::PersonalInjury,
        Category::Employment,
        Category::PropertyDispute,
        Category::ConsumerDispute,
        Category::ProfessionalNegligence,
    ];

    /// Snake-case name, matching the serde representation and the tag
    /// vocabulary used in referral candidate records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ContractDispute => "contract_dispute",
            Category::DebtRecovery => "debt_recovery",
            Category::PersonalInjury => "personal_injury",
            Category::Employment => "employment",
            Category::PropertyDispute => "property_dispute",
            Category::ConsumerDispute => "consumer_dispute",
            Category::ProfessionalNegligence => "professional_negligence",
            Category::General => "general",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "contract_dispute" => Ok(Category::ContractDispute),
            "debt_recovery" => Ok(Category::DebtRecovery),
            "personal_injury" => Ok(Category::PersonalInjury),
            "employment" => Ok(Category::Employment),
            "property_dispute" => Ok(Category::PropertyDispute),
            "consumer_dispute" => Ok(Category::ConsumerDispute),
            "professional_negligence" => Ok(Category::ProfessionalNegligence),
            "general" => Ok(Category::General),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

/// UK civil-procedure track governing applicable rules and cost regimes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    /// Claims up to £10,000. The default when nothing signals otherwise;
    /// the most accessible track.
    #[default]
    SmallClaims,
    /// Claims of £10,000 to £25,000.
    FastTrack,
    /// Claims of £25,000 to £100,000.
    MultiTrack,
    /// Claims above £100,000.
    HighCourt,
}

impl Track {
    /// Allocate a track from a claim value in pounds.
    ///
    /// Band boundaries are inclusive on the lower track: exactly £10,000 is
    /// still small claims, £10,000.01 is fast track.
    pub fn for_value(pounds: f64) -> Track {
        if pounds <= defaults::SMALL_CLAIMS_MAX_POUNDS {
            Track::SmallClaims
        } else if pounds <= defaults::FAST_TRACK_MAX_POUNDS {
            Track::FastTrack
        } else if pounds <= defaults::MULTI_TRACK_MAX_POUNDS {
            Track::MultiTrack
        } else {
            Track::HighCourt
        }
    }

    /// Snake-case name, matching the serde representation and the tag
    /// vocabulary used in referral candidate records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::SmallClaims => "small_claims",
            Track::FastTrack => "fast_track",
            Track::MultiTrack => "multi_track",
            Track::HighCourt => "high_court",
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Track {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "small_claims" => Ok(Track::SmallClaims),
            "fast_track" => Ok(Track::FastTrack),
            "multi_track" => Ok(Track::MultiTrack),
            "high_court" => Ok(Track::HighCourt),
            _ => Err(format!("Invalid track: {}", s)),
        }
    }
}

/// Three-level tier used for both urgency and complexity.
///
/// Ordered so `High > Medium > Low`; the analyzer's two-tier scans let the
/// higher tier dominate when both match.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    #[default]
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named entity extracted from the query by the NER collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// The entity text as it appears in the query.
    pub text: String,
    /// The entity type label (e.g., "organization", "person", "money").
    pub label: String,
}

/// Structured summary of a natural-language legal query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryProfile {
    pub category: Category,
    pub track: Track,
    /// Monetary amounts in pounds, in order of first appearance per
    /// extraction pattern. Overlapping patterns may yield duplicates; the
    /// sequence is deliberately not deduplicated.
    pub money_values: Vec<f64>,
    pub urgency: Tier,
    pub complexity: Tier,
    /// Empty when the NER collaborator is unavailable.
    pub entities: Vec<Entity>,
}

impl QueryProfile {
    /// Highest extracted claim value in pounds, if any value was found.
    pub fn max_claim_value(&self) -> Option<f64> {
        self.money_values
            .iter()
            .copied()
            .fold(None, |max, v| match max {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_matches_serde() {
        for category in Category::SCORED {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
        assert_eq!(Category::General.to_string(), "general");
    }

    #[test]
    fn test_category_from_str_round_trip() {
        for category in Category::SCORED.into_iter().chain([Category::General]) {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("commercial".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_default_is_general() {
        assert_eq!(Category::default(), Category::General);
    }

    #[test]
    fn test_track_value_bands() {
        assert_eq!(Track::for_value(0.0), Track::SmallClaims);
        assert_eq!(Track::for_value(10_000.0), Track::SmallClaims);
        assert_eq!(Track::for_value(10_000.01), Track::FastTrack);
        assert_eq!(Track::for_value(25_000.0), Track::FastTrack);
        assert_eq!(Track::for_value(25_000.01), Track::MultiTrack);
        assert_eq!(Track::for_value(100_000.0), Track::MultiTrack);
        assert_eq!(Track::for_value(100_000.01), Track::HighCourt);
    }

    #[test]
    fn test_track_from_str() {
        assert_eq!("fast_track".parse::<Track>().unwrap(), Track::FastTrack);
        assert!("county_court".parse::<Track>().is_err());
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::High > Tier::Medium);
        assert!(Tier::Medium > Tier::Low);
        assert_eq!(Tier::default(), Tier::Low);
    }

    #[test]
    fn test_default_profile_is_fully_populated() {
        let profile = QueryProfile::default();
        assert_eq!(profile.category, Category::General);
        assert_eq!(profile.track, Track::SmallClaims);
        assert_eq!(profile.urgency, Tier::Low);
        assert_eq!(profile.complexity, Tier::Low);
        assert!(profile.money_values.is_empty());
        assert!(profile.entities.is_empty());
    }

    #[test]
    fn test_max_claim_value() {
        let mut profile = QueryProfile::default();
        assert_eq!(profile.max_claim_value(), None);

        profile.money_values = vec![500.0, 15_000.0, 1_200.0];
        assert_eq!(profile.max_claim_value(), Some(15_000.0));
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let profile = QueryProfile {
            category: Category::DebtRecovery,
            track: Track::FastTrack,
            money_values: vec![12_000.0],
            urgency: Tier::Medium,
            complexity: Tier::Low,
            entities: vec![Entity {
                text: "Acme Ltd".to_string(),
                label: "organization".to_string(),
            }],
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"debt_recovery\""));
        assert!(json.contains("\"fast_track\""));
        let back: QueryProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
