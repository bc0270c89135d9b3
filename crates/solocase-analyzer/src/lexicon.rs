//! Keyword lexicons for profile scoring.
//!
//! Each table maps a profile dimension to indicator phrases checked by
//! substring containment against the lowercased query. Tables are ordered:
//! category and track scoring resolve ties to the first-listed entry, so
//! reordering a table is a behavior change.

use solocase_core::{Category, Tier, Track};

/// Category indicator keywords, in tie-break order ([`Category::SCORED`]).
pub const CATEGORY_KEYWORDS: [(Category, &[&str]); 7] = [
    (
        Category::ContractDispute,
        &[
            "contract", "breach", "agreement", "terms", "conditions", "warranty", "guarantee",
            "supplier", "purchase", "sale",
        ],
    ),
    (
        Category::DebtRecovery,
        &[
            "debt", "owed", "payment", "invoice", "outstanding", "money", "loan", "credit",
            "arrears", "default",
        ],
    ),
    (
        Category::PersonalInjury,
        &[
            "injury", "accident", "compensation", "damages", "hurt", "medical", "hospital",
            "pain", "suffering", "negligence",
        ],
    ),
    (
        Category::Employment,
        &[
            "employment", "dismissal", "redundancy", "discrimination", "harassment", "wages",
            "salary", "workplace", "employer",
        ],
    ),
    (
        Category::PropertyDispute,
        &[
            "property", "landlord", "tenant", "deposit", "rent", "lease", "eviction", "repairs",
            "housing", "possession",
        ],
    ),
    (
        Category::ConsumerDispute,
        &[
            "consumer", "goods", "services", "faulty", "refund", "return", "warranty", "shop",
            "purchase", "defective",
        ],
    ),
    (
        Category::ProfessionalNegligence,
        &[
            "solicitor", "accountant", "surveyor", "negligence", "professional", "malpractice",
            "advice", "service",
        ],
    ),
];

/// Track indicator phrases, in tie-break order.
pub const TRACK_KEYWORDS: [(Track, &[&str]); 3] = [
    (
        Track::SmallClaims,
        &[
            "small claim", "under £10,000", "simple", "consumer", "deposit", "refund", "minor",
        ],
    ),
    (
        Track::FastTrack,
        &[
            "fast track", "£10,000", "£25,000", "standard", "road traffic",
            "employment tribunal",
        ],
    ),
    (
        Track::MultiTrack,
        &[
            "multi track", "complex", "commercial", "substantial", "over £25,000",
            "case management", "expert witness",
        ],
    ),
];

/// Phrases that push an otherwise unmatched track to multi-track.
pub const TRACK_COMPLEXITY_FALLBACK: &[&str] = &[
    "complex", "multiple parties", "expert", "commercial", "substantial", "significant",
];

/// Two-tier urgency indicators: the high tier dominates the medium tier.
pub const URGENCY_TIERS: [(Tier, &[&str]); 2] = [
    (
        Tier::High,
        &[
            "injunction", "freezing order", "search order", "arrest", "bailiff",
            "eviction notice",
        ],
    ),
    (
        Tier::Medium,
        &[
            "urgent", "emergency", "immediate", "asap", "court date", "deadline", "tomorrow",
            "today", "served", "claim form",
        ],
    ),
];

/// Two-tier complexity indicators: the high tier dominates the medium tier.
pub const COMPLEXITY_TIERS: [(Tier, &[&str]); 2] = [
    (
        Tier::High,
        &[
            "multiple parties", "cross-claim", "counterclaim", "expert witness", "disclosure",
            "international", "regulatory", "appeal", "judicial review",
        ],
    ),
    (
        Tier::Medium,
        &[
            "contract", "negligence", "employment", "commercial", "professional", "substantial",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_matches_scored_order() {
        // The lexicon order is the tie-break contract; keep it in lock-step
        // with Category::SCORED.
        let table_order: Vec<Category> = CATEGORY_KEYWORDS.iter().map(|(c, _)| *c).collect();
        assert_eq!(table_order, Category::SCORED.to_vec());
    }

    #[test]
    fn test_keyword_lists_are_lowercase() {
        for (_, keywords) in CATEGORY_KEYWORDS {
            for keyword in keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
        for (_, keywords) in TRACK_KEYWORDS {
            for keyword in keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_tier_tables_order_high_first() {
        assert_eq!(URGENCY_TIERS[0].0, solocase_core::Tier::High);
        assert_eq!(COMPLEXITY_TIERS[0].0, solocase_core::Tier::High);
    }
}
