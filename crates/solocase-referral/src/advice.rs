//! Deterministic referral advice templates.
//!
//! Advice is a pure function of the profile: fixed fragments selected by
//! urgency tier, track tier, value tier, and category, joined with
//! spaces. No randomness, fully reproducible in tests.

use solocase_core::{Category, Tier, Track};

pub fn referral_advice(
    category: Category,
    track: Track,
    urgency: Tier,
    claim_value: f64,
) -> String {
    let mut parts = Vec::new();

    parts.push(match urgency {
        Tier::High => {
            "**Urgent Legal Advice Required**: Based on your query, you should seek \
             immediate legal advice from a qualified solicitor."
        }
        Tier::Medium => {
            "**Timely Legal Advice Recommended**: Consider seeking legal advice soon \
             to protect your legal position."
        }
        Tier::Low => {
            "**Consider Professional Advice**: While not urgent, professional legal \
             advice could be beneficial for your situation."
        }
    });

    parts.push(match track {
        Track::MultiTrack | Track::HighCourt => {
            "Given the complexity and value of your case, professional representation \
             is strongly recommended."
        }
        Track::FastTrack => {
            "For fast track claims, legal representation can help navigate the \
             procedures and maximize your chances of success."
        }
        Track::SmallClaims => {
            "While small claims are designed for litigants in person, legal advice \
             can still be valuable for strategy and preparation."
        }
    });

    if claim_value >= 25_000.0 {
        parts.push(
            "The substantial value of your claim justifies the cost of professional \
             legal representation.",
        );
    } else if claim_value >= 10_000.0 {
        parts.push(
            "The value of your claim supports considering professional legal \
             assistance, particularly with funding arrangements.",
        );
    }

    match category {
        Category::ProfessionalNegligence => {
            parts.push(
                "Professional negligence claims require specialist expertise and \
                 detailed evidence preparation.",
            );
        }
        Category::Employment => {
            parts.push(
                "Employment disputes have specific procedures and time limits that \
                 require careful attention.",
            );
        }
        Category::ContractDispute => {
            parts.push(
                "Contract disputes often involve complex legal and factual issues \
                 requiring specialist advice.",
            );
        }
        _ => {}
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advice_is_deterministic() {
        let a = referral_advice(Category::Employment, Track::FastTrack, Tier::Medium, 15_000.0);
        let b = referral_advice(Category::Employment, Track::FastTrack, Tier::Medium, 15_000.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_high_urgency_fragment() {
        let advice = referral_advice(Category::General, Track::SmallClaims, Tier::High, 0.0);
        assert!(advice.contains("Urgent Legal Advice Required"));
    }

    #[test]
    fn test_value_tiers_are_exclusive() {
        let advice = referral_advice(Category::General, Track::FastTrack, Tier::Low, 15_000.0);
        assert!(advice.contains("funding arrangements"));
        assert!(!advice.contains("substantial value"));

        let advice = referral_advice(Category::General, Track::MultiTrack, Tier::Low, 30_000.0);
        assert!(advice.contains("substantial value"));
        assert!(!advice.contains("funding arrangements"));
    }

    #[test]
    fn test_category_fragments() {
        let advice = referral_advice(
            Category::ProfessionalNegligence,
            Track::MultiTrack,
            Tier::Low,
            0.0,
        );
        assert!(advice.contains("specialist expertise"));

        let advice = referral_advice(Category::Employment, Track::FastTrack, Tier::Low, 0.0);
        assert!(advice.contains("time limits"));

        let advice = referral_advice(Category::DebtRecovery, Track::SmallClaims, Tier::Low, 0.0);
        assert!(!advice.contains("specialist expertise"));
    }

    #[test]
    fn test_high_court_uses_complex_track_fragment() {
        let advice = referral_advice(Category::General, Track::HighCourt, Tier::Low, 0.0);
        assert!(advice.contains("professional representation is strongly recommended"));
    }
}
