//! Solicitor referral candidate records.
//!
//! Candidates are read-only reference data at query time. Specialty and
//! track-experience tags are free-form strings drawn from a documented
//! vocabulary: the snake-case category and track names plus the wildcard
//! tags below. Tags outside the vocabulary simply never match during
//! scoring; they do not fail the record.

use serde::{Deserialize, Serialize};

/// Specialty tag for a firm that takes general civil work; scores as a
/// weaker match than an exact category specialty.
pub const TAG_GENERAL_LITIGATION: &str = "general_litigation";

/// Track-experience tag for firms covering every track; scores as a weaker
/// match than direct experience on the allocated track.
pub const TAG_ALL_TRACKS: &str = "all_tracks";

/// Specialty tag attracting an urgency bonus for high-urgency queries.
pub const TAG_URGENT_APPLICATIONS: &str = "urgent_applications";

/// Specialty tag attracting an independent urgency bonus; stacks with
/// [`TAG_URGENT_APPLICATIONS`].
pub const TAG_INJUNCTIONS: &str = "injunctions";

/// A professional-service record eligible for referral ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferralCandidate {
    pub firm_name: String,
    pub contact_name: String,
    pub location: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub website: String,
    /// Category-style specialty tags plus wildcard tags.
    pub specialties: Vec<String>,
    /// Track names plus the `all_tracks` wildcard.
    pub track_experience: Vec<String>,
    /// Lower bound of accepted claim values, in pence.
    pub min_claim_value_pence: i64,
    /// Upper bound of accepted claim values, in pence.
    pub max_claim_value_pence: i64,
    /// Funding arrangements the firm offers, e.g. "CFA", "ATE".
    pub funding_options: Vec<String>,
    /// Inactive candidates are excluded unconditionally.
    pub active: bool,
}

impl ReferralCandidate {
    /// Whether the candidate's value range contains a claim value in pence.
    pub fn accepts_value(&self, claim_value_pence: i64) -> bool {
        self.min_claim_value_pence <= claim_value_pence
            && claim_value_pence <= self.max_claim_value_pence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReferralCandidate {
        ReferralCandidate {
            firm_name: "City Commercial Law LLP".to_string(),
            contact_name: "Sarah Johnson".to_string(),
            location: "London".to_string(),
            contact_email: "sarah.johnson@citycommercial.co.uk".to_string(),
            contact_phone: "020 7123 4567".to_string(),
            website: "https://www.citycommercial.co.uk".to_string(),
            specialties: vec![
                "contract_dispute".to_string(),
                "debt_recovery".to_string(),
            ],
            track_experience: vec!["fast_track".to_string(), "multi_track".to_string()],
            min_claim_value_pence: 1_000_000,
            max_claim_value_pence: 10_000_000,
            funding_options: vec!["CFA".to_string(), "ATE".to_string()],
            active: true,
        }
    }

    #[test]
    fn test_accepts_value_inclusive_bounds() {
        let candidate = sample();
        assert!(candidate.accepts_value(1_000_000));
        assert!(candidate.accepts_value(5_000_000));
        assert!(candidate.accepts_value(10_000_000));
        assert!(!candidate.accepts_value(999_999));
        assert!(!candidate.accepts_value(10_000_001));
    }

    #[test]
    fn test_candidate_round_trip() {
        let candidate = sample();
        let json = serde_json::to_string(&candidate).unwrap();
        let back: ReferralCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, candidate);
    }

    #[test]
    fn test_candidate_rejects_unknown_fields() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["sra_number"] = serde_json::json!("123456");
        assert!(serde_json::from_value::<ReferralCandidate>(value).is_err());
    }
}
