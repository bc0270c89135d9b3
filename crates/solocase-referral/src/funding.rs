//! Funding option eligibility ladder.
//!
//! Each threshold is independent: a claim can qualify for several options
//! at once. Values are in pounds, matching the analyzer's extracted
//! amounts.

use serde::{Deserialize, Serialize};

use solocase_core::defaults::{
    ATE_MIN_POUNDS, CFA_MIN_POUNDS, DBA_MIN_POUNDS, LEGAL_AID_MAX_POUNDS,
    THIRD_PARTY_FUNDING_MIN_POUNDS,
};
use solocase_core::Category;

/// One funding arrangement a claimant may be eligible for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingOption {
    pub kind: String,
    pub description: String,
    pub eligibility: String,
    pub cost: String,
}

/// Funding options available for a claim of the given value and category.
///
/// `claim_value` is the highest extracted amount in pounds, or 0.0 when
/// no amount was extracted.
pub fn funding_options(claim_value: f64, category: Category) -> Vec<FundingOption> {
    let mut options = Vec::new();

    // Civil legal aid survives only for housing-type matters at low value.
    if category == Category::PropertyDispute && claim_value < LEGAL_AID_MAX_POUNDS {
        options.push(FundingOption {
            kind: "Legal Aid".to_string(),
            description: "Limited legal aid may be available for certain housing and \
                          domestic violence cases"
                .to_string(),
            eligibility: "Means and merits tested".to_string(),
            cost: "Free if eligible".to_string(),
        });
    }

    if claim_value >= CFA_MIN_POUNDS {
        options.push(FundingOption {
            kind: "Conditional Fee Arrangement (CFA)".to_string(),
            description: "No win, no fee arrangement with success fee".to_string(),
            eligibility: "Cases with good prospects of success".to_string(),
            cost: "Success fee (typically 25-40% of damages) if you win".to_string(),
        });
    }

    if claim_value >= ATE_MIN_POUNDS {
        options.push(FundingOption {
            kind: "After the Event (ATE) Insurance".to_string(),
            description: "Insurance to cover opponent's costs if you lose".to_string(),
            eligibility: "Available for most civil claims".to_string(),
            cost: "Premium varies based on case value and risk".to_string(),
        });
    }

    if claim_value >= THIRD_PARTY_FUNDING_MIN_POUNDS {
        options.push(FundingOption {
            kind: "Third Party Litigation Funding".to_string(),
            description: "Commercial funding for high-value claims".to_string(),
            eligibility: "Strong cases with substantial damages".to_string(),
            cost: "Percentage of damages (typically 20-40%)".to_string(),
        });
    }

    if claim_value >= DBA_MIN_POUNDS {
        options.push(FundingOption {
            kind: "Damages Based Agreement (DBA)".to_string(),
            description: "Lawyer takes percentage of damages if successful".to_string(),
            eligibility: "Available for most civil claims".to_string(),
            cost: "Percentage of damages (max 25% for PI, 50% for other claims)".to_string(),
        });
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(claim_value: f64, category: Category) -> Vec<String> {
        funding_options(claim_value, category)
            .into_iter()
            .map(|o| o.kind)
            .collect()
    }

    #[test]
    fn test_no_value_no_options() {
        assert!(funding_options(0.0, Category::ContractDispute).is_empty());
    }

    #[test]
    fn test_cfa_threshold() {
        assert!(kinds(999.99, Category::General).is_empty());
        let options = kinds(1_000.0, Category::General);
        assert_eq!(options.len(), 1);
        assert!(options[0].contains("CFA"));
    }

    #[test]
    fn test_thresholds_are_additive() {
        let options = kinds(10_000.0, Category::ContractDispute);
        assert!(options.iter().any(|k| k.contains("CFA")));
        assert!(options.iter().any(|k| k.contains("ATE")));
        assert!(options.iter().any(|k| k.contains("DBA")));
        assert!(!options.iter().any(|k| k.contains("Third Party")));
    }

    #[test]
    fn test_third_party_at_fifty_thousand() {
        let options = kinds(50_000.0, Category::ContractDispute);
        assert!(options.iter().any(|k| k.contains("Third Party")));
        assert_eq!(options.len(), 4);
    }

    #[test]
    fn test_legal_aid_requires_housing_category_and_low_value() {
        let options = kinds(2_000.0, Category::PropertyDispute);
        assert!(options.iter().any(|k| k == "Legal Aid"));

        assert!(!kinds(2_000.0, Category::ContractDispute)
            .iter()
            .any(|k| k == "Legal Aid"));
        assert!(!kinds(5_000.0, Category::PropertyDispute)
            .iter()
            .any(|k| k == "Legal Aid"));
    }
}
