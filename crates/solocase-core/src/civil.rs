//! Civil-procedure utilities: court fees, limitation periods, currency
//! formatting, and case-citation handling.
//!
//! Pure functions over the profile types. Fee amounts follow the HMCTS
//! civil fee schedule for money claims; limitation periods follow the
//! Limitation Act 1980 defaults for each claim class.

use chrono::{DateTime, Months, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::profile::{Category, Track};

// =============================================================================
// COURT FEES
// =============================================================================

/// Court fees payable for issuing and hearing a money claim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtFees {
    pub issue_fee: f64,
    /// No fixed hearing fee is published for High Court claims.
    pub hearing_fee: Option<f64>,
}

impl CourtFees {
    pub fn total(&self) -> f64 {
        self.issue_fee + self.hearing_fee.unwrap_or(0.0)
    }
}

/// Calculate court fees for a claim value (pounds) on a given track.
pub fn court_fees(claim_value: f64, track: Track) -> CourtFees {
    let issue_fee = if claim_value <= 300.0 {
        35.0
    } else if claim_value <= 500.0 {
        50.0
    } else if claim_value <= 1_000.0 {
        70.0
    } else if claim_value <= 1_500.0 {
        80.0
    } else if claim_value <= 3_000.0 {
        115.0
    } else if claim_value <= 5_000.0 {
        205.0
    } else if claim_value <= 10_000.0 {
        455.0
    } else if claim_value <= 200_000.0 {
        claim_value * 0.045
    } else {
        // Fee is capped above £200,000.
        10_000.0
    };

    let hearing_fee = match track {
        Track::SmallClaims => Some(if claim_value <= 300.0 {
            25.0
        } else if claim_value <= 500.0 {
            55.0
        } else if claim_value <= 1_000.0 {
            80.0
        } else {
            120.0
        }),
        Track::FastTrack => Some(545.0),
        Track::MultiTrack => Some(1_090.0),
        Track::HighCourt => None,
    };

    CourtFees {
        issue_fee,
        hearing_fee,
    }
}

// =============================================================================
// LIMITATION PERIODS
// =============================================================================

/// A limitation period under the Limitation Act 1980.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitationPeriod {
    pub years: u32,
    pub description: &'static str,
}

/// Limitation state relative to a known incident date.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitationStatus {
    pub period: LimitationPeriod,
    pub limitation_date: DateTime<Utc>,
    pub days_remaining: i64,
    pub expired: bool,
}

/// Default limitation period for a legal category.
pub fn limitation_period(category: Category) -> LimitationPeriod {
    match category {
        Category::ContractDispute | Category::DebtRecovery | Category::ConsumerDispute => {
            LimitationPeriod {
                years: 6,
                description: "Six years from breach of contract",
            }
        }
        Category::PersonalInjury => LimitationPeriod {
            years: 3,
            description: "Three years from injury or date of knowledge",
        },
        Category::ProfessionalNegligence => LimitationPeriod {
            years: 6,
            description: "Six years from breach of duty",
        },
        Category::Employment | Category::PropertyDispute | Category::General => LimitationPeriod {
            years: 6,
            description: "Six years (general limitation period)",
        },
    }
}

/// Compute the limitation deadline for an incident, relative to `now`.
pub fn limitation_status(
    category: Category,
    incident_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> LimitationStatus {
    let period = limitation_period(category);
    let limitation_date = incident_date
        .checked_add_months(Months::new(period.years * 12))
        .unwrap_or(incident_date);
    let days_remaining = (limitation_date - now).num_days();

    LimitationStatus {
        period,
        limitation_date,
        days_remaining: days_remaining.max(0),
        expired: days_remaining <= 0,
    }
}

// =============================================================================
// CURRENCY
// =============================================================================

/// Format a pound amount compactly: `£1.5M`, `£12.5K`, `£250.00`.
pub fn format_currency(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("£{:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("£{:.1}K", amount / 1_000.0)
    } else {
        format!("£{:.2}", amount)
    }
}

// =============================================================================
// CITATIONS
// =============================================================================

static CITATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // [2021] EWCA Civ 123
        r"\[(\d{4})\]\s*([A-Z]+(?:\s+[A-Za-z]+)?)\s*(\d+)",
        // (2021) 1 WLR 123
        r"\((\d{4})\)\s*(\d+)\s*([A-Z]+)\s*(\d+)",
        // 2021 UKSC 1
        r"(\d{4})\s*([A-Z]+)\s*(\d+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("citation pattern must compile"))
    .collect()
});

/// Extract the first UK case citation found in text, if any.
pub fn extract_case_reference(text: &str) -> Option<String> {
    CITATION_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().to_string())
}

/// Format a case citation, prefixing the year when the citation itself
/// does not carry it.
pub fn format_citation(case_name: &str, citation: &str, year: Option<i32>) -> String {
    match year {
        Some(y) if !citation.contains(&y.to_string()) => {
            format!("{} ({}) {}", case_name, y, citation)
        }
        _ => format!("{} {}", case_name, citation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_issue_fee_bands() {
        assert_eq!(court_fees(250.0, Track::SmallClaims).issue_fee, 35.0);
        assert_eq!(court_fees(500.0, Track::SmallClaims).issue_fee, 50.0);
        assert_eq!(court_fees(900.0, Track::SmallClaims).issue_fee, 70.0);
        assert_eq!(court_fees(1_200.0, Track::SmallClaims).issue_fee, 80.0);
        assert_eq!(court_fees(2_500.0, Track::SmallClaims).issue_fee, 115.0);
        assert_eq!(court_fees(4_000.0, Track::SmallClaims).issue_fee, 205.0);
        assert_eq!(court_fees(9_999.0, Track::SmallClaims).issue_fee, 455.0);
        // Percentage band
        assert!((court_fees(20_000.0, Track::FastTrack).issue_fee - 900.0).abs() < 1e-9);
        // Capped
        assert_eq!(court_fees(500_000.0, Track::HighCourt).issue_fee, 10_000.0);
    }

    #[test]
    fn test_hearing_fee_by_track() {
        assert_eq!(
            court_fees(250.0, Track::SmallClaims).hearing_fee,
            Some(25.0)
        );
        assert_eq!(
            court_fees(5_000.0, Track::SmallClaims).hearing_fee,
            Some(120.0)
        );
        assert_eq!(court_fees(15_000.0, Track::FastTrack).hearing_fee, Some(545.0));
        assert_eq!(
            court_fees(50_000.0, Track::MultiTrack).hearing_fee,
            Some(1_090.0)
        );
        assert_eq!(court_fees(200_000.0, Track::HighCourt).hearing_fee, None);
    }

    #[test]
    fn test_fees_total() {
        let fees = court_fees(15_000.0, Track::FastTrack);
        assert!((fees.total() - (675.0 + 545.0)).abs() < 1e-9);
    }

    #[test]
    fn test_limitation_periods() {
        assert_eq!(limitation_period(Category::ContractDispute).years, 6);
        assert_eq!(limitation_period(Category::PersonalInjury).years, 3);
        assert_eq!(limitation_period(Category::ProfessionalNegligence).years, 6);
        assert_eq!(limitation_period(Category::General).years, 6);
    }

    #[test]
    fn test_limitation_status_open_and_expired() {
        let incident = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();

        let status = limitation_status(Category::PersonalInjury, incident, now);
        assert!(!status.expired);
        assert!(status.days_remaining > 700);

        let late = Utc.with_ymd_and_hms(2027, 2, 1, 0, 0, 0).unwrap();
        let status = limitation_status(Category::PersonalInjury, incident, late);
        assert!(status.expired);
        assert_eq!(status.days_remaining, 0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2_500_000.0), "£2.5M");
        assert_eq!(format_currency(12_500.0), "£12.5K");
        assert_eq!(format_currency(250.0), "£250.00");
    }

    #[test]
    fn test_extract_case_reference() {
        assert_eq!(
            extract_case_reference("see [2021] EWCA Civ 123 at [40]"),
            Some("[2021] EWCA Civ 123".to_string())
        );
        assert_eq!(
            extract_case_reference("reported at (2021) 1 WLR 123"),
            Some("(2021) 1 WLR 123".to_string())
        );
        assert_eq!(extract_case_reference("no citation here"), None);
    }

    #[test]
    fn test_format_citation() {
        assert_eq!(
            format_citation("Hadley v Baxendale", "9 Exch 341", Some(1854)),
            "Hadley v Baxendale (1854) 9 Exch 341"
        );
        // Year already present in the citation
        assert_eq!(
            format_citation("Jarvis v Swans Tours Ltd", "[1973] QB 233", Some(1973)),
            "Jarvis v Swans Tours Ltd [1973] QB 233"
        );
    }
}
