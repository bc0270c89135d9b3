//! Monetary value extraction.
//!
//! Runs an ordered list of patterns over the original-case query text
//! (currency symbols survive lowercasing, but the pattern order is still a
//! contract: all matches of one pattern are collected before the next).
//! A token can match more than one pattern — "£15k" yields both 15 and
//! 15,000 — and the resulting sequence is deliberately not deduplicated;
//! consumers only take the maximum.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

struct MoneyPattern {
    regex: Regex,
    multiplier: f64,
}

static MONEY_PATTERNS: Lazy<Vec<MoneyPattern>> = Lazy::new(|| {
    [
        // £1,250 or £1,250.50
        (r"£(\d{1,3}(?:,\d{3})*(?:\.\d{2})?)", 1.0),
        // 1,250 pounds
        (r"(?i)(\d{1,3}(?:,\d{3})*(?:\.\d{2})?) pounds?", 1.0),
        // 15k
        (r"(?i)\b(\d+)k\b", 1_000.0),
        // 2 thousand
        (r"(?i)(\d+) thousand", 1_000.0),
    ]
    .iter()
    .map(|(pattern, multiplier)| MoneyPattern {
        regex: Regex::new(pattern).expect("money pattern must compile"),
        multiplier: *multiplier,
    })
    .collect()
});

/// Extract monetary values in pounds from the query text.
///
/// Values appear in pattern order, then in order of appearance within each
/// pattern. Captures that fail numeric parsing are silently skipped.
pub fn extract_money_values(text: &str) -> Vec<f64> {
    let mut values = Vec::new();

    for pattern in MONEY_PATTERNS.iter() {
        for capture in pattern.regex.captures_iter(text) {
            let Some(group) = capture.get(1) else {
                continue;
            };
            let cleaned = group.as_str().replace(',', "");
            match cleaned.parse::<f64>() {
                Ok(value) => {
                    trace!(raw = group.as_str(), value, "extracted monetary value");
                    values.push(value * pattern.multiplier);
                }
                Err(_) => continue,
            }
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_prefix() {
        assert_eq!(extract_money_values("I am owed £1,250"), vec![1_250.0]);
    }

    #[test]
    fn test_currency_with_pence() {
        assert_eq!(extract_money_values("a bill of £1,250.75"), vec![1_250.75]);
    }

    #[test]
    fn test_pounds_suffix() {
        assert_eq!(extract_money_values("about 500 pounds"), vec![500.0]);
        assert_eq!(extract_money_values("exactly 1 pound"), vec![1.0]);
    }

    #[test]
    fn test_k_shorthand() {
        assert_eq!(extract_money_values("they owe me 15k"), vec![15_000.0]);
    }

    #[test]
    fn test_thousand_suffix() {
        assert_eq!(extract_money_values("roughly 2 thousand"), vec![2_000.0]);
    }

    #[test]
    fn test_multiple_values_in_order() {
        assert_eq!(
            extract_money_values("claims of £10,000 and £5,000"),
            vec![10_000.0, 5_000.0]
        );
    }

    #[test]
    fn test_overlapping_patterns_not_deduplicated() {
        // £15k matches the currency pattern (15) and the shorthand (15000).
        let values = extract_money_values("a claim worth £15k");
        assert!(values.contains(&15.0));
        assert!(values.contains(&15_000.0));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_grouped_number_not_misread_as_shorthand() {
        // The comma-grouped digits of £10,000 must not also match "\d+k".
        assert_eq!(extract_money_values("£10,000"), vec![10_000.0]);
    }

    #[test]
    fn test_no_values() {
        assert!(extract_money_values("no money mentioned here").is_empty());
        assert!(extract_money_values("").is_empty());
    }
}
