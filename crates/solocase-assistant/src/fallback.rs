//! Static response bodies used when generation is unavailable.

/// Standard disclaimer appended to every response body.
pub const DISCLAIMER: &str = "\
**Important Legal Disclaimer:**

This assistant provides general legal information only and does not constitute \
legal advice. The information provided:

- Is for guidance purposes only
- Does not create a solicitor-client relationship
- Should not be relied upon for legal decisions
- May not reflect the most current legal developments
- Is limited to England and Wales law

For specific legal advice about your situation, please consult a qualified \
solicitor. Time limits and court procedures are strict - seek professional \
advice promptly.";

/// Apology body for transient generation failures.
pub const TRANSIENT_APOLOGY: &str = "\
I apologize, but I'm currently unable to process your legal query due to a \
technical issue. Please try again in a moment. If the problem persists, please \
contact support.";

/// Refusal body for queries flagged as inappropriate.
pub const INAPPROPRIATE_REFUSAL: &str = "\
I can only help with civil legal matters such as money claims, contract \
disputes, and debt recovery. I cannot assist with that request. If you are in \
immediate danger, contact the emergency services on 999.";

/// Static guidance body used when the generation quota is exhausted.
///
/// Covers the core track thresholds and limitation periods so the user
/// still gets something actionable without a model in the loop.
pub fn quota_fallback(query: &str) -> String {
    format!(
        "**UK Civil Litigation Guidance**\n\n\
         I notice you're asking about: \"{}\"\n\n\
         **Important:** AI-powered responses are temporarily unavailable. \
         However, I can still offer these legal resources:\n\n\
         **For Contract Disputes:**\n\
         - Limitation period: Generally 6 years from breach for simple contracts\n\
         - Small Claims Track: Up to £10,000\n\
         - Fast Track: £10,000 - £25,000\n\
         - Multi-Track: £25,000 - £100,000\n\n\
         **For Personal Injury Claims:**\n\
         - Limitation period: Generally 3 years from date of knowledge\n\
         - Claims portal available for RTA claims under £25,000\n\n\
         **For Debt Recovery:**\n\
         - No limitation period if debt acknowledged\n\
         - Money Claims Online available for straightforward claims\n\n\
         **Next Steps:**\n\
         1. Consider the urgency of your matter - some legal deadlines are strict\n\
         2. For immediate assistance, consult a qualified solicitor\n\n\
         **Key Legal Resources:**\n\
         - HM Courts & Tribunals Service: gov.uk/courts-tribunals\n\
         - Civil Procedure Rules: justice.gov.uk\n\
         - Money Claims Online: moneyclaim.gov.uk\n\
         - Free legal advice: citizensadvice.org.uk",
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_fallback_echoes_query() {
        let body = quota_fallback("breach of contract for £15,000");
        assert!(body.contains("breach of contract for £15,000"));
        assert!(body.contains("Small Claims Track: Up to £10,000"));
    }

    #[test]
    fn test_disclaimer_mentions_jurisdiction() {
        assert!(DISCLAIMER.contains("England and Wales"));
    }
}
