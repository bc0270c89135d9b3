//! System prompt construction for the generation collaborator.

use std::fmt::Write;

use solocase_core::QueryProfile;
use solocase_kb::RetrievedKnowledge;

/// Base system prompt for UK civil litigation guidance.
pub const SYSTEM_PROMPT: &str = "\
You are Solo Case, a specialized UK civil litigation assistant for money claims \
up to £100,000. You provide general legal information only - NOT legal advice.

JURISDICTION: England and Wales only
SPECIALIZATION: Civil litigation, money claims, contract disputes, debt recovery, \
personal injury, employment disputes, property disputes, consumer issues, \
professional negligence

TRACK ALLOCATION:
- Small Claims Track: Up to £10,000 (simplified procedures, no costs awards typically)
- Fast Track: £10,000-£25,000 (streamlined procedures, fixed costs)
- Multi-Track: £25,000-£100,000 (full case management, detailed procedures)

RESPONSE GUIDELINES:
1. Always include appropriate disclaimers about not providing legal advice
2. Provide accurate, current information about UK civil litigation procedures
3. Reference relevant legislation, court rules, and case law where appropriate
4. Suggest track allocation based on claim value and complexity
5. Recommend when professional legal advice is essential
6. Be clear about limitation periods and procedural deadlines
7. Explain court fees and potential costs consequences

TONE: Professional, accessible, helpful but cautious. Use simple language while \
maintaining legal accuracy.

ALWAYS DISCLAIM: Emphasize this is general information only and specific legal \
advice requires consultation with a qualified solicitor.";

/// Build the full system prompt: base guidance, the analyzed profile as
/// contextual hints, and any retrieved reference material.
pub fn build_system_prompt(profile: &QueryProfile, knowledge: &RetrievedKnowledge) -> String {
    let mut prompt = String::from(SYSTEM_PROMPT);

    let _ = write!(
        prompt,
        "\n\nQUERY ANALYSIS (contextual hints, derived automatically):\n\
         - Category: {}\n- Likely track: {}\n- Urgency: {}",
        profile.category, profile.track, profile.urgency
    );
    if let Some(value) = profile.max_claim_value() {
        let _ = write!(prompt, "\n- Highest amount mentioned: £{:.2}", value);
    }

    if !knowledge.is_empty() {
        prompt.push_str("\n\nRELEVANT REFERENCE MATERIAL:");
        for case in &knowledge.cases {
            let _ = write!(
                prompt,
                "\n- Case: {} {} — {}",
                case.case_name, case.citation, case.excerpt
            );
        }
        for entry in &knowledge.procedures {
            let _ = write!(prompt, "\n- Procedure: {} — {}", entry.title, entry.excerpt);
        }
        for entry in &knowledge.statutes {
            let _ = write!(prompt, "\n- Statute: {} — {}", entry.title, entry.excerpt);
        }
    }

    prompt
}
