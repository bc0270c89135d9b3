//! Sample reference data for tests and the demo binary.
//!
//! A small but representative slice of the production knowledge base:
//! three case precedents, three procedural rules, three statutes, and
//! three referral firms.

use solocase_core::{CaseRecord, KnowledgeEntry, KnowledgeKind, ReferralCandidate, Track};

pub fn sample_cases() -> Vec<CaseRecord> {
    vec![
        CaseRecord {
            case_name: "Dunlop Pneumatic Tyre Co Ltd v New Garage and Motor Co Ltd".to_string(),
            citation: "[1915] AC 79".to_string(),
            court: "House of Lords".to_string(),
            year: 1915,
            track: Track::MultiTrack,
            claim_value_pence: 5_000_000,
            summary: "Landmark case establishing the difference between penalty clauses and \
                      liquidated damages in contract law."
                .to_string(),
            principles: "Penalty clauses are unenforceable if they are disproportionate to the \
                         actual loss. Liquidated damages must be a genuine pre-estimate of loss."
                .to_string(),
            url: "https://www.bailii.org/uk/cases/UKHL/1915/1.html".to_string(),
        },
        CaseRecord {
            case_name: "Hadley v Baxendale".to_string(),
            citation: "(1854) 9 Exch 341".to_string(),
            court: "Court of Exchequer".to_string(),
            year: 1854,
            track: Track::FastTrack,
            claim_value_pence: 2_500_000,
            summary: "Established the test for remoteness of damage in contract law.".to_string(),
            principles: "Damages for breach of contract are limited to losses that arise \
                         naturally from the breach or were reasonably foreseeable."
                .to_string(),
            url: "https://www.bailii.org/ew/cases/EWHC/Exch/1854/J70.html".to_string(),
        },
        CaseRecord {
            case_name: "Jarvis v Swans Tours Ltd".to_string(),
            citation: "[1973] QB 233".to_string(),
            court: "Court of Appeal".to_string(),
            year: 1973,
            track: Track::SmallClaims,
            claim_value_pence: 31_050,
            summary: "Established that damages for disappointment and distress can be recovered \
                      in consumer contracts."
                .to_string(),
            principles: "Non-pecuniary losses including disappointment and distress are \
                         recoverable in consumer contracts for holidays and leisure."
                .to_string(),
            url: "https://www.bailii.org/ew/cases/EWCA/Civ/1972/12.html".to_string(),
        },
    ]
}

pub fn sample_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry {
            title: "Small Claims Track Procedure".to_string(),
            content: "Small claims are designed for disputes up to £10,000. The procedure is \
                      simplified with limited disclosure, no requirement for legal \
                      representation, and restricted costs recovery. Hearings are informal and \
                      conducted by District Judges."
                .to_string(),
            kind: KnowledgeKind::Procedure,
            subcategory: "small_claims".to_string(),
            track_relevance: vec![Track::SmallClaims],
            keywords: "small claims, simplified procedure, district judge, informal hearing"
                .to_string(),
            source_url: "https://www.gov.uk/make-court-claim-for-money".to_string(),
        },
        KnowledgeEntry {
            title: "Fast Track Case Management".to_string(),
            content: "Fast track claims (£10,000-£25,000) follow standard directions with a \
                      trial window of 30 weeks. Fixed trial costs apply and the procedure \
                      balances accessibility with proper case management."
                .to_string(),
            kind: KnowledgeKind::Procedure,
            subcategory: "fast_track".to_string(),
            track_relevance: vec![Track::FastTrack],
            keywords: "fast track, standard directions, fixed costs, 30 weeks".to_string(),
            source_url: "https://www.justice.gov.uk/courts/procedure-rules/civil".to_string(),
        },
        KnowledgeEntry {
            title: "Multi-Track Case Management Conference".to_string(),
            content: "Multi-track claims over £25,000 require active case management including \
                      Case Management Conferences (CMC), costs budgeting under Precedent H, and \
                      tailored directions. The court controls the litigation timetable."
                .to_string(),
            kind: KnowledgeKind::Procedure,
            subcategory: "multi_track".to_string(),
            track_relevance: vec![Track::MultiTrack],
            keywords: "multi track, case management conference, costs budgeting, precedent h"
                .to_string(),
            source_url: "https://www.justice.gov.uk/courts/procedure-rules/civil".to_string(),
        },
        KnowledgeEntry {
            title: "Limitation Act 1980".to_string(),
            content: "Sets limitation periods for bringing legal claims. Contract claims must \
                      generally be brought within 6 years, tort claims within 6 years, personal \
                      injury claims within 3 years. Time usually runs from when the cause of \
                      action accrued, but may be extended in cases of fraud, concealment or \
                      disability."
                .to_string(),
            kind: KnowledgeKind::Statute,
            subcategory: "limitation".to_string(),
            track_relevance: vec![Track::SmallClaims, Track::FastTrack, Track::MultiTrack],
            keywords: "limitation period, 6 years, 3 years, personal injury, contract, tort, \
                       time limit"
                .to_string(),
            source_url: "https://www.legislation.gov.uk/ukpga/1980/58".to_string(),
        },
        KnowledgeEntry {
            title: "Consumer Rights Act 2015".to_string(),
            content: "Provides rights for consumers including the right to goods that are of \
                      satisfactory quality, fit for purpose and as described. Consumers have \
                      rights to reject, repair, replacement and refund. Unfair contract terms \
                      are not binding on consumers."
                .to_string(),
            kind: KnowledgeKind::Statute,
            subcategory: "consumer_dispute".to_string(),
            track_relevance: vec![Track::SmallClaims, Track::FastTrack],
            keywords: "consumer rights, satisfactory quality, fit for purpose, unfair terms, \
                       refund, replacement"
                .to_string(),
            source_url: "https://www.legislation.gov.uk/ukpga/2015/15".to_string(),
        },
        KnowledgeEntry {
            title: "Civil Liability Act 2018".to_string(),
            content: "Reformed personal injury claims by introducing fixed tariffs for whiplash \
                      injuries lasting up to 2 years and raising the small claims limit for \
                      RTA-related personal injury claims to £5,000. Affects how personal injury \
                      damages are calculated and which track cases are allocated to."
                .to_string(),
            kind: KnowledgeKind::Statute,
            subcategory: "personal_injury".to_string(),
            track_relevance: vec![Track::SmallClaims, Track::FastTrack],
            keywords: "whiplash, fixed tariff, personal injury, RTA, £5000, small claims limit"
                .to_string(),
            source_url: "https://www.legislation.gov.uk/ukpga/2018/29".to_string(),
        },
    ]
}

pub fn sample_candidates() -> Vec<ReferralCandidate> {
    vec![
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
                "urgent_applications".to_string(),
            ],
            track_experience: vec!["fast_track".to_string(), "multi_track".to_string()],
            min_claim_value_pence: 1_000_000,
            max_claim_value_pence: 10_000_000,
            funding_options: vec!["CFA".to_string(), "ATE".to_string(), "DBA".to_string()],
            active: true,
        },
        ReferralCandidate {
            firm_name: "Regional Litigation Partners".to_string(),
            contact_name: "Michael Brown".to_string(),
            location: "Manchester".to_string(),
            contact_email: "michael.brown@regionallitigation.co.uk".to_string(),
            contact_phone: "0161 234 5678".to_string(),
            website: "https://www.regionallitigation.co.uk".to_string(),
            specialties: vec![
                "personal_injury".to_string(),
                "employment".to_string(),
                "consumer_dispute".to_string(),
                "general_litigation".to_string(),
            ],
            track_experience: vec!["all_tracks".to_string()],
            min_claim_value_pence: 50_000,
            max_claim_value_pence: 5_000_000,
            funding_options: vec!["CFA".to_string(), "ATE".to_string(), "legal_aid".to_string()],
            active: true,
        },
        ReferralCandidate {
            firm_name: "Professional Negligence Specialists".to_string(),
            contact_name: "Dr. Emma Wilson".to_string(),
            location: "Birmingham".to_string(),
            contact_email: "emma.wilson@profnegligence.co.uk".to_string(),
            contact_phone: "0121 345 6789".to_string(),
            website: "https://www.profnegligence.co.uk".to_string(),
            specialties: vec![
                "professional_negligence".to_string(),
                "injunctions".to_string(),
            ],
            track_experience: vec!["fast_track".to_string(), "multi_track".to_string()],
            min_claim_value_pence: 500_000,
            max_claim_value_pence: 10_000_000,
            funding_options: vec![
                "CFA".to_string(),
                "ATE".to_string(),
                "third_party_funding".to_string(),
            ],
            active: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sizes() {
        assert_eq!(sample_cases().len(), 3);
        assert_eq!(sample_entries().len(), 6);
        assert_eq!(sample_candidates().len(), 3);
    }

    #[test]
    fn test_samples_are_active_and_well_formed() {
        for candidate in sample_candidates() {
            assert!(candidate.active);
            assert!(candidate.min_claim_value_pence <= candidate.max_claim_value_pence);
        }
    }
}
