//! # solocase-referral
//!
//! Referral ranking for solocase: scores active professional-service
//! candidates against a query profile, selects eligible funding
//! arrangements, and generates deterministic referral advice.

pub mod advice;
pub mod funding;
pub mod ranker;

// Re-export core types
pub use solocase_core::{QueryProfile, ReferralCandidate, ReferralStore};

pub use advice::referral_advice;
pub use funding::{funding_options, FundingOption};
pub use ranker::{score_candidate, ReferralRanker, ReferralRecommendation, ScoredReferral};
