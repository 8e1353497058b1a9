//! Relief-program matching: catalog, FPL table, scoring engine, reason
//! generation, profile synthesis, and the recommendation service facade.

pub mod catalog;
pub mod domain;
mod engine;
pub mod fpl;
pub mod reasons;
pub mod repository;
pub mod router;
pub mod service;
pub mod synthesize;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, ProgramCatalog};
pub use domain::{
    ClientProfile, Eligibility, EmploymentStatus, Jurisdiction, Program, ProgramMatch,
    Recommendation,
};
pub use engine::{
    MatchBreakdown, MatchEngine, MatchFactor, MatchWeights, RecommendationPolicy, ScoreComponent,
};
pub use fpl::FplTable;
pub use repository::{RecommendationStore, StoreError, StoredRecommendation, PROPOSED_STATUS};
pub use router::relief_router;
pub use service::{CreditProfileReport, RecommendationLimits, ReliefService, ReliefServiceError};
pub use synthesize::{
    derive_profile_from_credit_data, CreditAccount, CreditorSignalDetector, CreditorSignals,
    DerivedProfile, FinancialSignals, KeywordSignalDetector, ProfileSynthesizer, StressIndicator,
};
