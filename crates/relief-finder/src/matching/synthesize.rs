//! Best-effort profile synthesis from structured credit-report data.
//!
//! The upstream extraction collaborator (AI or regex based) produces account
//! records of unknown quality; everything here treats them as untrusted input
//! and degrades to an empty profile rather than failing.

use serde::{Deserialize, Serialize};

use super::domain::ClientProfile;

/// Assumed debt-to-income ratio used to back out an income estimate from
/// observed debt service.
const ASSUMED_DTI_RATIO: f64 = 0.36;

/// Flat monthly-payment heuristics per account type. Rough estimates, not
/// actuarial figures.
const CREDIT_CARD_PAYMENT_RATE: f64 = 0.02;
const LOAN_PAYMENT_RATE: f64 = 0.01;

const HIGH_DEBT_CUTOFF: f64 = 50_000.0;
const MAX_ESTIMATED_HOUSEHOLD: u32 = 6;

/// A structured account record extracted upstream from a credit report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditAccount {
    #[serde(default)]
    pub creditor: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub account_type: String,
    #[serde(default)]
    pub status: String,
}

impl CreditAccount {
    fn is_credit_card(&self) -> bool {
        self.account_type.contains("Credit Card")
    }

    fn is_loan(&self) -> bool {
        self.account_type.contains("Loan")
    }

    fn bounded_balance(&self) -> f64 {
        if self.balance.is_finite() {
            self.balance.max(0.0)
        } else {
            0.0
        }
    }
}

/// Coarse financial-stress markers derived alongside the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressIndicator {
    HighDebt,
    DelinquentAccounts,
}

/// Aggregate debt figures computed during synthesis, reported to callers for
/// display next to the derived profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSignals {
    pub total_debt: f64,
    pub monthly_debt_payments: f64,
    pub stress_indicators: Vec<StressIndicator>,
}

/// Synthesis output: the scoring profile plus the signals behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedProfile {
    pub profile: ClientProfile,
    pub signals: FinancialSignals,
}

/// Life-circumstance flags inferred from a creditor name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreditorSignals {
    pub veteran: bool,
    pub senior: bool,
}

/// Replaceable heuristic for reading weak signals out of creditor names.
pub trait CreditorSignalDetector: Send + Sync {
    fn detect(&self, creditor: &str) -> CreditorSignals;
}

/// Default detector: case-insensitive substring matching. Low confidence by
/// construction; swap in a better detector without touching the synthesizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSignalDetector;

impl CreditorSignalDetector for KeywordSignalDetector {
    fn detect(&self, creditor: &str) -> CreditorSignals {
        let lowered = creditor.to_lowercase();
        CreditorSignals {
            veteran: lowered.contains("veteran") || lowered.contains("military"),
            senior: lowered.contains("senior") || lowered.contains("retirement"),
        }
    }
}

/// Turns extracted account lists into approximate client profiles.
pub struct ProfileSynthesizer<D = KeywordSignalDetector> {
    detector: D,
}

impl ProfileSynthesizer<KeywordSignalDetector> {
    pub fn keyword() -> Self {
        Self::new(KeywordSignalDetector)
    }
}

impl Default for ProfileSynthesizer<KeywordSignalDetector> {
    fn default() -> Self {
        Self::keyword()
    }
}

impl<D: CreditorSignalDetector> ProfileSynthesizer<D> {
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    pub fn synthesize(&self, accounts: &[CreditAccount]) -> DerivedProfile {
        let mut total_debt = 0.0;
        let mut monthly_payments = 0.0;
        let mut card_count: u32 = 0;
        let mut delinquent = false;
        let mut is_veteran = false;
        let mut is_senior = false;

        for account in accounts {
            let balance = account.bounded_balance();
            total_debt += balance;

            if account.is_credit_card() {
                monthly_payments += balance * CREDIT_CARD_PAYMENT_RATE;
                card_count += 1;
            } else if account.is_loan() {
                monthly_payments += balance * LOAN_PAYMENT_RATE;
            }

            if account.status == "Delinquent" {
                delinquent = true;
            }

            let signals = self.detector.detect(&account.creditor);
            is_veteran |= signals.veteran;
            is_senior |= signals.senior;
        }

        let income = if monthly_payments > 0.0 {
            let monthly_income = monthly_payments / ASSUMED_DTI_RATIO;
            Some((monthly_income * 12.0).round() as u32)
        } else {
            None
        };

        let household_size = if card_count > 3 {
            Some((card_count / 2).min(MAX_ESTIMATED_HOUSEHOLD))
        } else {
            None
        };

        let mut stress_indicators = Vec::new();
        if total_debt > HIGH_DEBT_CUTOFF {
            stress_indicators.push(StressIndicator::HighDebt);
        }
        if delinquent {
            stress_indicators.push(StressIndicator::DelinquentAccounts);
        }

        DerivedProfile {
            profile: ClientProfile {
                income,
                household_size,
                is_veteran,
                is_senior,
                ..ClientProfile::default()
            },
            signals: FinancialSignals {
                total_debt,
                monthly_debt_payments: monthly_payments,
                stress_indicators,
            },
        }
    }
}

/// Convenience wrapper over the default synthesizer for callers that only
/// need the scoring profile.
pub fn derive_profile_from_credit_data(accounts: &[CreditAccount]) -> ClientProfile {
    ProfileSynthesizer::keyword().synthesize(accounts).profile
}
