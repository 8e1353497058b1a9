use serde::{Deserialize, Serialize};

use super::config::MatchWeights;
use crate::matching::domain::{ClientProfile, Program};
use crate::matching::fpl::FplTable;

/// The four scored dimensions of a (profile, program) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchFactor {
    Income,
    SpecialCircumstances,
    Employment,
    Jurisdiction,
}

/// Discrete contribution to a match score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub points: f64,
    pub note: String,
}

pub(crate) struct ComponentOutcome {
    pub components: Vec<ScoreComponent>,
    pub total: f64,
    /// False only when the hard income gate fires.
    pub eligible: bool,
}

/// Annual income ceiling for a profile against a program's income test.
/// Callers must only invoke this for programs with a positive threshold
/// percentage so the result is never zero.
pub(crate) fn income_ceiling(profile: &ClientProfile, program: &Program, fpl: &FplTable) -> f64 {
    let fpl_baseline = fpl.lookup(profile.household_size.unwrap_or(1));
    fpl_baseline as f64 * (program.eligibility.income_threshold_pct as f64 / 100.0)
}

pub(crate) fn score_components(
    profile: &ClientProfile,
    program: &Program,
    fpl: &FplTable,
    weights: &MatchWeights,
) -> ComponentOutcome {
    let mut components = Vec::with_capacity(4);
    let mut total = 0.0;

    // Income: the only hard gate. Over-threshold income zeroes the whole
    // score; a missing income with a positive threshold earns no credit but
    // stays eligible.
    let threshold_pct = program.eligibility.income_threshold_pct;
    if threshold_pct == 0 {
        components.push(ScoreComponent {
            factor: MatchFactor::Income,
            points: weights.income,
            note: "program has no income test".to_string(),
        });
        total += weights.income;
    } else if let Some(income) = profile.income {
        let ceiling = income_ceiling(profile, program, fpl);
        debug_assert!(ceiling > 0.0, "positive threshold pct implies nonzero ceiling");
        if f64::from(income) > ceiling {
            components.push(ScoreComponent {
                factor: MatchFactor::Income,
                points: 0.0,
                note: format!("income {income} exceeds eligibility ceiling {ceiling:.0}"),
            });
            return ComponentOutcome {
                components,
                total: 0.0,
                eligible: false,
            };
        }
        let ratio = f64::from(income) / ceiling;
        let points = (1.0 - ratio) * weights.income;
        components.push(ScoreComponent {
            factor: MatchFactor::Income,
            points,
            note: format!("income {income} is {:.0}% of ceiling {ceiling:.0}", ratio * 100.0),
        });
        total += points;
    } else {
        components.push(ScoreComponent {
            factor: MatchFactor::Income,
            points: 0.0,
            note: "income unknown; no credit given".to_string(),
        });
    }

    // Special circumstances: fraction of the program's declared tags the
    // profile covers.
    let declared = &program.eligibility.special_circumstances;
    let matched = matched_circumstances(profile, program);
    if !declared.is_empty() && !matched.is_empty() {
        let points = (matched.len() as f64 / declared.len() as f64) * weights.special_circumstances;
        components.push(ScoreComponent {
            factor: MatchFactor::SpecialCircumstances,
            points,
            note: format!(
                "matches {} of {} declared circumstances ({})",
                matched.len(),
                declared.len(),
                matched.join(", ")
            ),
        });
        total += points;
    } else {
        components.push(ScoreComponent {
            factor: MatchFactor::SpecialCircumstances,
            points: 0.0,
            note: "no circumstance overlap".to_string(),
        });
    }

    // Employment: a soft component, unlike the income gate.
    if !program.eligibility.employment_required {
        components.push(ScoreComponent {
            factor: MatchFactor::Employment,
            points: weights.employment,
            note: "no employment requirement".to_string(),
        });
        total += weights.employment;
    } else if profile.employment_status.is_working() {
        components.push(ScoreComponent {
            factor: MatchFactor::Employment,
            points: weights.employment,
            note: "employment requirement satisfied".to_string(),
        });
        total += weights.employment;
    } else {
        components.push(ScoreComponent {
            factor: MatchFactor::Employment,
            points: 0.0,
            note: "employment required but not demonstrated".to_string(),
        });
    }

    // Jurisdiction: nationwide programs score unconditionally; anything else
    // needs a verbatim match between the profile state and the jurisdiction
    // label. Two-letter state codes never equal "State", so state-scoped
    // programs forfeit this point; see the catalog notes.
    let jurisdiction = program.jurisdiction;
    if jurisdiction.nationally_available() {
        components.push(ScoreComponent {
            factor: MatchFactor::Jurisdiction,
            points: weights.jurisdiction,
            note: format!("{} program available nationwide", jurisdiction.label()),
        });
        total += weights.jurisdiction;
    } else if profile.state.as_deref() == Some(jurisdiction.label()) {
        components.push(ScoreComponent {
            factor: MatchFactor::Jurisdiction,
            points: weights.jurisdiction,
            note: "jurisdiction matches client state".to_string(),
        });
        total += weights.jurisdiction;
    } else {
        components.push(ScoreComponent {
            factor: MatchFactor::Jurisdiction,
            points: 0.0,
            note: format!("{} program outside client jurisdiction", jurisdiction.label()),
        });
    }

    ComponentOutcome {
        components,
        total,
        eligible: true,
    }
}

/// Program-declared circumstance tags asserted by the profile, in the
/// program's declaration order.
pub(crate) fn matched_circumstances<'a>(
    profile: &ClientProfile,
    program: &'a Program,
) -> Vec<&'a str> {
    let asserted = profile.circumstance_tags();
    program
        .eligibility
        .special_circumstances
        .iter()
        .map(String::as_str)
        .filter(|tag| asserted.iter().any(|assertion| assertion == tag))
        .collect()
}
