//! Human-readable explanations attached to recommendations, generated
//! independently of the ranking itself.

use super::domain::{ClientProfile, EmploymentStatus, Jurisdiction, Program};
use super::engine::components::{income_ceiling, matched_circumstances};
use super::fpl::FplTable;

/// Slugs flagged for immediate application regardless of profile.
const HIGH_PRIORITY_SLUGS: [&str; 2] = ["snap-food-assistance", "medicaid-health-insurance"];

/// Builds the `why_recommended` sentence list for one recommendation.
pub fn why_recommended(
    profile: &ClientProfile,
    program: &Program,
    fpl: &FplTable,
    score: f64,
) -> String {
    let mut clauses: Vec<String> = Vec::new();

    if let Some(income) = profile.income {
        if program.eligibility.income_threshold_pct > 0 {
            let ceiling = income_ceiling(profile, program, fpl);
            if f64::from(income) <= ceiling {
                let ratio = f64::from(income) / ceiling;
                let clause = if ratio < 0.5 {
                    "Your income is well below the eligibility threshold"
                } else if ratio < 0.8 {
                    "Your income qualifies you for this program"
                } else {
                    "Your income is near the eligibility limit"
                };
                clauses.push(clause.to_string());
            }
        }
    }

    let matched = matched_circumstances(profile, program);
    if !matched.is_empty() {
        clauses.push(format!(
            "This program specifically helps people with the following circumstances: {}",
            matched.join(", ")
        ));
    }

    if program.eligibility.employment_required {
        if profile.employment_status.is_working() {
            clauses.push("You meet the employment requirements".to_string());
        }
    } else if profile.employment_status == EmploymentStatus::Unemployed {
        clauses.push(
            "No employment requirement - perfect for your current situation".to_string(),
        );
    }

    if score > 0.8 {
        clauses.push("Excellent match based on your profile".to_string());
    } else if score > 0.6 {
        clauses.push("Good match for your circumstances".to_string());
    } else if score > 0.4 {
        clauses.push("Potentially beneficial based on your situation".to_string());
    }

    if clauses.is_empty() {
        "This program may be helpful based on your profile.".to_string()
    } else {
        format!("{}.", clauses.join(". "))
    }
}

/// Contextual notes for specific program/profile combinations. `None` when
/// nothing applies; never an empty string.
pub fn special_notes(profile: &ClientProfile, program: &Program) -> Option<String> {
    let mut notes: Vec<String> = Vec::new();

    if program.jurisdiction == Jurisdiction::State {
        if let Some(state) = profile.state.as_deref() {
            notes.push(format!(
                "Contact your local {state} office for application details"
            ));
        }
    }

    if HIGH_PRIORITY_SLUGS.contains(&program.slug.as_str()) {
        notes.push(
            "High priority - apply as soon as possible for immediate assistance".to_string(),
        );
    }

    if program
        .docs_required
        .iter()
        .any(|doc| doc == "medical_records")
    {
        notes.push(
            "Start gathering medical documentation now - this process can take time".to_string(),
        );
    }

    if profile.is_veteran
        && program
            .eligibility
            .special_circumstances
            .iter()
            .any(|tag| tag == "veteran")
    {
        notes.push("Veterans may receive priority processing and additional benefits".to_string());
    }

    if notes.is_empty() {
        None
    } else {
        Some(notes.join("; "))
    }
}
