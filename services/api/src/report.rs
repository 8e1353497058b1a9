//! CLI entry point that ranks relief programs for a profile assembled from
//! command-line flags and prints the result as text or JSON.

use clap::{Args, ValueEnum};
use relief_finder::error::AppError;
use relief_finder::matching::{ClientProfile, EmploymentStatus, MatchEngine, ProgramCatalog};

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Annual household income in whole dollars
    #[arg(long)]
    pub(crate) income: Option<u32>,
    /// Number of people in the household
    #[arg(long)]
    pub(crate) household_size: Option<u32>,
    /// State of residence
    #[arg(long)]
    pub(crate) state: Option<String>,
    /// Current employment status
    #[arg(long, value_enum)]
    pub(crate) employment: Option<EmploymentArg>,
    #[arg(long)]
    pub(crate) disabled: bool,
    #[arg(long)]
    pub(crate) veteran: bool,
    #[arg(long)]
    pub(crate) senior: bool,
    #[arg(long)]
    pub(crate) pregnant: bool,
    #[arg(long)]
    pub(crate) children: bool,
    #[arg(long)]
    pub(crate) homeless: bool,
    /// Maximum number of programs to print
    #[arg(long, default_value_t = 8)]
    pub(crate) top: usize,
    /// Emit the ranked list as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EmploymentArg {
    Employed,
    SelfEmployed,
    Unemployed,
}

impl From<EmploymentArg> for EmploymentStatus {
    fn from(value: EmploymentArg) -> Self {
        match value {
            EmploymentArg::Employed => EmploymentStatus::Employed,
            EmploymentArg::SelfEmployed => EmploymentStatus::SelfEmployed,
            EmploymentArg::Unemployed => EmploymentStatus::Unemployed,
        }
    }
}

fn profile_from(args: &MatchArgs) -> ClientProfile {
    ClientProfile {
        income: args.income,
        household_size: args.household_size,
        state: args.state.clone(),
        employment_status: args
            .employment
            .map(EmploymentStatus::from)
            .unwrap_or_default(),
        has_disabilities: args.disabled,
        is_veteran: args.veteran,
        is_senior: args.senior,
        is_pregnant: args.pregnant,
        has_children: args.children,
        is_homeless: args.homeless,
    }
}

pub(crate) fn run_match_report(args: MatchArgs) -> Result<(), AppError> {
    let catalog = ProgramCatalog::standard();
    let engine = MatchEngine::default();
    let profile = profile_from(&args);
    let recommendations = engine.recommend(&profile, &catalog, args.top);

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&recommendations).map_err(std::io::Error::other)?;
        println!("{rendered}");
        return Ok(());
    }

    if recommendations.is_empty() {
        println!("No programs cleared the relevance threshold for this profile.");
        return Ok(());
    }

    println!("Matched {} program(s):", recommendations.len());
    for (index, recommendation) in recommendations.iter().enumerate() {
        println!();
        println!(
            "{}. {} [{}]  score {:.2}  confidence {:.2}",
            index + 1,
            recommendation.program_title,
            recommendation.jurisdiction.label(),
            recommendation.match_score,
            recommendation.confidence,
        );
        println!("   {}", recommendation.why_recommended);
        if let Some(notes) = &recommendation.special_notes {
            println!("   Note: {notes}");
        }
        println!(
            "   Benefit: {} | Apply: {}",
            recommendation.benefit_amount, recommendation.application_method
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> MatchArgs {
        MatchArgs {
            income: None,
            household_size: None,
            state: None,
            employment: None,
            disabled: false,
            veteran: false,
            senior: false,
            pregnant: false,
            children: false,
            homeless: false,
            top: 8,
            json: false,
        }
    }

    #[test]
    fn flags_map_onto_the_profile() {
        let args = MatchArgs {
            income: Some(10_000),
            household_size: Some(2),
            employment: Some(EmploymentArg::Unemployed),
            veteran: true,
            ..base_args()
        };

        let profile = profile_from(&args);
        assert_eq!(profile.income, Some(10_000));
        assert_eq!(profile.household_size, Some(2));
        assert_eq!(profile.employment_status, EmploymentStatus::Unemployed);
        assert!(profile.is_veteran);
        assert!(!profile.has_disabilities);
    }

    #[test]
    fn absent_employment_flag_defaults_to_unknown() {
        let profile = profile_from(&base_args());
        assert_eq!(profile.employment_status, EmploymentStatus::Unknown);
    }

    #[test]
    fn match_report_runs_for_a_typical_profile() {
        let args = MatchArgs {
            income: Some(10_000),
            household_size: Some(1),
            employment: Some(EmploymentArg::Unemployed),
            ..base_args()
        };
        run_match_report(args).expect("report prints");
    }
}
