use serde::{Deserialize, Serialize};

/// Jurisdiction values carried by catalog programs. The display labels are
/// stable identifiers used both for serialization and for the literal
/// state-match comparison in the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Jurisdiction {
    Federal,
    State,
    #[serde(rename = "Federal/Local")]
    FederalLocal,
    #[serde(rename = "State/Federal")]
    StateFederal,
    #[serde(rename = "Federal/State")]
    FederalState,
}

impl Jurisdiction {
    pub const fn label(self) -> &'static str {
        match self {
            Jurisdiction::Federal => "Federal",
            Jurisdiction::State => "State",
            Jurisdiction::FederalLocal => "Federal/Local",
            Jurisdiction::StateFederal => "State/Federal",
            Jurisdiction::FederalState => "Federal/State",
        }
    }

    /// Programs offered nationwide regardless of the applicant's state.
    pub const fn nationally_available(self) -> bool {
        matches!(self, Jurisdiction::Federal | Jurisdiction::StateFederal)
    }
}

/// Eligibility metadata attached to a catalog program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    /// Income ceiling as a percent of the federal poverty level. Zero means
    /// the program has no income test.
    pub income_threshold_pct: u32,
    /// Display-only; not consulted by the scoring formula.
    pub asset_limit: Option<u32>,
    pub household_size_based: bool,
    pub employment_required: bool,
    /// Open-vocabulary circumstance tags, e.g. `disabled`, `veteran`.
    pub special_circumstances: Vec<String>,
}

/// A relief-program catalog entry, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub jurisdiction: Jurisdiction,
    pub eligibility: Eligibility,
    pub docs_required: Vec<String>,
    pub benefit_amount: String,
    pub application_method: String,
    pub source_url: String,
}

/// Employment status as submitted by the client or inferred upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl EmploymentStatus {
    pub const fn is_working(self) -> bool {
        matches!(self, EmploymentStatus::Employed | EmploymentStatus::SelfEmployed)
    }
}

/// Per-request scoring input, built from a user form or synthesized from
/// credit-report data. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(default)]
    pub income: Option<u32>,
    #[serde(default)]
    pub household_size: Option<u32>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub employment_status: EmploymentStatus,
    #[serde(default)]
    pub has_disabilities: bool,
    #[serde(default)]
    pub is_veteran: bool,
    #[serde(default)]
    pub is_senior: bool,
    #[serde(default)]
    pub is_pregnant: bool,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub is_homeless: bool,
}

impl ClientProfile {
    /// Circumstance tags the profile asserts, in a fixed order so matched
    /// lists render deterministically.
    pub fn circumstance_tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        if self.has_disabilities {
            tags.push("disabled");
        }
        if self.is_senior {
            tags.push("senior");
        }
        if self.is_veteran {
            tags.push("veteran");
        }
        if self.employment_status == EmploymentStatus::Unemployed {
            tags.push("unemployed");
        }
        if self.is_pregnant {
            tags.push("pregnant");
        }
        if self.has_children {
            tags.push("children");
        }
        if self.is_homeless {
            tags.push("homeless");
        }
        tags
    }
}

/// One scored catalog entry, before filtering and ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramMatch<'a> {
    pub program: &'a Program,
    pub score: f64,
}

/// Ranked, annotated recommendation returned to callers and optionally
/// handed to a persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub program_slug: String,
    pub program_title: String,
    pub program_description: String,
    pub jurisdiction: Jurisdiction,
    /// Rounded to two decimals, always within [0, 1].
    pub match_score: f64,
    /// `min(score + bonus, 1.0)`, rounded to two decimals.
    pub confidence: f64,
    pub why_recommended: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_notes: Option<String>,
    pub benefit_amount: String,
    pub application_method: String,
    pub source_url: String,
    pub docs_required: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jurisdiction_labels_round_trip_through_serde() {
        for jurisdiction in [
            Jurisdiction::Federal,
            Jurisdiction::State,
            Jurisdiction::FederalLocal,
            Jurisdiction::StateFederal,
            Jurisdiction::FederalState,
        ] {
            let encoded = serde_json::to_string(&jurisdiction).expect("serialize");
            assert_eq!(encoded, format!("\"{}\"", jurisdiction.label()));
            let decoded: Jurisdiction = serde_json::from_str(&encoded).expect("deserialize");
            assert_eq!(decoded, jurisdiction);
        }
    }

    #[test]
    fn unknown_employment_status_is_the_default() {
        let profile: ClientProfile = serde_json::from_str("{}").expect("empty profile");
        assert_eq!(profile.employment_status, EmploymentStatus::Unknown);
        assert!(profile.circumstance_tags().is_empty());
    }

    #[test]
    fn unemployed_status_contributes_a_tag() {
        let profile = ClientProfile {
            employment_status: EmploymentStatus::Unemployed,
            is_veteran: true,
            ..ClientProfile::default()
        };
        assert_eq!(profile.circumstance_tags(), vec!["veteran", "unemployed"]);
    }
}
