pub(crate) mod components;
mod config;

pub use components::{MatchFactor, ScoreComponent};
pub use config::{MatchWeights, RecommendationPolicy};

use serde::{Deserialize, Serialize};

use super::catalog::ProgramCatalog;
use super::domain::{ClientProfile, Program, ProgramMatch, Recommendation};
use super::fpl::FplTable;
use super::reasons;

/// Stateless scorer ranking catalog programs against a client profile.
///
/// Scoring is a pure function of (profile, program, FPL table, weights):
/// no I/O, no shared mutable state, safe to call concurrently.
pub struct MatchEngine {
    fpl: FplTable,
    weights: MatchWeights,
    policy: RecommendationPolicy,
}

/// Audit view of a single score, component by component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub score: f64,
    pub eligible: bool,
    pub components: Vec<ScoreComponent>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(
            FplTable::guidelines_2023(),
            MatchWeights::default(),
            RecommendationPolicy::default(),
        )
    }
}

impl MatchEngine {
    pub fn new(fpl: FplTable, weights: MatchWeights, policy: RecommendationPolicy) -> Self {
        Self {
            fpl,
            weights,
            policy,
        }
    }

    pub fn fpl(&self) -> &FplTable {
        &self.fpl
    }

    pub fn policy(&self) -> &RecommendationPolicy {
        &self.policy
    }

    /// Match score in [0, 1]. Zero when the hard income gate fires.
    pub fn score(&self, profile: &ClientProfile, program: &Program) -> f64 {
        let outcome = components::score_components(profile, program, &self.fpl, &self.weights);
        if !outcome.eligible {
            return 0.0;
        }
        (outcome.total / self.weights.total()).min(1.0)
    }

    /// False only when the program has an income test and the profile's
    /// income exceeds the ceiling.
    pub fn is_eligible(&self, profile: &ClientProfile, program: &Program) -> bool {
        components::score_components(profile, program, &self.fpl, &self.weights).eligible
    }

    /// Per-component audit trail for a single pair.
    pub fn breakdown(&self, profile: &ClientProfile, program: &Program) -> MatchBreakdown {
        let outcome = components::score_components(profile, program, &self.fpl, &self.weights);
        let score = if outcome.eligible {
            (outcome.total / self.weights.total()).min(1.0)
        } else {
            0.0
        };
        MatchBreakdown {
            score,
            eligible: outcome.eligible,
            components: outcome.components,
        }
    }

    /// Every catalog program scored, in catalog order, unfiltered.
    pub fn score_programs<'a>(
        &self,
        profile: &ClientProfile,
        catalog: &'a ProgramCatalog,
    ) -> Vec<ProgramMatch<'a>> {
        catalog
            .programs()
            .iter()
            .map(|program| ProgramMatch {
                program,
                score: self.score(profile, program),
            })
            .collect()
    }

    /// Filtered, ranked, annotated recommendations.
    ///
    /// Programs at or below the policy minimum are dropped, the rest are
    /// sorted by score descending (the sort is stable, so equal scores keep
    /// catalog order) and truncated to `top_n`.
    pub fn recommend(
        &self,
        profile: &ClientProfile,
        catalog: &ProgramCatalog,
        top_n: usize,
    ) -> Vec<Recommendation> {
        let mut matches: Vec<_> = self
            .score_programs(profile, catalog)
            .into_iter()
            .filter(|entry| entry.score > self.policy.min_score)
            .collect();
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(top_n);

        matches
            .into_iter()
            .map(|entry| self.annotate(profile, entry.program, entry.score))
            .collect()
    }

    fn annotate(&self, profile: &ClientProfile, program: &Program, score: f64) -> Recommendation {
        let confidence = (score + self.policy.confidence_bonus).min(1.0);
        Recommendation {
            program_slug: program.slug.clone(),
            program_title: program.title.clone(),
            program_description: program.description.clone(),
            jurisdiction: program.jurisdiction,
            match_score: round2(score),
            confidence: round2(confidence),
            why_recommended: reasons::why_recommended(profile, program, &self.fpl, score),
            special_notes: reasons::special_notes(profile, program),
            benefit_amount: program.benefit_amount.clone(),
            application_method: program.application_method.clone(),
            source_url: program.source_url.clone(),
            docs_required: program.docs_required.clone(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
