use std::collections::BTreeSet;

use super::domain::{Eligibility, Jurisdiction, Program};

/// Load-time validation failures. Fatal at startup; never a per-request
/// concern.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate program slug '{0}'")]
    DuplicateSlug(String),
    #[error("program slug must not be empty")]
    EmptySlug,
}

/// Immutable, validated set of relief-program definitions.
#[derive(Debug, Clone)]
pub struct ProgramCatalog {
    programs: Vec<Program>,
}

impl ProgramCatalog {
    pub fn new(programs: Vec<Program>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for program in &programs {
            if program.slug.trim().is_empty() {
                return Err(CatalogError::EmptySlug);
            }
            if !seen.insert(program.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(program.slug.clone()));
            }
        }
        Ok(Self { programs })
    }

    /// The standard catalog of government and private relief programs.
    pub fn standard() -> Self {
        Self::new(standard_programs()).expect("standard catalog is valid")
    }

    pub fn get(&self, slug: &str) -> Option<&Program> {
        self.programs.iter().find(|program| program.slug == slug)
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn standard_programs() -> Vec<Program> {
    vec![
        Program {
            slug: "snap-food-assistance".to_string(),
            title: "SNAP (Supplemental Nutrition Assistance Program)".to_string(),
            description: "Provides monthly benefits to buy food for low-income families"
                .to_string(),
            jurisdiction: Jurisdiction::Federal,
            eligibility: Eligibility {
                income_threshold_pct: 130,
                asset_limit: Some(2_250),
                household_size_based: true,
                employment_required: false,
                special_circumstances: strings(&["disabled", "senior"]),
            },
            docs_required: strings(&["income_verification", "identity", "residence_proof"]),
            benefit_amount: "Varies by household size and income".to_string(),
            application_method: "Online or local office".to_string(),
            source_url: "https://www.fns.usda.gov/snap".to_string(),
        },
        Program {
            slug: "medicaid-health-insurance".to_string(),
            title: "Medicaid".to_string(),
            description:
                "Free or low-cost health coverage for low-income individuals and families"
                    .to_string(),
            jurisdiction: Jurisdiction::StateFederal,
            eligibility: Eligibility {
                income_threshold_pct: 138,
                asset_limit: Some(2_000),
                household_size_based: true,
                employment_required: false,
                special_circumstances: strings(&["disabled", "senior", "pregnant", "children"]),
            },
            docs_required: strings(&[
                "income_verification",
                "identity",
                "residence_proof",
                "citizenship",
            ]),
            benefit_amount: "Full coverage with minimal or no cost".to_string(),
            application_method: "Online, phone, or local office".to_string(),
            source_url: "https://www.medicaid.gov".to_string(),
        },
        Program {
            slug: "section-8-housing".to_string(),
            title: "Section 8 Housing Choice Voucher".to_string(),
            description:
                "Helps low-income families afford decent, safe housing in the private market"
                    .to_string(),
            jurisdiction: Jurisdiction::FederalLocal,
            eligibility: Eligibility {
                income_threshold_pct: 50,
                asset_limit: Some(5_000),
                household_size_based: true,
                employment_required: false,
                special_circumstances: strings(&["disabled", "senior", "homeless"]),
            },
            docs_required: strings(&[
                "income_verification",
                "identity",
                "residence_proof",
                "rental_history",
            ]),
            benefit_amount: "Subsidy covers portion of rent based on income".to_string(),
            application_method: "Local housing authority".to_string(),
            source_url: "https://www.hud.gov/program_offices/public_indian_housing/programs/hcv"
                .to_string(),
        },
        Program {
            slug: "liheap-energy-assistance".to_string(),
            title: "LIHEAP (Low Income Home Energy Assistance Program)".to_string(),
            description: "Helps low-income households with heating and cooling costs".to_string(),
            jurisdiction: Jurisdiction::FederalState,
            eligibility: Eligibility {
                income_threshold_pct: 150,
                asset_limit: Some(3_000),
                household_size_based: true,
                employment_required: false,
                special_circumstances: strings(&["disabled", "senior"]),
            },
            docs_required: strings(&["income_verification", "identity", "utility_bills"]),
            benefit_amount: "Varies by state, typically $200-$1000 per year".to_string(),
            application_method: "Local LIHEAP office".to_string(),
            source_url: "https://www.acf.hhs.gov/ocs/programs/liheap".to_string(),
        },
        Program {
            slug: "wic-nutrition".to_string(),
            title: "WIC (Women, Infants, and Children)".to_string(),
            description: "Provides nutritious foods, nutrition education, and healthcare referrals"
                .to_string(),
            jurisdiction: Jurisdiction::Federal,
            eligibility: Eligibility {
                income_threshold_pct: 185,
                asset_limit: None,
                household_size_based: true,
                employment_required: false,
                special_circumstances: strings(&[
                    "pregnant",
                    "postpartum",
                    "breastfeeding",
                    "children_under_5",
                ]),
            },
            docs_required: strings(&["income_verification", "identity", "residence_proof"]),
            benefit_amount: "Monthly food package worth $50-$100".to_string(),
            application_method: "Local WIC office".to_string(),
            source_url: "https://www.fns.usda.gov/wic".to_string(),
        },
        Program {
            slug: "ssi-disability".to_string(),
            title: "SSI (Supplemental Security Income)".to_string(),
            description:
                "Monthly cash assistance for disabled, blind, or elderly with limited income"
                    .to_string(),
            jurisdiction: Jurisdiction::Federal,
            eligibility: Eligibility {
                income_threshold_pct: 0,
                asset_limit: Some(2_000),
                household_size_based: false,
                employment_required: false,
                special_circumstances: strings(&["disabled", "senior", "blind"]),
            },
            docs_required: strings(&[
                "medical_records",
                "income_verification",
                "identity",
                "work_history",
            ]),
            benefit_amount: "Up to $943/month (2024)".to_string(),
            application_method: "Social Security office or online".to_string(),
            source_url: "https://www.ssa.gov/ssi".to_string(),
        },
        Program {
            slug: "unemployment-insurance".to_string(),
            title: "Unemployment Insurance".to_string(),
            description:
                "Temporary cash assistance for workers who lost their job through no fault of their own"
                    .to_string(),
            jurisdiction: Jurisdiction::State,
            eligibility: Eligibility {
                income_threshold_pct: 0,
                asset_limit: None,
                household_size_based: false,
                employment_required: true,
                special_circumstances: strings(&["unemployed"]),
            },
            docs_required: strings(&["employment_history", "identity", "bank_account_info"]),
            benefit_amount: "Varies by state, typically 40-60% of previous wages".to_string(),
            application_method: "State unemployment office online".to_string(),
            source_url: "https://www.dol.gov/general/topic/unemployment-insurance".to_string(),
        },
        Program {
            slug: "temporary-cash-assistance".to_string(),
            title: "TANF (Temporary Assistance for Needy Families)".to_string(),
            description: "Temporary cash assistance for families with dependent children"
                .to_string(),
            jurisdiction: Jurisdiction::State,
            eligibility: Eligibility {
                income_threshold_pct: 185,
                asset_limit: Some(1_000),
                household_size_based: true,
                employment_required: false,
                special_circumstances: strings(&["children_under_18"]),
            },
            docs_required: strings(&[
                "income_verification",
                "identity",
                "residence_proof",
                "children_birth_certificates",
            ]),
            benefit_amount: "Varies by state, typically $200-$800/month".to_string(),
            application_method: "Local social services office".to_string(),
            source_url: "https://www.acf.hhs.gov/ofa/programs/tanf".to_string(),
        },
        Program {
            slug: "free-cell-phone-program".to_string(),
            title: "Lifeline (Free Cell Phone Program)".to_string(),
            description: "Provides free or discounted phone and internet service".to_string(),
            jurisdiction: Jurisdiction::Federal,
            eligibility: Eligibility {
                income_threshold_pct: 135,
                asset_limit: None,
                household_size_based: true,
                employment_required: false,
                special_circumstances: strings(&["disabled", "senior"]),
            },
            docs_required: strings(&["income_verification", "identity", "residence_proof"]),
            benefit_amount: "Free phone + 1000 minutes/texts + 1GB data".to_string(),
            application_method: "Online through approved providers".to_string(),
            source_url: "https://www.fcc.gov/lifeline-consumers".to_string(),
        },
        Program {
            slug: "weatherization-assistance".to_string(),
            title: "Weatherization Assistance Program".to_string(),
            description: "Free home energy efficiency improvements to reduce utility costs"
                .to_string(),
            jurisdiction: Jurisdiction::FederalState,
            eligibility: Eligibility {
                income_threshold_pct: 200,
                asset_limit: None,
                household_size_based: true,
                employment_required: false,
                special_circumstances: strings(&["disabled", "senior"]),
            },
            docs_required: strings(&["income_verification", "identity", "home_ownership_proof"]),
            benefit_amount: "Up to $8,000 in home improvements".to_string(),
            application_method: "Local weatherization agency".to_string(),
            source_url: "https://www.energy.gov/eere/wap/weatherization-assistance-program"
                .to_string(),
        },
        Program {
            slug: "va-disability-compensation".to_string(),
            title: "VA Disability Compensation".to_string(),
            description:
                "Monthly tax-free compensation for veterans with service-connected disabilities"
                    .to_string(),
            jurisdiction: Jurisdiction::Federal,
            eligibility: Eligibility {
                income_threshold_pct: 0,
                asset_limit: None,
                household_size_based: true,
                employment_required: false,
                special_circumstances: strings(&["veteran", "disabled"]),
            },
            docs_required: strings(&["military_records", "medical_records", "identity"]),
            benefit_amount: "Varies by disability rating, $171.23-$4,433.39/month".to_string(),
            application_method: "VA office or online".to_string(),
            source_url: "https://www.va.gov/disability/".to_string(),
        },
        Program {
            slug: "pension-benefit-guaranty".to_string(),
            title: "Pension Benefit Guaranty Corporation".to_string(),
            description: "Protects pension benefits when private pension plans fail".to_string(),
            jurisdiction: Jurisdiction::Federal,
            eligibility: Eligibility {
                income_threshold_pct: 0,
                asset_limit: None,
                household_size_based: false,
                employment_required: true,
                special_circumstances: strings(&["senior", "retired"]),
            },
            docs_required: strings(&["pension_documents", "identity", "employment_history"]),
            benefit_amount: "Up to $6,751.14/month (2024)".to_string(),
            application_method: "PBGC online or mail".to_string(),
            source_url: "https://www.pbgc.gov/".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_unique_slugs() {
        let catalog = ProgramCatalog::standard();
        assert_eq!(catalog.len(), 12);
        let mut slugs: Vec<_> = catalog
            .programs()
            .iter()
            .map(|program| program.slug.as_str())
            .collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 12);
    }

    #[test]
    fn duplicate_slugs_fail_at_load_time() {
        let mut programs = standard_programs();
        let duplicate = programs[0].clone();
        programs.push(duplicate);
        match ProgramCatalog::new(programs) {
            Err(CatalogError::DuplicateSlug(slug)) => {
                assert_eq!(slug, "snap-food-assistance");
            }
            other => panic!("expected duplicate slug error, got {other:?}"),
        }
    }

    #[test]
    fn lookup_by_slug() {
        let catalog = ProgramCatalog::standard();
        let wic = catalog.get("wic-nutrition").expect("wic present");
        assert_eq!(wic.eligibility.income_threshold_pct, 185);
        assert!(catalog.get("no-such-program").is_none());
    }
}
