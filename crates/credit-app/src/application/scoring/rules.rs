use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use super::super::domain::{ApplicantKind, Person};
use super::ScoringCalculator;

const POINTS_PER_INCOME_STEP: u32 = 100;
const INCOME_STEP: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);
const POINTS_PER_ADDITIONAL_INCOME_SOURCE: u32 = 50;

/// Points carried by the applicant's education level.
#[derive(Debug, Clone, Copy, Default)]
pub struct EducationCalculator;

impl ScoringCalculator for EducationCalculator {
    fn name(&self) -> &'static str {
        "education"
    }

    fn score(&self, person: &Person) -> u32 {
        let education = person.personal_data().education;
        let points = education.scoring_points();
        debug!(?education, points, "education scored");
        points
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaritalStatusCalculator;

impl ScoringCalculator for MaritalStatusCalculator {
    fn name(&self) -> &'static str {
        "marital_status"
    }

    fn score(&self, person: &Person) -> u32 {
        let marital_status = person.personal_data().marital_status;
        let points = marital_status.scoring_points();
        debug!(?marital_status, points, "marital status scored");
        points
    }
}

/// 100 points for every full 1000 of monthly income per family member.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomeCalculator;

impl ScoringCalculator for IncomeCalculator {
    fn name(&self) -> &'static str {
        "income"
    }

    fn score(&self, person: &Person) -> u32 {
        let income_per_family_member = person.income_per_family_member();
        if income_per_family_member <= Decimal::ZERO {
            debug!(%income_per_family_member, points = 0, "income scored");
            return 0;
        }

        let steps = (income_per_family_member / INCOME_STEP).floor();
        let points = steps
            .to_u32()
            .map(|steps| steps.saturating_mul(POINTS_PER_INCOME_STEP))
            .unwrap_or(u32::MAX);
        debug!(%income_per_family_member, points, "income scored");
        points
    }
}

/// Natural persons earn points for every income source beyond the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomeSourcesCalculator;

impl ScoringCalculator for IncomeSourcesCalculator {
    fn name(&self) -> &'static str {
        "income_sources"
    }

    fn score(&self, person: &Person) -> u32 {
        match person.kind() {
            ApplicantKind::NaturalPerson { .. } => {
                let sources = person.finance_data().sources_of_income.len();
                let additional = u32::try_from(sources.saturating_sub(1)).unwrap_or(u32::MAX);
                let points = additional.saturating_mul(POINTS_PER_ADDITIONAL_INCOME_SOURCE);
                debug!(sources, points, "income sources scored");
                points
            }
            ApplicantKind::SelfEmployed { .. } => 0,
        }
    }
}

/// Self-employed applicants earn points for how long their business has been running.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusinessSeniorityCalculator;

impl ScoringCalculator for BusinessSeniorityCalculator {
    fn name(&self) -> &'static str {
        "business_seniority"
    }

    fn score(&self, person: &Person) -> u32 {
        match person.kind() {
            ApplicantKind::SelfEmployed {
                years_since_founded,
                ..
            } => {
                let points = match *years_since_founded {
                    0..=1 => 0,
                    2..=4 => 100,
                    _ => 200,
                };
                debug!(years_since_founded, points, "business seniority scored");
                points
            }
            ApplicantKind::NaturalPerson { .. } => 0,
        }
    }
}
