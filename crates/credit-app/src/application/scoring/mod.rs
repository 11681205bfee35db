mod rules;
mod selector;

pub use rules::{
    BusinessSeniorityCalculator, EducationCalculator, IncomeCalculator, IncomeSourcesCalculator,
    MaritalStatusCalculator,
};
pub use selector::{PersonScoringSelector, ScoringSelector};

use std::sync::Arc;

use tracing::debug;

use super::domain::{CreditApplication, Person};

/// A single scoring rule. Points are additive across a bundle of calculators.
///
/// Rules that only apply to one applicant kind match on [`super::domain::ApplicantKind`] and
/// contribute zero for the other kind.
pub trait ScoringCalculator: Send + Sync {
    fn name(&self) -> &'static str;

    fn score(&self, person: &Person) -> u32;
}

/// Ordered bundle of scoring rules summed into one scoring value.
#[derive(Clone)]
pub struct CompoundScoringCalculator {
    calculators: Vec<Arc<dyn ScoringCalculator>>,
}

impl CompoundScoringCalculator {
    pub fn new(calculators: Vec<Arc<dyn ScoringCalculator>>) -> Self {
        Self { calculators }
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.calculators
            .iter()
            .map(|calculator| calculator.name())
            .collect()
    }

    pub fn score_application(&self, application: &CreditApplication) -> u32 {
        self.score(&application.person)
    }
}

impl ScoringCalculator for CompoundScoringCalculator {
    fn name(&self) -> &'static str {
        "compound"
    }

    fn score(&self, person: &Person) -> u32 {
        self.calculators.iter().fold(0u32, |total, calculator| {
            let points = calculator.score(person);
            debug!(rule = calculator.name(), points, "scoring rule applied");
            total.saturating_add(points)
        })
    }
}

impl std::fmt::Debug for CompoundScoringCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompoundScoringCalculator")
            .field("calculators", &self.names())
            .finish()
    }
}
