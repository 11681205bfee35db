use std::sync::Arc;

use super::super::domain::{ApplicantKind, Person};
use super::rules::{
    BusinessSeniorityCalculator, EducationCalculator, IncomeCalculator, IncomeSourcesCalculator,
    MaritalStatusCalculator,
};
use super::CompoundScoringCalculator;

/// Picks the scoring bundle that applies to an applicant.
pub trait ScoringSelector: Send + Sync {
    fn select(&self, person: &Person) -> &CompoundScoringCalculator;
}

/// Fixed, read-only table with one bundle per applicant kind.
#[derive(Debug, Clone)]
pub struct PersonScoringSelector {
    natural_person: CompoundScoringCalculator,
    self_employed: CompoundScoringCalculator,
}

impl PersonScoringSelector {
    /// Panics when a bundle is empty: every applicant kind must be scored by something.
    pub fn new(
        natural_person: CompoundScoringCalculator,
        self_employed: CompoundScoringCalculator,
    ) -> Self {
        assert!(
            !natural_person.is_empty(),
            "natural person scoring bundle must not be empty"
        );
        assert!(
            !self_employed.is_empty(),
            "self-employed scoring bundle must not be empty"
        );

        Self {
            natural_person,
            self_employed,
        }
    }
}

impl Default for PersonScoringSelector {
    fn default() -> Self {
        let natural_person = CompoundScoringCalculator::new(vec![
            Arc::new(EducationCalculator),
            Arc::new(MaritalStatusCalculator),
            Arc::new(IncomeCalculator),
            Arc::new(IncomeSourcesCalculator),
        ]);
        let self_employed = CompoundScoringCalculator::new(vec![
            Arc::new(EducationCalculator),
            Arc::new(MaritalStatusCalculator),
            Arc::new(IncomeCalculator),
            Arc::new(BusinessSeniorityCalculator),
        ]);

        Self::new(natural_person, self_employed)
    }
}

impl ScoringSelector for PersonScoringSelector {
    fn select(&self, person: &Person) -> &CompoundScoringCalculator {
        match person.kind() {
            ApplicantKind::NaturalPerson { .. } => &self.natural_person,
            ApplicantKind::SelfEmployed { .. } => &self.self_employed,
        }
    }
}
