use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::PersonalData;
use super::rating::round_for_display;
use super::validation::{RequirementNotMet, RequirementNotMetCause};

/// Terminal outcome of a credit decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionType {
    Positive,
    NegativeScoring,
    ContactRequired,
    NegativeRating,
    NegativeRequirementsNotMet,
}

impl DecisionType {
    pub fn label(self) -> &'static str {
        match self {
            DecisionType::Positive => "POSITIVE",
            DecisionType::NegativeScoring => "NEGATIVE_SCORING",
            DecisionType::ContactRequired => "CONTACT_REQUIRED",
            DecisionType::NegativeRating => "NEGATIVE_RATING",
            DecisionType::NegativeRequirementsNotMet => "NEGATIVE_REQUIREMENTS_NOT_MET",
        }
    }
}

/// Immutable decision with everything needed to explain it to the applicant.
/// Built only through the outcome constructors, so it is serialized but never deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditApplicationDecision {
    decision_type: DecisionType,
    personal_data: PersonalData,
    #[serde(skip_serializing_if = "Option::is_none")]
    credit_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scoring: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    requirement_not_met: Option<RequirementNotMet>,
}

impl CreditApplicationDecision {
    pub fn positive(personal_data: PersonalData, scoring: u32, credit_rate: Decimal) -> Self {
        Self::new(
            DecisionType::Positive,
            personal_data,
            Some(credit_rate),
            Some(scoring),
            None,
        )
    }

    pub fn negative_scoring(personal_data: PersonalData, scoring: u32) -> Self {
        Self::new(
            DecisionType::NegativeScoring,
            personal_data,
            None,
            Some(scoring),
            None,
        )
    }

    pub fn contact_required(personal_data: PersonalData, scoring: u32) -> Self {
        Self::new(
            DecisionType::ContactRequired,
            personal_data,
            None,
            Some(scoring),
            None,
        )
    }

    pub fn negative_rating(
        personal_data: PersonalData,
        scoring: u32,
        credit_rate: Decimal,
    ) -> Self {
        Self::new(
            DecisionType::NegativeRating,
            personal_data,
            Some(credit_rate),
            Some(scoring),
            None,
        )
    }

    pub fn requirements_not_met(
        personal_data: PersonalData,
        scoring: u32,
        requirement: RequirementNotMet,
    ) -> Self {
        Self::new(
            DecisionType::NegativeRequirementsNotMet,
            personal_data,
            None,
            Some(scoring),
            Some(requirement),
        )
    }

    fn new(
        decision_type: DecisionType,
        personal_data: PersonalData,
        credit_rate: Option<Decimal>,
        scoring: Option<u32>,
        requirement_not_met: Option<RequirementNotMet>,
    ) -> Self {
        Self {
            decision_type,
            personal_data,
            credit_rate,
            scoring,
            requirement_not_met,
        }
    }

    pub fn decision_type(&self) -> DecisionType {
        self.decision_type
    }

    pub fn personal_data(&self) -> &PersonalData {
        &self.personal_data
    }

    /// Unrounded rating; use [`round_for_display`] before showing it.
    pub fn credit_rate(&self) -> Option<Decimal> {
        self.credit_rate
    }

    pub fn scoring(&self) -> Option<u32> {
        self.scoring
    }

    pub fn requirement_not_met(&self) -> Option<&RequirementNotMet> {
        self.requirement_not_met.as_ref()
    }

    pub fn requirement_not_met_cause(&self) -> Option<RequirementNotMetCause> {
        self.requirement_not_met.as_ref().map(RequirementNotMet::cause)
    }

    /// Human readable explanation of the decision.
    ///
    /// # Panics
    ///
    /// When a requirements-not-met decision carries no failed requirement, or a rating decision
    /// carries no rate. Both are construction defects.
    pub fn message(&self) -> String {
        let full_name = self.personal_data.full_name();
        match self.decision_type {
            DecisionType::Positive => {
                format!("Congratulations {full_name}, decision is positive")
            }
            DecisionType::NegativeScoring => format!("Sorry {full_name}, decision is negative"),
            DecisionType::ContactRequired => format!(
                "Sorry {full_name}, bank requires additional documents. \
                 Our consultant will contact you."
            ),
            DecisionType::NegativeRating => match self.credit_rate {
                Some(rate) => format!(
                    "Sorry {full_name}, decision is negative. Bank can lend only {}",
                    round_for_display(rate)
                ),
                None => unreachable!("negative rating decision without a credit rate"),
            },
            DecisionType::NegativeRequirementsNotMet => match &self.requirement_not_met {
                Some(RequirementNotMet::TooHighExpenses { .. }) => format!(
                    "Sorry {full_name}, decision is negative. Personal expenses are too high"
                ),
                Some(RequirementNotMet::TooLowDownAmount { minimum, .. }) => format!(
                    "Sorry {full_name}, decision is negative. \
                     Minimum loan amount for mortgage is {}",
                    round_for_display(*minimum)
                ),
                None => unreachable!("requirements not met without a failed requirement"),
            },
        }
    }
}
