//! Credit application decision pipeline.
//!
//! Scoring bundles are selected per applicant kind, summed, and gated by two thresholds. Above
//! the contact threshold the post-scoring business rules run and, when they pass, the credit
//! rating is compared against the requested amount.

pub mod decision;
pub mod domain;
pub mod policy;
pub mod rating;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use decision::{CreditApplicationDecision, DecisionType};
pub use domain::{
    Address, ApplicantKind, ContactData, CreditApplication, Education, Expense, FamilyMember,
    FinanceData, IncomeKind, LoanKind, MaritalStatus, Person, PersonalData, PurposeOfLoan,
    SourceOfIncome,
};
pub use policy::CreditPolicy;
pub use rating::{round_for_display, CreditRating, CreditRatingCalculator};
pub use scoring::{
    CompoundScoringCalculator, PersonScoringSelector, ScoringCalculator, ScoringSelector,
};
pub use service::{CreditApplicationService, StandardCreditApplicationService};
pub use validation::{
    CompoundPostValidator, ExpenseRatioCheck, MortgageDownPaymentCheck, PostScoringCheck,
    PostScoringValidator, RequirementNotMet, RequirementNotMetCause,
};
