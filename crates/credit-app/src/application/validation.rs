use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::{CreditApplication, LoanKind};
use super::policy::CreditPolicy;

/// Business rule that failed after scoring cleared the approval threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequirementNotMetCause {
    TooHighExpenses,
    TooLowDownAmount,
}

/// Failure signal raised by a post-scoring check, with the figures that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RequirementNotMet {
    #[error("expenses {expenses} exceed {max_ratio} of monthly income {income}")]
    TooHighExpenses {
        expenses: Decimal,
        income: Decimal,
        max_ratio: Decimal,
    },
    #[error("requested mortgage amount {requested} is below the minimum {minimum}")]
    TooLowDownAmount { requested: Decimal, minimum: Decimal },
}

impl RequirementNotMet {
    pub fn cause(&self) -> RequirementNotMetCause {
        match self {
            RequirementNotMet::TooHighExpenses { .. } => RequirementNotMetCause::TooHighExpenses,
            RequirementNotMet::TooLowDownAmount { .. } => RequirementNotMetCause::TooLowDownAmount,
        }
    }
}

/// One post-scoring business rule.
pub trait PostScoringCheck: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, application: &CreditApplication, scoring: u32)
        -> Result<(), RequirementNotMet>;
}

/// Validator consulted by the decision service once scoring is above the approval threshold.
pub trait PostScoringValidator: Send + Sync {
    fn validate(
        &self,
        application: &CreditApplication,
        scoring: u32,
    ) -> Result<(), RequirementNotMet>;
}

/// Rejects applicants whose declared expenses eat too much of their income.
#[derive(Debug, Clone)]
pub struct ExpenseRatioCheck {
    max_ratio: Decimal,
}

impl ExpenseRatioCheck {
    pub fn new(max_ratio: Decimal) -> Self {
        Self { max_ratio }
    }
}

impl PostScoringCheck for ExpenseRatioCheck {
    fn name(&self) -> &'static str {
        "expense_ratio"
    }

    fn check(
        &self,
        application: &CreditApplication,
        _scoring: u32,
    ) -> Result<(), RequirementNotMet> {
        let finance = application.person.finance_data();
        let income = finance.total_monthly_income();
        let expenses = finance.total_expenses();

        if expenses > income * self.max_ratio {
            return Err(RequirementNotMet::TooHighExpenses {
                expenses,
                income,
                max_ratio: self.max_ratio,
            });
        }

        Ok(())
    }
}

/// Mortgages below the minimum loan amount are rejected. Other loan kinds pass.
#[derive(Debug, Clone)]
pub struct MortgageDownPaymentCheck {
    minimum: Decimal,
}

impl MortgageDownPaymentCheck {
    pub fn new(minimum: Decimal) -> Self {
        Self { minimum }
    }
}

impl PostScoringCheck for MortgageDownPaymentCheck {
    fn name(&self) -> &'static str {
        "mortgage_down_payment"
    }

    fn check(
        &self,
        application: &CreditApplication,
        _scoring: u32,
    ) -> Result<(), RequirementNotMet> {
        let purpose = &application.purpose_of_loan;
        match purpose.kind {
            LoanKind::Mortgage if purpose.amount < self.minimum => {
                Err(RequirementNotMet::TooLowDownAmount {
                    requested: purpose.amount,
                    minimum: self.minimum,
                })
            }
            LoanKind::Mortgage | LoanKind::PersonalLoan => Ok(()),
        }
    }
}

/// Ordered checks; the first failure wins.
pub struct CompoundPostValidator {
    checks: Vec<Box<dyn PostScoringCheck>>,
}

impl CompoundPostValidator {
    pub fn new(checks: Vec<Box<dyn PostScoringCheck>>) -> Self {
        Self { checks }
    }

    pub fn from_policy(policy: &CreditPolicy) -> Self {
        Self::new(vec![
            Box::new(ExpenseRatioCheck::new(policy.max_expense_to_income_ratio)),
            Box::new(MortgageDownPaymentCheck::new(policy.min_mortgage_loan_amount)),
        ])
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|check| check.name()).collect()
    }
}

impl Default for CompoundPostValidator {
    fn default() -> Self {
        Self::from_policy(&CreditPolicy::default())
    }
}

impl PostScoringValidator for CompoundPostValidator {
    fn validate(
        &self,
        application: &CreditApplication,
        scoring: u32,
    ) -> Result<(), RequirementNotMet> {
        for check in &self.checks {
            check.check(application, scoring)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for CompoundPostValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompoundPostValidator")
            .field("checks", &self.check_names())
            .finish()
    }
}
