use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Scoring below this value is rejected outright.
pub const NEGATIVE_SCORING_THRESHOLD: u32 = 300;
/// Scoring up to and including this value requires a consultant to follow up.
pub const CONTACT_REQUIRED_CEILING: u32 = 400;

/// Share of the yearly-equivalent income the bank is willing to lend for a personal loan.
pub const PERSONAL_LOAN_RATE_FACTOR: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
/// Share of the yearly-equivalent income the bank is willing to lend for a mortgage.
pub const MORTGAGE_RATE_FACTOR: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

/// Maximum share of monthly income that may be consumed by declared expenses.
pub const MAX_EXPENSE_TO_INCOME_RATIO: Decimal = Decimal::from_parts(4, 0, 0, false, 1);
/// Smallest amount the bank lends as a mortgage.
pub const MIN_MORTGAGE_LOAN_AMOUNT: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Fixed lending policy shared by the rating calculator and post-scoring checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditPolicy {
    pub negative_scoring_threshold: u32,
    pub contact_required_ceiling: u32,
    pub personal_loan_rate_factor: Decimal,
    pub mortgage_rate_factor: Decimal,
    pub max_expense_to_income_ratio: Decimal,
    pub min_mortgage_loan_amount: Decimal,
}

impl Default for CreditPolicy {
    fn default() -> Self {
        Self {
            negative_scoring_threshold: NEGATIVE_SCORING_THRESHOLD,
            contact_required_ceiling: CONTACT_REQUIRED_CEILING,
            personal_loan_rate_factor: PERSONAL_LOAN_RATE_FACTOR,
            mortgage_rate_factor: MORTGAGE_RATE_FACTOR,
            max_expense_to_income_ratio: MAX_EXPENSE_TO_INCOME_RATIO,
            min_mortgage_loan_amount: MIN_MORTGAGE_LOAN_AMOUNT,
        }
    }
}
