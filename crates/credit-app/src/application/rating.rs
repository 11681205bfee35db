use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;

use super::domain::{CreditApplication, LoanKind};
use super::policy::CreditPolicy;

const MONTHS_PER_YEAR: u32 = 12;

/// Computes the maximum amount the bank is willing to lend for an application.
///
/// External lookups (credit bureaus and the like) belong behind this trait.
pub trait CreditRating: Send + Sync {
    fn rate(&self, application: &CreditApplication) -> Decimal;
}

/// Rounds a monetary figure for presentation and pins it to two decimals, so whole amounts
/// render as `288000.00`. Computations keep full precision.
pub fn round_for_display(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Income based rating: `income per family member x 12 x period x loan factor`.
#[derive(Debug, Clone)]
pub struct CreditRatingCalculator {
    personal_loan_factor: Decimal,
    mortgage_factor: Decimal,
}

impl CreditRatingCalculator {
    pub fn new(personal_loan_factor: Decimal, mortgage_factor: Decimal) -> Self {
        Self {
            personal_loan_factor,
            mortgage_factor,
        }
    }

    pub fn from_policy(policy: &CreditPolicy) -> Self {
        Self::new(policy.personal_loan_rate_factor, policy.mortgage_rate_factor)
    }

    pub fn factor_for(&self, kind: LoanKind) -> Decimal {
        match kind {
            LoanKind::PersonalLoan => self.personal_loan_factor,
            LoanKind::Mortgage => self.mortgage_factor,
        }
    }
}

impl Default for CreditRatingCalculator {
    fn default() -> Self {
        Self::from_policy(&CreditPolicy::default())
    }
}

impl CreditRating for CreditRatingCalculator {
    fn rate(&self, application: &CreditApplication) -> Decimal {
        let purpose = &application.purpose_of_loan;
        let rating = application.person.income_per_family_member()
            * Decimal::from(MONTHS_PER_YEAR)
            * Decimal::from(purpose.period_months)
            * self.factor_for(purpose.kind);

        info!(
            loan = purpose.kind.label(),
            rating = %round_for_display(rating),
            "calculated credit rating"
        );
        rating
    }
}
