use super::common::*;
use crate::application::domain::{Education, IncomeKind, LoanKind, MaritalStatus};
use crate::application::validation::{
    CompoundPostValidator, ExpenseRatioCheck, MortgageDownPaymentCheck, PostScoringCheck,
    PostScoringValidator, RequirementNotMet, RequirementNotMetCause,
};

fn applicant_with(income: i64, expenses: i64) -> crate::application::domain::Person {
    natural_person(
        personal_data(Education::Tertiary, MaritalStatus::Single),
        finance(&[(IncomeKind::EmploymentContract, income)], &[expenses]),
        Vec::new(),
    )
}

#[test]
fn expense_ratio_allows_expenses_at_the_limit() {
    let check = ExpenseRatioCheck::new(dec("0.4"));
    let application = application(
        applicant_with(10_000, 4_000),
        LoanKind::PersonalLoan,
        24,
        "20000",
    );

    assert_eq!(check.check(&application, 500), Ok(()));
}

#[test]
fn expense_ratio_rejects_expenses_above_the_limit() {
    let check = ExpenseRatioCheck::new(dec("0.4"));
    let application = application(
        applicant_with(10_000, 4_001),
        LoanKind::PersonalLoan,
        24,
        "20000",
    );

    let failure = check.check(&application, 500).expect_err("ratio exceeded");
    assert_eq!(failure.cause(), RequirementNotMetCause::TooHighExpenses);
    assert_eq!(
        failure,
        RequirementNotMet::TooHighExpenses {
            expenses: dec("4001"),
            income: dec("10000"),
            max_ratio: dec("0.4"),
        }
    );
}

#[test]
fn expense_ratio_rejects_any_expense_without_income() {
    let check = ExpenseRatioCheck::new(dec("0.4"));
    let application = application(applicant_with(0, 1), LoanKind::PersonalLoan, 24, "20000");

    assert!(check.check(&application, 500).is_err());
}

#[test]
fn down_payment_check_only_applies_to_mortgages() {
    let check = MortgageDownPaymentCheck::new(dec("100000"));
    let person = applicant_with(10_000, 1_000);

    let small_mortgage = application(person.clone(), LoanKind::Mortgage, 240, "99999.99");
    let failure = check.check(&small_mortgage, 500).expect_err("below minimum");
    assert_eq!(failure.cause(), RequirementNotMetCause::TooLowDownAmount);

    let minimum_mortgage = application(person.clone(), LoanKind::Mortgage, 240, "100000");
    assert!(check.check(&minimum_mortgage, 500).is_ok());

    let small_loan = application(person, LoanKind::PersonalLoan, 24, "5000");
    assert!(check.check(&small_loan, 500).is_ok());
}

#[test]
fn compound_validator_stops_at_first_failure() {
    let validator = CompoundPostValidator::default();
    // Both rules fail: expenses at 50% of income and a mortgage below the minimum.
    let application = application(applicant_with(10_000, 5_000), LoanKind::Mortgage, 240, "50000");

    let failure = validator
        .validate(&application, 450)
        .expect_err("requirements fail");
    assert_eq!(failure.cause(), RequirementNotMetCause::TooHighExpenses);
    assert_eq!(
        validator.check_names(),
        vec!["expense_ratio", "mortgage_down_payment"]
    );
}

#[test]
fn compound_validator_passes_healthy_mortgage() {
    let validator = CompoundPostValidator::default();
    let application = application(applicant_with(10_000, 2_000), LoanKind::Mortgage, 240, "300000");

    assert_eq!(validator.validate(&application, 450), Ok(()));
}
