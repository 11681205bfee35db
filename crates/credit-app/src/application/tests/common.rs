use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::domain::{
    Address, ApplicantKind, ContactData, CreditApplication, Education, Expense, FamilyMember,
    FinanceData, IncomeKind, LoanKind, MaritalStatus, Person, PersonalData, PurposeOfLoan,
    SourceOfIncome,
};
use crate::application::rating::CreditRating;
use crate::application::scoring::{
    CompoundScoringCalculator, PersonScoringSelector, ScoringCalculator,
};
use crate::application::validation::{
    CompoundPostValidator, PostScoringValidator, RequirementNotMet,
};
use crate::application::{CreditApplicationService, CreditPolicy};

pub(super) fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).expect("valid decimal literal")
}

pub(super) fn address() -> Address {
    Address {
        street: "Marszalkowska".to_string(),
        number: "10/4".to_string(),
        zip_code: "00-590".to_string(),
        city: "Warsaw".to_string(),
        country: "Poland".to_string(),
    }
}

pub(super) fn personal_data(education: Education, marital_status: MaritalStatus) -> PersonalData {
    PersonalData {
        name: "Jan".to_string(),
        last_name: "Kowalski".to_string(),
        mothers_maiden_name: "Zielinska".to_string(),
        marital_status,
        education,
    }
}

pub(super) fn finance(incomes: &[(IncomeKind, i64)], expenses: &[i64]) -> FinanceData {
    FinanceData {
        sources_of_income: incomes
            .iter()
            .map(|(kind, amount)| SourceOfIncome {
                kind: *kind,
                monthly_income: Decimal::from(*amount),
            })
            .collect(),
        expenses: expenses
            .iter()
            .enumerate()
            .map(|(index, amount)| Expense {
                name: format!("expense-{index}"),
                amount: Decimal::from(*amount),
            })
            .collect(),
    }
}

pub(super) fn family(size: usize) -> Vec<FamilyMember> {
    (0..size)
        .map(|index| FamilyMember {
            name: format!("member-{index}"),
            age: 10 + index as u8,
        })
        .collect()
}

pub(super) fn natural_person(
    personal_data: PersonalData,
    finance_data: FinanceData,
    family_members: Vec<FamilyMember>,
) -> Person {
    Person::new(
        ApplicantKind::NaturalPerson {
            pesel: "85010112345".to_string(),
        },
        personal_data,
        ContactData::new("jan@example.com", "+48500600700", address(), None),
        finance_data,
        family_members,
    )
}

pub(super) fn self_employed(
    years_since_founded: u32,
    personal_data: PersonalData,
    finance_data: FinanceData,
    family_members: Vec<FamilyMember>,
) -> Person {
    Person::new(
        ApplicantKind::SelfEmployed {
            nip: "5260250274".to_string(),
            regon: "012345678".to_string(),
            years_since_founded,
        },
        personal_data,
        ContactData::new("firma@example.com", "+48600100200", address(), None),
        finance_data,
        family_members,
    )
}

/// Tertiary, married, 10000 income over two sources, 2000 expenses, one family member.
/// Scores 950 with the built-in natural person bundle.
pub(super) fn strong_natural_person() -> Person {
    natural_person(
        personal_data(Education::Tertiary, MaritalStatus::Married),
        finance(
            &[
                (IncomeKind::EmploymentContract, 8000),
                (IncomeKind::Rental, 2000),
            ],
            &[2000],
        ),
        family(1),
    )
}

pub(super) fn application(
    person: Person,
    kind: LoanKind,
    period_months: u32,
    amount: &str,
) -> CreditApplication {
    CreditApplication::new(
        person,
        PurposeOfLoan {
            kind,
            period_months,
            amount: dec(amount),
        },
    )
}

pub(super) fn personal_loan(amount: &str) -> CreditApplication {
    application(strong_natural_person(), LoanKind::PersonalLoan, 60, amount)
}

/// Scoring rule returning a fixed number of points.
pub(super) struct FixedScore(pub u32);

impl ScoringCalculator for FixedScore {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn score(&self, _person: &Person) -> u32 {
        self.0
    }
}

pub(super) fn compound(points: &[u32]) -> CompoundScoringCalculator {
    CompoundScoringCalculator::new(
        points
            .iter()
            .map(|points| Arc::new(FixedScore(*points)) as Arc<dyn ScoringCalculator>)
            .collect(),
    )
}

pub(super) fn fixed_selector(scoring: u32) -> PersonScoringSelector {
    PersonScoringSelector::new(compound(&[scoring]), compound(&[scoring]))
}

/// Rating stub returning a fixed amount and counting invocations.
pub(super) struct FixedRating {
    rating: Decimal,
    calls: AtomicUsize,
}

impl FixedRating {
    pub(super) fn new(rating: &str) -> Self {
        Self {
            rating: dec(rating),
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CreditRating for FixedRating {
    fn rate(&self, _application: &CreditApplication) -> Decimal {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rating
    }
}

/// Validator stub counting invocations and optionally failing.
pub(super) struct RecordingValidator {
    failure: Option<RequirementNotMet>,
    calls: AtomicUsize,
}

impl RecordingValidator {
    pub(super) fn passing() -> Self {
        Self {
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn failing(failure: RequirementNotMet) -> Self {
        Self {
            failure: Some(failure),
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PostScoringValidator for RecordingValidator {
    fn validate(
        &self,
        _application: &CreditApplication,
        _scoring: u32,
    ) -> Result<(), RequirementNotMet> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}

pub(super) fn stubbed_service(
    scoring: u32,
    rating: Arc<FixedRating>,
) -> CreditApplicationService<PersonScoringSelector, FixedRating, CompoundPostValidator> {
    CreditApplicationService::new(
        Arc::new(fixed_selector(scoring)),
        rating,
        Arc::new(CompoundPostValidator::default()),
        &CreditPolicy::default(),
    )
}
