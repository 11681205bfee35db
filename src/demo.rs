use credit_app::application::{
    Address, ApplicantKind, ContactData, CreditApplication, DecisionType, Education, Expense,
    FamilyMember, FinanceData, IncomeKind, LoanKind, MaritalStatus, Person, PersonalData,
    PurposeOfLoan, SourceOfIncome, StandardCreditApplicationService,
};
use credit_app::config::OutputFormat;
use credit_app::error::AppError;
use rust_decimal::Decimal;

use crate::render_decision;

/// Sample application together with the outcome it is built to reach.
pub(crate) struct DemoCase {
    pub(crate) label: &'static str,
    pub(crate) expected: DecisionType,
    pub(crate) application: CreditApplication,
}

pub(crate) fn run_demo(
    service: &StandardCreditApplicationService,
    format: OutputFormat,
) -> Result<(), AppError> {
    println!("Credit decision demo");
    for case in demo_cases() {
        let decision = service.decide(&case.application);
        println!("\n{} (expected {})", case.label, case.expected.label());
        println!("{}", render_decision(&decision, format)?);
    }
    Ok(())
}

pub(crate) fn demo_cases() -> Vec<DemoCase> {
    vec![
        DemoCase {
            label: "Salaried couple, personal loan",
            expected: DecisionType::Positive,
            application: loan(
                natural_person(
                    "Anna",
                    "Nowak",
                    Education::Tertiary,
                    MaritalStatus::Married,
                    &[(IncomeKind::EmploymentContract, 8_000), (IncomeKind::Rental, 2_000)],
                    2_000,
                    vec![member("Piotr", 36)],
                ),
                LoanKind::PersonalLoan,
                60,
                120_000,
            ),
        },
        DemoCase {
            label: "Low income, no formal education",
            expected: DecisionType::NegativeScoring,
            application: loan(
                natural_person(
                    "Karol",
                    "Baran",
                    Education::None,
                    MaritalStatus::Divorced,
                    &[(IncomeKind::Other, 3_000)],
                    1_500,
                    vec![member("Lena", 7)],
                ),
                LoanKind::PersonalLoan,
                24,
                10_000,
            ),
        },
        DemoCase {
            label: "Borderline scoring",
            expected: DecisionType::ContactRequired,
            application: loan(
                natural_person(
                    "Ewa",
                    "Duda",
                    Education::Middle,
                    MaritalStatus::Single,
                    &[(IncomeKind::EmploymentContract, 2_500)],
                    500,
                    Vec::new(),
                ),
                LoanKind::PersonalLoan,
                24,
                10_000,
            ),
        },
        DemoCase {
            label: "Short period, large amount",
            expected: DecisionType::NegativeRating,
            application: loan(
                natural_person(
                    "Adam",
                    "Lis",
                    Education::Tertiary,
                    MaritalStatus::Married,
                    &[(IncomeKind::EmploymentContract, 8_000), (IncomeKind::Rental, 2_000)],
                    2_000,
                    vec![member("Ola", 34)],
                ),
                LoanKind::PersonalLoan,
                12,
                300_000,
            ),
        },
        DemoCase {
            label: "Expenses above policy share of income",
            expected: DecisionType::NegativeRequirementsNotMet,
            application: loan(
                natural_person(
                    "Marta",
                    "Zajac",
                    Education::Tertiary,
                    MaritalStatus::Single,
                    &[(IncomeKind::EmploymentContract, 10_000)],
                    5_000,
                    Vec::new(),
                ),
                LoanKind::PersonalLoan,
                24,
                10_000,
            ),
        },
        DemoCase {
            label: "Self-employed mortgage below the minimum amount",
            expected: DecisionType::NegativeRequirementsNotMet,
            application: loan(self_employed(6), LoanKind::Mortgage, 240, 60_000),
        },
        DemoCase {
            label: "Self-employed mortgage",
            expected: DecisionType::Positive,
            application: loan(self_employed(6), LoanKind::Mortgage, 240, 400_000),
        },
    ]
}

fn address() -> Address {
    Address {
        street: "Piotrkowska".to_string(),
        number: "104".to_string(),
        zip_code: "90-926".to_string(),
        city: "Lodz".to_string(),
        country: "Poland".to_string(),
    }
}

fn member(name: &str, age: u8) -> FamilyMember {
    FamilyMember {
        name: name.to_string(),
        age,
    }
}

fn natural_person(
    name: &str,
    last_name: &str,
    education: Education,
    marital_status: MaritalStatus,
    incomes: &[(IncomeKind, i64)],
    expenses: i64,
    family_members: Vec<FamilyMember>,
) -> Person {
    Person::new(
        ApplicantKind::NaturalPerson {
            pesel: "88041512345".to_string(),
        },
        PersonalData {
            name: name.to_string(),
            last_name: last_name.to_string(),
            mothers_maiden_name: "Kaminska".to_string(),
            marital_status,
            education,
        },
        ContactData::new(
            format!("{}@example.com", name.to_lowercase()),
            "+48501234567",
            address(),
            None,
        ),
        FinanceData {
            sources_of_income: incomes
                .iter()
                .map(|(kind, amount)| SourceOfIncome {
                    kind: *kind,
                    monthly_income: Decimal::from(*amount),
                })
                .collect(),
            expenses: vec![Expense {
                name: "household".to_string(),
                amount: Decimal::from(expenses),
            }],
        },
        family_members,
    )
}

fn self_employed(years_since_founded: u32) -> Person {
    Person::new(
        ApplicantKind::SelfEmployed {
            nip: "7251801126".to_string(),
            regon: "473142380".to_string(),
            years_since_founded,
        },
        PersonalData {
            name: "Tomasz".to_string(),
            last_name: "Mazur".to_string(),
            mothers_maiden_name: "Krawczyk".to_string(),
            marital_status: MaritalStatus::Married,
            education: Education::PostSecondary,
        },
        ContactData::new("biuro@mazur.example.com", "+48421234567", address(), Some(address())),
        FinanceData {
            sources_of_income: vec![SourceOfIncome {
                kind: IncomeKind::SelfEmployment,
                monthly_income: Decimal::from(12_000),
            }],
            expenses: vec![Expense {
                name: "office lease".to_string(),
                amount: Decimal::from(3_000),
            }],
        },
        vec![member("Kasia", 9), member("Ewa", 38)],
    )
}

fn loan(person: Person, kind: LoanKind, period_months: u32, amount: i64) -> CreditApplication {
    CreditApplication::new(
        person,
        PurposeOfLoan {
            kind,
            period_months,
            amount: Decimal::from(amount),
        },
    )
}
