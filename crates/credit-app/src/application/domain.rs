use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Highest completed education level, each level worth a fixed number of scoring points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Education {
    None,
    Primary,
    Middle,
    PostSecondary,
    Tertiary,
}

impl Education {
    pub fn scoring_points(self) -> u32 {
        match self {
            Education::None => 0,
            Education::Primary => 50,
            Education::Middle => 100,
            Education::PostSecondary => 150,
            Education::Tertiary => 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    Separated,
}

impl MaritalStatus {
    pub fn scoring_points(self) -> u32 {
        match self {
            MaritalStatus::Single => 100,
            MaritalStatus::Married => 200,
            MaritalStatus::Divorced => 50,
            MaritalStatus::Widowed => 100,
            MaritalStatus::Separated => 50,
        }
    }
}

/// Identity and background of the applicant, echoed back on every decision for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalData {
    pub name: String,
    pub last_name: String,
    pub mothers_maiden_name: String,
    pub marital_status: MaritalStatus,
    pub education: Education,
}

impl PersonalData {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

/// Contact channels. A correspondence address identical to the home address is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContactDataInput")]
pub struct ContactData {
    email: String,
    phone_number: String,
    home_address: Address,
    correspondence_address: Option<Address>,
}

impl ContactData {
    pub fn new(
        email: impl Into<String>,
        phone_number: impl Into<String>,
        home_address: Address,
        correspondence_address: Option<Address>,
    ) -> Self {
        let correspondence_address =
            correspondence_address.filter(|address| *address != home_address);

        Self {
            email: email.into(),
            phone_number: phone_number.into(),
            home_address,
            correspondence_address,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn home_address(&self) -> &Address {
        &self.home_address
    }

    pub fn correspondence_address(&self) -> Option<&Address> {
        self.correspondence_address.as_ref()
    }
}

#[derive(Deserialize)]
struct ContactDataInput {
    email: String,
    phone_number: String,
    home_address: Address,
    #[serde(default)]
    correspondence_address: Option<Address>,
}

impl From<ContactDataInput> for ContactData {
    fn from(input: ContactDataInput) -> Self {
        ContactData::new(
            input.email,
            input.phone_number,
            input.home_address,
            input.correspondence_address,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeKind {
    EmploymentContract,
    SelfEmployment,
    Retirement,
    Rental,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOfIncome {
    pub kind: IncomeKind,
    pub monthly_income: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceData {
    #[serde(default)]
    pub sources_of_income: Vec<SourceOfIncome>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl FinanceData {
    pub fn total_monthly_income(&self) -> Decimal {
        self.sources_of_income
            .iter()
            .map(|source| source.monthly_income)
            .sum()
    }

    pub fn total_expenses(&self) -> Decimal {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }
}

/// Household member counted as a dependant of the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub name: String,
    pub age: u8,
}

impl Ord for FamilyMember {
    fn cmp(&self, other: &Self) -> Ordering {
        self.age
            .cmp(&other.age)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for FamilyMember {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Kind-specific identification. Every kind-dependent rule matches on this tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApplicantKind {
    NaturalPerson {
        pesel: String,
    },
    SelfEmployed {
        nip: String,
        regon: String,
        years_since_founded: u32,
    },
}

impl ApplicantKind {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicantKind::NaturalPerson { .. } => "natural_person",
            ApplicantKind::SelfEmployed { .. } => "self_employed",
        }
    }
}

/// Loan applicant. Family members are kept in natural order (age, then name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PersonInput")]
pub struct Person {
    kind: ApplicantKind,
    personal_data: PersonalData,
    contact_data: ContactData,
    finance_data: FinanceData,
    family_members: Vec<FamilyMember>,
}

impl Person {
    /// Builds a person, normalizing `family_members` into their natural order.
    pub fn new(
        kind: ApplicantKind,
        personal_data: PersonalData,
        contact_data: ContactData,
        finance_data: FinanceData,
        family_members: Vec<FamilyMember>,
    ) -> Self {
        let mut family_members = family_members;
        family_members.sort();

        Self {
            kind,
            personal_data,
            contact_data,
            finance_data,
            family_members,
        }
    }

    pub fn kind(&self) -> &ApplicantKind {
        &self.kind
    }

    pub fn personal_data(&self) -> &PersonalData {
        &self.personal_data
    }

    pub fn contact_data(&self) -> &ContactData {
        &self.contact_data
    }

    pub fn finance_data(&self) -> &FinanceData {
        &self.finance_data
    }

    pub fn family_members(&self) -> &[FamilyMember] {
        &self.family_members
    }

    pub fn family_members_sorted_by_name(&self) -> Vec<FamilyMember> {
        let mut members = self.family_members.clone();
        members.sort_by(|left, right| left.name.cmp(&right.name));
        members
    }

    /// The applicant counts as one dependant.
    pub fn number_of_dependants(&self) -> usize {
        1 + self.family_members.len()
    }

    pub fn balance(&self) -> Decimal {
        self.finance_data.total_monthly_income() - self.finance_data.total_expenses()
    }

    pub fn income_per_family_member(&self) -> Decimal {
        self.balance() / Decimal::from(self.number_of_dependants())
    }
}

#[derive(Deserialize)]
struct PersonInput {
    kind: ApplicantKind,
    personal_data: PersonalData,
    contact_data: ContactData,
    #[serde(default)]
    finance_data: FinanceData,
    #[serde(default)]
    family_members: Vec<FamilyMember>,
}

impl From<PersonInput> for Person {
    fn from(input: PersonInput) -> Self {
        Person::new(
            input.kind,
            input.personal_data,
            input.contact_data,
            input.finance_data,
            input.family_members,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanKind {
    PersonalLoan,
    Mortgage,
}

impl LoanKind {
    pub fn label(self) -> &'static str {
        match self {
            LoanKind::PersonalLoan => "personal_loan",
            LoanKind::Mortgage => "mortgage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurposeOfLoan {
    pub kind: LoanKind,
    pub period_months: u32,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditApplication {
    pub person: Person,
    pub purpose_of_loan: PurposeOfLoan,
}

impl CreditApplication {
    pub fn new(person: Person, purpose_of_loan: PurposeOfLoan) -> Self {
        Self {
            person,
            purpose_of_loan,
        }
    }
}
