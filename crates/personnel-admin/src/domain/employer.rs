use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::FieldErrors;
use super::names::{company_display_name, generate_full_name};
use super::{matches_exact, matches_search};

pub const DEFAULT_RISK_LEVEL: &str = "LOW";
pub const DEFAULT_CONTACT_METHOD: &str = "EMAIL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployerType {
    Company,
    Individual,
}

impl EmployerType {
    pub const fn label(self) -> &'static str {
        match self {
            EmployerType::Company => "COMPANY",
            EmployerType::Individual => "INDIVIDUAL",
        }
    }
}

/// Persisted employer. Company and individual employers share one flat row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    pub id: i64,
    pub employer_type: EmployerType,
    pub company_name: Option<String>,
    pub trading_name: Option<String>,
    pub registration_number: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: String,
    pub tax_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub contact_person: Option<String>,
    pub publicly_listed: bool,
    pub pension_scheme: bool,
    pub health_insurance: bool,
    pub risk_level: String,
    pub preferred_contact_method: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employer {
    /// Display name for the given variant, computed from this row's name fields.
    pub fn derive_full_name(&self) -> String {
        derive_full_name(
            self.employer_type,
            NameFields {
                company_name: self.company_name.as_deref(),
                trading_name: self.trading_name.as_deref(),
                first_name: self.first_name.as_deref(),
                middle_name: self.middle_name.as_deref(),
                last_name: self.last_name.as_deref(),
            },
        )
    }

    pub fn apply(&mut self, patch: EmployerPatch) {
        merge_patch!(
            self,
            patch;
            required: [
                employer_type,
                publicly_listed,
                pension_scheme,
                health_insurance,
                risk_level,
                preferred_contact_method,
                status,
            ];
            optional: [
                company_name,
                trading_name,
                registration_number,
                industry,
                company_size,
                first_name,
                middle_name,
                last_name,
                tax_id,
                email,
                phone,
                website,
                address,
                city,
                state,
                postal_code,
                country,
                contact_person,
                notes,
            ];
        );
    }

    /// Adds an error for each field the row's variant requires but lacks.
    pub fn check_variant_fields(&self, errors: &mut FieldErrors) {
        match self.employer_type {
            EmployerType::Company => {
                errors.require_text("companyName", self.company_name.as_deref());
            }
            EmployerType::Individual => {
                errors.require_text("firstName", self.first_name.as_deref());
                errors.require_text("lastName", self.last_name.as_deref());
            }
        }
    }
}

/// Borrowed view of the fields that feed an employer's display name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameFields<'a> {
    pub company_name: Option<&'a str>,
    pub trading_name: Option<&'a str>,
    pub first_name: Option<&'a str>,
    pub middle_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

pub fn derive_full_name(employer_type: EmployerType, fields: NameFields<'_>) -> String {
    match employer_type {
        EmployerType::Company => company_display_name(fields.company_name, fields.trading_name),
        EmployerType::Individual => {
            generate_full_name(fields.first_name, fields.middle_name, fields.last_name)
        }
    }
}

/// Company-only identity fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyIdentity {
    pub company_name: Option<String>,
    pub trading_name: Option<String>,
    pub registration_number: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
}

impl CompanyIdentity {
    fn validate(&self, errors: &mut FieldErrors) {
        errors.require_text("companyName", self.company_name.as_deref());
    }
}

/// Individual (sole person) identity fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonIdentity {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

impl PersonIdentity {
    fn validate(&self, errors: &mut FieldErrors) {
        errors.require_text("firstName", self.first_name.as_deref());
        errors.require_text("lastName", self.last_name.as_deref());
    }
}

/// Variant-specific part of a create request, selected by `employerType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "employerType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployerIdentity {
    Company(CompanyIdentity),
    Individual(PersonIdentity),
}

impl EmployerIdentity {
    pub fn employer_type(&self) -> EmployerType {
        match self {
            EmployerIdentity::Company(_) => EmployerType::Company,
            EmployerIdentity::Individual(_) => EmployerType::Individual,
        }
    }

    pub fn validate(&self, errors: &mut FieldErrors) {
        match self {
            EmployerIdentity::Company(company) => company.validate(errors),
            EmployerIdentity::Individual(person) => person.validate(errors),
        }
    }

    pub fn registration_number(&self) -> Option<&str> {
        match self {
            EmployerIdentity::Company(company) => company.registration_number.as_deref(),
            EmployerIdentity::Individual(_) => None,
        }
    }

    pub fn full_name(&self) -> String {
        match self {
            EmployerIdentity::Company(company) => company_display_name(
                company.company_name.as_deref(),
                company.trading_name.as_deref(),
            ),
            EmployerIdentity::Individual(person) => generate_full_name(
                person.first_name.as_deref(),
                person.middle_name.as_deref(),
                person.last_name.as_deref(),
            ),
        }
    }
}

/// Create request: the tagged identity plus the fields common to both variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployer {
    #[serde(flatten)]
    pub identity: EmployerIdentity,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub publicly_listed: Option<bool>,
    #[serde(default)]
    pub pension_scheme: Option<bool>,
    #[serde(default)]
    pub health_insurance: Option<bool>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub preferred_contact_method: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewEmployer {
    /// Request with only the identity set; every other field takes its default.
    pub fn with_identity(identity: EmployerIdentity) -> Self {
        Self {
            identity,
            tax_id: None,
            email: None,
            phone: None,
            website: None,
            address: None,
            city: None,
            state: None,
            postal_code: None,
            country: None,
            contact_person: None,
            publicly_listed: None,
            pension_scheme: None,
            health_insurance: None,
            risk_level: None,
            preferred_contact_method: None,
            status: None,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployerPatch {
    pub employer_type: Option<EmployerType>,
    pub company_name: Option<String>,
    pub trading_name: Option<String>,
    pub registration_number: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub tax_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub contact_person: Option<String>,
    pub publicly_listed: Option<bool>,
    pub pension_scheme: Option<bool>,
    pub health_insurance: Option<bool>,
    pub risk_level: Option<String>,
    pub preferred_contact_method: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl EmployerPatch {
    pub fn changes_name(&self) -> bool {
        self.employer_type.is_some()
            || self.company_name.is_some()
            || self.trading_name.is_some()
            || self.first_name.is_some()
            || self.middle_name.is_some()
            || self.last_name.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployerFilters {
    pub employer_type: Option<EmployerType>,
    pub status: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub risk_level: Option<String>,
    pub search: Option<String>,
}

impl EmployerFilters {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, employer: &Employer) -> bool {
        self.employer_type
            .map_or(true, |kind| employer.employer_type == kind)
            && matches_exact(self.status.as_deref(), Some(employer.status.as_str()))
            && matches_exact(self.industry.as_deref(), employer.industry.as_deref())
            && matches_exact(self.country.as_deref(), employer.country.as_deref())
            && matches_exact(self.risk_level.as_deref(), Some(employer.risk_level.as_str()))
            && matches_search(
                self.search.as_deref(),
                &[
                    Some(employer.full_name.as_str()),
                    employer.email.as_deref(),
                    employer.registration_number.as_deref(),
                    employer.trading_name.as_deref(),
                ],
            )
    }
}
