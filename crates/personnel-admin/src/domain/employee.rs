use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{matches_exact, matches_search};

/// Persisted employee record. `id` and timestamps are owned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub emp_id: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub alternate_phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub nationality: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub national_id: Option<String>,
    pub tax_id: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub highest_education: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub employer_id: Option<i64>,
    pub employment_type: Option<String>,
    pub salary: Option<f64>,
    pub currency: String,
    pub bank_name: Option<String>,
    pub bank_account_number: Option<String>,
    pub status: String,
    pub hire_date: Option<NaiveDate>,
    pub confirmation_date: Option<NaiveDate>,
    pub termination_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Applies a patch; derived fields are the caller's responsibility.
    pub fn apply(&mut self, patch: EmployeePatch) {
        merge_patch!(
            self,
            patch;
            required: [emp_id, first_name, last_name, email, currency, status];
            optional: [
                middle_name,
                phone,
                alternate_phone,
                date_of_birth,
                gender,
                marital_status,
                nationality,
                address,
                city,
                state,
                postal_code,
                country,
                national_id,
                tax_id,
                emergency_contact_name,
                emergency_contact_phone,
                emergency_contact_relationship,
                highest_education,
                institution,
                department,
                position,
                employer_id,
                employment_type,
                salary,
                bank_name,
                bank_account_number,
                hire_date,
                confirmation_date,
                termination_date,
                notes,
            ];
        );
    }
}

/// Create request. Required fields are optional here so every gap is reported at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEmployee {
    pub emp_id: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub alternate_phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub nationality: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub national_id: Option<String>,
    pub tax_id: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub highest_education: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub employer_id: Option<i64>,
    pub employment_type: Option<String>,
    pub salary: Option<f64>,
    pub currency: Option<String>,
    pub bank_name: Option<String>,
    pub bank_account_number: Option<String>,
    pub status: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub confirmation_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeePatch {
    pub emp_id: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub alternate_phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub nationality: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub national_id: Option<String>,
    pub tax_id: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub highest_education: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub employer_id: Option<i64>,
    pub employment_type: Option<String>,
    pub salary: Option<f64>,
    pub currency: Option<String>,
    pub bank_name: Option<String>,
    pub bank_account_number: Option<String>,
    pub status: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub confirmation_date: Option<NaiveDate>,
    pub termination_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl EmployeePatch {
    pub fn changes_name(&self) -> bool {
        self.first_name.is_some() || self.middle_name.is_some() || self.last_name.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeFilters {
    pub status: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub employer_id: Option<i64>,
    pub search: Option<String>,
}

impl EmployeeFilters {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        matches_exact(self.status.as_deref(), Some(employee.status.as_str()))
            && matches_exact(self.department.as_deref(), employee.department.as_deref())
            && matches_exact(self.position.as_deref(), employee.position.as_deref())
            && self
                .employer_id
                .map_or(true, |id| employee.employer_id == Some(id))
            && matches_search(
                self.search.as_deref(),
                &[
                    Some(employee.full_name.as_str()),
                    Some(employee.email.as_str()),
                    Some(employee.emp_id.as_str()),
                ],
            )
    }
}
