use serde::Serialize;

use super::{iso_date, iso_timestamp};
use crate::domain::Employee;
use crate::repository::StatusCount;
use crate::use_cases::employee::EmployeeListWithStats;

/// Summary row used by listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponseDto {
    pub id: i64,
    pub emp_id: String,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub employer_id: Option<i64>,
    pub employment_type: Option<String>,
    pub status: String,
    pub hire_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Employee> for EmployeeResponseDto {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            emp_id: employee.emp_id.clone(),
            full_name: employee.full_name.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            employer_id: employee.employer_id,
            employment_type: employee.employment_type.clone(),
            status: employee.status.clone(),
            hire_date: iso_date(employee.hire_date),
            created_at: iso_timestamp(employee.created_at),
            updated_at: iso_timestamp(employee.updated_at),
        }
    }
}

/// Every employee field, for detail screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedEmployeeResponseDto {
    pub id: i64,
    pub emp_id: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub alternate_phone: Option<String>,
    pub date_of_birth: Option<String>,
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
    pub hire_date: Option<String>,
    pub confirmation_date: Option<String>,
    pub termination_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Employee> for DetailedEmployeeResponseDto {
    fn from(employee: &Employee) -> Self {
        Self::from(employee.clone())
    }
}

impl From<Employee> for DetailedEmployeeResponseDto {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            emp_id: employee.emp_id,
            first_name: employee.first_name,
            middle_name: employee.middle_name,
            last_name: employee.last_name,
            full_name: employee.full_name,
            email: employee.email,
            phone: employee.phone,
            alternate_phone: employee.alternate_phone,
            date_of_birth: iso_date(employee.date_of_birth),
            gender: employee.gender,
            marital_status: employee.marital_status,
            nationality: employee.nationality,
            address: employee.address,
            city: employee.city,
            state: employee.state,
            postal_code: employee.postal_code,
            country: employee.country,
            national_id: employee.national_id,
            tax_id: employee.tax_id,
            emergency_contact_name: employee.emergency_contact_name,
            emergency_contact_phone: employee.emergency_contact_phone,
            emergency_contact_relationship: employee.emergency_contact_relationship,
            highest_education: employee.highest_education,
            institution: employee.institution,
            department: employee.department,
            position: employee.position,
            employer_id: employee.employer_id,
            employment_type: employee.employment_type,
            salary: employee.salary,
            currency: employee.currency,
            bank_name: employee.bank_name,
            bank_account_number: employee.bank_account_number,
            status: employee.status,
            hire_date: iso_date(employee.hire_date),
            confirmation_date: iso_date(employee.confirmation_date),
            termination_date: iso_date(employee.termination_date),
            notes: employee.notes,
            created_at: iso_timestamp(employee.created_at),
            updated_at: iso_timestamp(employee.updated_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListResponseDto {
    pub employees: Vec<EmployeeResponseDto>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_counts: Option<Vec<StatusCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<String>>,
}

impl From<&[Employee]> for EmployeeListResponseDto {
    fn from(employees: &[Employee]) -> Self {
        Self {
            employees: employees.iter().map(EmployeeResponseDto::from).collect(),
            total: employees.len(),
            status_counts: None,
            departments: None,
            positions: None,
        }
    }
}

impl From<EmployeeListWithStats> for EmployeeListResponseDto {
    fn from(listing: EmployeeListWithStats) -> Self {
        Self {
            status_counts: Some(listing.status_counts),
            departments: Some(listing.departments),
            positions: Some(listing.positions),
            ..Self::from(listing.employees.as_slice())
        }
    }
}
