use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::domain::{clean, generate_full_name, Email, Employee, FieldErrors, NewEmployee, ValidationError};
use crate::repository::EmployeeRepository;
use crate::use_cases::support::{duplicate, parse_email, translate_write_error};
use crate::use_cases::UseCaseResult;

pub const DEFAULT_CURRENCY: &str = "USD";

static EMP_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_emp_id() -> String {
    let sequence = EMP_SEQUENCE.fetch_add(1, Ordering::Relaxed) % 1000;
    format!("EMP{}{sequence:03}", Utc::now().timestamp_millis())
}

pub struct CreateEmployeeUseCase<R> {
    repository: Arc<R>,
}

impl<R> CreateEmployeeUseCase<R>
where
    R: EmployeeRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "employee.create", skip_all)]
    pub async fn execute(&self, request: NewEmployee) -> UseCaseResult<Employee> {
        validate(&request)?;

        let email = parse_email("email", request.email.as_deref().unwrap_or_default())?;
        if self.repository.find_by_email(email.as_str()).await?.is_some() {
            warn!(%email, "employee email already in use");
            return Err(duplicate("email").into());
        }

        let employee = build(request, email);
        let created = self
            .repository
            .create(employee)
            .await
            .map_err(translate_write_error)?;

        info!(employee_id = created.id, emp_id = %created.emp_id, "employee created");
        Ok(created)
    }
}

fn validate(request: &NewEmployee) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();
    errors.require_text("firstName", request.first_name.as_deref());
    errors.require_text("lastName", request.last_name.as_deref());
    errors.require_text("email", request.email.as_deref());
    errors.require_text("status", request.status.as_deref());
    if request.salary.is_some_and(|salary| !salary.is_finite() || salary < 0.0) {
        errors.push("salary", "Salary must be a non-negative amount");
    }
    errors.into_result()
}

fn build(request: NewEmployee, email: Email) -> Employee {
    let NewEmployee {
        emp_id,
        first_name,
        middle_name,
        last_name,
        email: _,
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
        currency,
        bank_name,
        bank_account_number,
        status,
        hire_date,
        confirmation_date,
        notes,
    } = request;

    let first_name = clean(first_name).unwrap_or_default();
    let middle_name = clean(middle_name);
    let last_name = clean(last_name).unwrap_or_default();
    let full_name = generate_full_name(
        Some(first_name.as_str()),
        middle_name.as_deref(),
        Some(last_name.as_str()),
    );
    let now = Utc::now();

    Employee {
        id: 0,
        emp_id: clean(emp_id).unwrap_or_else(next_emp_id),
        first_name,
        middle_name,
        last_name,
        full_name,
        email: email.into_inner(),
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
        department: clean(department),
        position: clean(position),
        employer_id,
        employment_type,
        salary,
        currency: clean(currency).unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        bank_name,
        bank_account_number,
        status: clean(status).unwrap_or_default(),
        hire_date,
        confirmation_date,
        termination_date: None,
        notes,
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_emp_ids_are_prefixed_digits() {
        let first = next_emp_id();
        let second = next_emp_id();
        for id in [&first, &second] {
            let digits = id.strip_prefix("EMP").expect("EMP prefix");
            assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
        }
        assert_ne!(first, second);
    }

    #[test]
    fn validation_reports_every_missing_field() {
        let error = validate(&NewEmployee::default()).expect_err("empty request");
        assert_eq!(error.fields(), vec!["firstName", "lastName", "email", "status"]);
    }
}
