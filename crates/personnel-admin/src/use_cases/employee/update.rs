use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::ENTITY;
use crate::domain::{generate_full_name, Employee, EmployeePatch, FieldErrors, NotFoundError, ValidationError};
use crate::repository::EmployeeRepository;
use crate::use_cases::support::{duplicate, ensure_valid_id, parse_email, translate_write_error};
use crate::use_cases::UseCaseResult;

pub struct UpdateEmployeeUseCase<R> {
    repository: Arc<R>,
}

impl<R> UpdateEmployeeUseCase<R>
where
    R: EmployeeRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "employee.update", skip(self, patch), fields(employee_id = id))]
    pub async fn execute(&self, id: i64, mut patch: EmployeePatch) -> UseCaseResult<Employee> {
        ensure_valid_id(ENTITY, id)?;
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::new(ENTITY, id))?;

        validate_patch(&patch)?;

        if let Some(raw) = patch.email.take() {
            let email = parse_email("email", &raw)?;
            if let Some(holder) = self.repository.find_by_email(email.as_str()).await? {
                if holder.id != id {
                    warn!(%email, holder_id = holder.id, "employee email already in use");
                    return Err(duplicate("email").into());
                }
            }
            patch.email = Some(email.into_inner());
        }

        let full_name = patch.changes_name().then(|| {
            generate_full_name(
                patch.first_name.as_deref().or(Some(existing.first_name.as_str())),
                patch.middle_name.as_deref().or(existing.middle_name.as_deref()),
                patch.last_name.as_deref().or(Some(existing.last_name.as_str())),
            )
        });

        let mut employee = existing;
        employee.apply(patch);
        if let Some(full_name) = full_name {
            employee.full_name = full_name;
        }

        let updated = self
            .repository
            .update(id, employee)
            .await
            .map_err(translate_write_error)?
            .ok_or(NotFoundError::new(ENTITY, id))?;

        info!(employee_id = updated.id, "employee updated");
        Ok(updated)
    }
}

fn validate_patch(patch: &EmployeePatch) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();
    errors.reject_blank("empId", patch.emp_id.as_deref());
    errors.reject_blank("firstName", patch.first_name.as_deref());
    errors.reject_blank("lastName", patch.last_name.as_deref());
    errors.reject_blank("email", patch.email.as_deref());
    errors.reject_blank("currency", patch.currency.as_deref());
    errors.reject_blank("status", patch.status.as_deref());
    if patch.salary.is_some_and(|salary| !salary.is_finite() || salary < 0.0) {
        errors.push("salary", "Salary must be a non-negative amount");
    }
    errors.into_result()
}
