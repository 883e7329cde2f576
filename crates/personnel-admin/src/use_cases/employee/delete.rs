use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use super::ENTITY;
use crate::domain::{Employee, NotFoundError};
use crate::repository::EmployeeRepository;
use crate::use_cases::support::ensure_valid_id;
use crate::use_cases::{UseCaseError, UseCaseResult};

/// Status an employee moves to when deactivated.
pub const TERMINATED_STATUS: &str = "TERMINATED";

pub struct DeleteEmployeeUseCase<R> {
    repository: Arc<R>,
}

impl<R> DeleteEmployeeUseCase<R>
where
    R: EmployeeRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "employee.delete", skip(self))]
    pub async fn execute(&self, id: i64) -> UseCaseResult<()> {
        ensure_valid_id(ENTITY, id)?;
        if !self.repository.exists(id).await? {
            return Err(NotFoundError::new(ENTITY, id).into());
        }
        if !self.repository.delete(id).await? {
            return Err(UseCaseError::OperationFailed {
                action: "delete",
                entity: ENTITY,
            });
        }

        info!(employee_id = id, "employee deleted");
        Ok(())
    }

    /// Terminates the employee instead of removing the record.
    #[instrument(name = "employee.soft_delete", skip(self))]
    pub async fn soft_delete(&self, id: i64) -> UseCaseResult<Employee> {
        ensure_valid_id(ENTITY, id)?;
        let mut employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::new(ENTITY, id))?;

        employee.status = TERMINATED_STATUS.to_string();
        employee.termination_date = Some(Utc::now().date_naive());

        let terminated = self
            .repository
            .update(id, employee)
            .await?
            .ok_or(UseCaseError::OperationFailed {
                action: "deactivate",
                entity: ENTITY,
            })?;

        info!(employee_id = id, "employee terminated");
        Ok(terminated)
    }
}
