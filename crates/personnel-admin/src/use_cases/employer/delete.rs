use std::sync::Arc;

use tracing::{info, instrument};

use super::ENTITY;
use crate::domain::{Employer, NotFoundError};
use crate::repository::EmployerRepository;
use crate::use_cases::support::ensure_valid_id;
use crate::use_cases::{UseCaseError, UseCaseResult};

pub const INACTIVE_STATUS: &str = "INACTIVE";

pub struct DeleteEmployerUseCase<R> {
    repository: Arc<R>,
}

impl<R> DeleteEmployerUseCase<R>
where
    R: EmployerRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "employer.delete", skip(self))]
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

        info!(employer_id = id, "employer deleted");
        Ok(())
    }

    #[instrument(name = "employer.soft_delete", skip(self))]
    pub async fn soft_delete(&self, id: i64) -> UseCaseResult<Employer> {
        ensure_valid_id(ENTITY, id)?;
        let mut employer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::new(ENTITY, id))?;

        employer.status = INACTIVE_STATUS.to_string();

        let deactivated = self
            .repository
            .update(id, employer)
            .await?
            .ok_or(UseCaseError::OperationFailed {
                action: "deactivate",
                entity: ENTITY,
            })?;

        info!(employer_id = id, "employer deactivated");
        Ok(deactivated)
    }
}
