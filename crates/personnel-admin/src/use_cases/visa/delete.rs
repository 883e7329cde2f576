use std::sync::Arc;

use tracing::{info, instrument};

use super::ENTITY;
use crate::domain::{NotFoundError, Visa};
use crate::repository::VisaRepository;
use crate::use_cases::passport::EXPIRED_STATUS;
use crate::use_cases::support::ensure_valid_id;
use crate::use_cases::{UseCaseError, UseCaseResult};

pub struct DeleteVisaUseCase<R> {
    repository: Arc<R>,
}

impl<R> DeleteVisaUseCase<R>
where
    R: VisaRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "visa.delete", skip(self))]
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

        info!(visa_id = id, "visa deleted");
        Ok(())
    }

    /// Marks the visa expired; the row is kept.
    #[instrument(name = "visa.soft_delete", skip(self))]
    pub async fn soft_delete(&self, id: i64) -> UseCaseResult<Visa> {
        ensure_valid_id(ENTITY, id)?;
        let mut visa = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::new(ENTITY, id))?;

        visa.visa_status = EXPIRED_STATUS.to_string();

        let expired = self
            .repository
            .update(id, visa)
            .await?
            .ok_or(UseCaseError::OperationFailed {
                action: "deactivate",
                entity: ENTITY,
            })?;

        info!(visa_id = id, "visa marked expired");
        Ok(expired)
    }
}
