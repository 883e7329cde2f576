use std::sync::Arc;

use tracing::{info, instrument};

use super::ENTITY;
use crate::domain::{NotFoundError, Passport};
use crate::repository::PassportRepository;
use crate::use_cases::support::ensure_valid_id;
use crate::use_cases::{UseCaseError, UseCaseResult};

/// Terminal status shared by passports and visas.
pub const EXPIRED_STATUS: &str = "EXPIRED";

pub struct DeletePassportUseCase<R> {
    repository: Arc<R>,
}

impl<R> DeletePassportUseCase<R>
where
    R: PassportRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "passport.delete", skip(self))]
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

        info!(passport_id = id, "passport deleted");
        Ok(())
    }

    /// Marks the passport expired; the row is kept.
    #[instrument(name = "passport.soft_delete", skip(self))]
    pub async fn soft_delete(&self, id: i64) -> UseCaseResult<Passport> {
        ensure_valid_id(ENTITY, id)?;
        let mut passport = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::new(ENTITY, id))?;

        passport.status = EXPIRED_STATUS.to_string();

        let expired = self
            .repository
            .update(id, passport)
            .await?
            .ok_or(UseCaseError::OperationFailed {
                action: "deactivate",
                entity: ENTITY,
            })?;

        info!(passport_id = id, "passport marked expired");
        Ok(expired)
    }
}
