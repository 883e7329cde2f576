use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::ENTITY;
use crate::domain::{Employer, EmployerPatch, FieldErrors, NotFoundError, ValidationError};
use crate::repository::EmployerRepository;
use crate::use_cases::support::{duplicate, ensure_valid_id, parse_email, translate_write_error};
use crate::use_cases::UseCaseResult;

pub struct UpdateEmployerUseCase<R> {
    repository: Arc<R>,
}

impl<R> UpdateEmployerUseCase<R>
where
    R: EmployerRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "employer.update", skip(self, patch), fields(employer_id = id))]
    pub async fn execute(&self, id: i64, mut patch: EmployerPatch) -> UseCaseResult<Employer> {
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
                    warn!(%email, holder_id = holder.id, "employer email already in use");
                    return Err(duplicate("email").into());
                }
            }
            patch.email = Some(email.into_inner());
        }

        patch.registration_number = patch.registration_number.map(|number| number.trim().to_string());
        if let Some(number) = patch
            .registration_number
            .as_deref()
            .filter(|number| !number.is_empty())
        {
            if let Some(holder) = self.repository.find_by_registration_number(number).await? {
                if holder.id != id {
                    warn!(
                        registration_number = number,
                        holder_id = holder.id,
                        "registration number already in use"
                    );
                    return Err(duplicate("registrationNumber").into());
                }
            }
        }

        let renames = patch.changes_name();
        let mut employer = existing;
        employer.apply(patch);
        if renames {
            employer.full_name = employer.derive_full_name();
        }

        let mut errors = FieldErrors::new();
        employer.check_variant_fields(&mut errors);
        if let Err(error) = errors.into_result() {
            warn!(fields = ?error.fields(), "employer update leaves variant fields missing");
            return Err(error.into());
        }

        let updated = self
            .repository
            .update(id, employer)
            .await
            .map_err(translate_write_error)?
            .ok_or(NotFoundError::new(ENTITY, id))?;

        info!(employer_id = updated.id, "employer updated");
        Ok(updated)
    }
}

fn validate_patch(patch: &EmployerPatch) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();
    errors.reject_blank("email", patch.email.as_deref());
    errors.reject_blank("registrationNumber", patch.registration_number.as_deref());
    errors.reject_blank("riskLevel", patch.risk_level.as_deref());
    errors.reject_blank("preferredContactMethod", patch.preferred_contact_method.as_deref());
    errors.reject_blank("status", patch.status.as_deref());
    errors.into_result()
}
