use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::ENTITY;
use crate::domain::{generate_full_name, FieldErrors, NotFoundError, ValidationError, Visa, VisaPatch};
use crate::repository::VisaRepository;
use crate::use_cases::support::{
    duplicate, ensure_expiry_after_issue, ensure_valid_id, normalize_number, translate_write_error,
};
use crate::use_cases::UseCaseResult;

pub struct UpdateVisaUseCase<R> {
    repository: Arc<R>,
}

impl<R> UpdateVisaUseCase<R>
where
    R: VisaRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "visa.update", skip(self, patch), fields(visa_id = id))]
    pub async fn execute(&self, id: i64, mut patch: VisaPatch) -> UseCaseResult<Visa> {
        ensure_valid_id(ENTITY, id)?;
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::new(ENTITY, id))?;

        validate_patch(&patch)?;

        if let Some(raw) = patch.visa_number.take() {
            let visa_number = normalize_number(&raw);
            if let Some(holder) = self.repository.find_by_visa_number(&visa_number).await? {
                if holder.id != id {
                    warn!(%visa_number, holder_id = holder.id, "visa number already in use");
                    return Err(duplicate("visaNumber").into());
                }
            }
            patch.visa_number = Some(visa_number);
        }
        patch.passport_number = patch.passport_number.map(|number| normalize_number(&number));

        if patch.changes_validity() {
            ensure_expiry_after_issue(
                patch.issue_date.unwrap_or(existing.issue_date),
                patch.expiry_date.unwrap_or(existing.expiry_date),
            )?;
        }

        let person_name = patch.changes_name().then(|| {
            generate_full_name(
                patch.first_name.as_deref().or(Some(existing.first_name.as_str())),
                patch.middle_name.as_deref().or(existing.middle_name.as_deref()),
                patch.last_name.as_deref().or(Some(existing.last_name.as_str())),
            )
        });

        let mut visa = existing;
        visa.apply(patch);
        if let Some(person_name) = person_name {
            visa.person_name = person_name;
        }

        let updated = self
            .repository
            .update(id, visa)
            .await
            .map_err(translate_write_error)?
            .ok_or(NotFoundError::new(ENTITY, id))?;

        info!(visa_id = updated.id, "visa updated");
        Ok(updated)
    }
}

fn validate_patch(patch: &VisaPatch) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();
    errors.reject_blank("visaNumber", patch.visa_number.as_deref());
    errors.reject_blank("visaType", patch.visa_type.as_deref());
    errors.reject_blank("issuingCountry", patch.issuing_country.as_deref());
    errors.reject_blank("destinationCountry", patch.destination_country.as_deref());
    errors.reject_blank("firstName", patch.first_name.as_deref());
    errors.reject_blank("lastName", patch.last_name.as_deref());
    errors.reject_blank("nationality", patch.nationality.as_deref());
    errors.reject_blank("applicationStatus", patch.application_status.as_deref());
    errors.reject_blank("priority", patch.priority.as_deref());
    errors.reject_blank("visaStatus", patch.visa_status.as_deref());
    if patch.person_id.is_some_and(|id| id <= 0) {
        errors.push("personId", "personId must be a positive id");
    }
    errors.into_result()
}
