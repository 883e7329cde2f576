use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::ENTITY;
use crate::domain::{
    generate_full_name, FieldErrors, NotFoundError, Passport, PassportPatch, ValidationError,
};
use crate::repository::PassportRepository;
use crate::use_cases::support::{
    duplicate, ensure_expiry_after_issue, ensure_valid_id, normalize_number, translate_write_error,
};
use crate::use_cases::UseCaseResult;

pub struct UpdatePassportUseCase<R> {
    repository: Arc<R>,
}

impl<R> UpdatePassportUseCase<R>
where
    R: PassportRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "passport.update", skip(self, patch), fields(passport_id = id))]
    pub async fn execute(&self, id: i64, mut patch: PassportPatch) -> UseCaseResult<Passport> {
        ensure_valid_id(ENTITY, id)?;
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::new(ENTITY, id))?;

        validate_patch(&patch)?;

        if let Some(raw) = patch.passport_number.take() {
            let passport_number = normalize_number(&raw);
            if let Some(holder) = self
                .repository
                .find_by_passport_number(&passport_number)
                .await?
            {
                if holder.id != id {
                    warn!(%passport_number, holder_id = holder.id, "passport number already in use");
                    return Err(duplicate("passportNumber").into());
                }
            }
            patch.passport_number = Some(passport_number);
        }

        if patch.changes_validity() {
            ensure_expiry_after_issue(
                patch.issue_date.unwrap_or(existing.issue_date),
                patch.expiry_date.unwrap_or(existing.expiry_date),
            )?;
        }

        let full_name = patch.changes_name().then(|| {
            generate_full_name(
                patch.first_name.as_deref().or(Some(existing.first_name.as_str())),
                patch.middle_name.as_deref().or(existing.middle_name.as_deref()),
                patch.last_name.as_deref().or(Some(existing.last_name.as_str())),
            )
        });

        let mut passport = existing;
        passport.apply(patch);
        if let Some(full_name) = full_name {
            passport.full_name = full_name;
        }

        let updated = self
            .repository
            .update(id, passport)
            .await
            .map_err(translate_write_error)?
            .ok_or(NotFoundError::new(ENTITY, id))?;

        info!(passport_id = updated.id, "passport updated");
        Ok(updated)
    }
}

fn validate_patch(patch: &PassportPatch) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();
    errors.reject_blank("passportNumber", patch.passport_number.as_deref());
    errors.reject_blank("issuingCountry", patch.issuing_country.as_deref());
    errors.reject_blank("nationality", patch.nationality.as_deref());
    errors.reject_blank("firstName", patch.first_name.as_deref());
    errors.reject_blank("lastName", patch.last_name.as_deref());
    errors.reject_blank("status", patch.status.as_deref());
    if patch.person_id.is_some_and(|id| id <= 0) {
        errors.push("personId", "personId must be a positive id");
    }
    errors.into_result()
}
