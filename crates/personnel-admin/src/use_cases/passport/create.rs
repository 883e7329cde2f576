use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, instrument, warn};

use crate::domain::{
    clean, generate_full_name, FieldErrors, NewPassport, Passport, PersonType, ValidationError,
};
use crate::repository::PassportRepository;
use crate::use_cases::support::{
    duplicate, ensure_expiry_after_issue, normalize_number, translate_write_error,
};
use crate::use_cases::UseCaseResult;

pub struct CreatePassportUseCase<R> {
    repository: Arc<R>,
}

impl<R> CreatePassportUseCase<R>
where
    R: PassportRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "passport.create", skip_all)]
    pub async fn execute(&self, request: NewPassport) -> UseCaseResult<Passport> {
        let required = validate(&request)?;

        let passport_number = normalize_number(request.passport_number.as_deref().unwrap_or_default());
        if self
            .repository
            .find_by_passport_number(&passport_number)
            .await?
            .is_some()
        {
            warn!(%passport_number, "passport number already in use");
            return Err(duplicate("passportNumber").into());
        }

        ensure_expiry_after_issue(required.issue_date, required.expiry_date)?;

        let passport = build(request, passport_number, required);
        let created = self
            .repository
            .create(passport)
            .await
            .map_err(translate_write_error)?;

        info!(
            passport_id = created.id,
            passport_number = %created.passport_number,
            person_type = created.person_type.label(),
            person_id = created.person_id,
            "passport created"
        );
        Ok(created)
    }
}

/// Non-text required values, available once validation passes.
struct Required {
    issue_date: NaiveDate,
    expiry_date: NaiveDate,
    person_type: PersonType,
    person_id: i64,
}

fn validate(request: &NewPassport) -> Result<Required, ValidationError> {
    let mut errors = FieldErrors::new();
    errors.require_text("passportNumber", request.passport_number.as_deref());
    errors.require_text("issuingCountry", request.issuing_country.as_deref());
    errors.require_text("nationality", request.nationality.as_deref());
    errors.require_text("firstName", request.first_name.as_deref());
    errors.require_text("lastName", request.last_name.as_deref());
    let issue_date = errors.require("issueDate", request.issue_date);
    let expiry_date = errors.require("expiryDate", request.expiry_date);
    let person_type = errors.require("personType", request.person_type);
    let person_id = errors.require("personId", request.person_id);
    errors.require_text("status", request.status.as_deref());
    if person_id.is_some_and(|id| id <= 0) {
        errors.push("personId", "personId must be a positive id");
    }

    match (issue_date, expiry_date, person_type, person_id) {
        (Some(issue_date), Some(expiry_date), Some(person_type), Some(person_id))
            if errors.is_empty() =>
        {
            Ok(Required {
                issue_date,
                expiry_date,
                person_type,
                person_id,
            })
        }
        _ => Err(errors.into_error()),
    }
}

fn build(request: NewPassport, passport_number: String, required: Required) -> Passport {
    let first_name = clean(request.first_name).unwrap_or_default();
    let middle_name = clean(request.middle_name);
    let last_name = clean(request.last_name).unwrap_or_default();
    let full_name = generate_full_name(
        Some(first_name.as_str()),
        middle_name.as_deref(),
        Some(last_name.as_str()),
    );
    let now = Utc::now();

    Passport {
        id: 0,
        passport_number,
        passport_type: clean(request.passport_type),
        issuing_country: clean(request.issuing_country).unwrap_or_default(),
        nationality: clean(request.nationality).unwrap_or_default(),
        first_name,
        middle_name,
        last_name,
        full_name,
        date_of_birth: request.date_of_birth,
        place_of_birth: request.place_of_birth,
        gender: request.gender,
        issue_date: required.issue_date,
        expiry_date: required.expiry_date,
        issuing_authority: request.issuing_authority,
        person_type: required.person_type,
        person_id: required.person_id,
        status: clean(request.status).unwrap_or_default(),
        notes: request.notes,
        created_at: now,
        updated_at: now,
    }
}
