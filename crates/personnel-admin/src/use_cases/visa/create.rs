use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, instrument, warn};

use crate::domain::visa::{DEFAULT_APPLICATION_STATUS, DEFAULT_PRIORITY};
use crate::domain::{
    clean, generate_full_name, FieldErrors, NewVisa, PersonType, ValidationError, Visa,
    VisaRequirements,
};
use crate::repository::VisaRepository;
use crate::use_cases::support::{
    duplicate, ensure_expiry_after_issue, normalize_number, translate_write_error,
};
use crate::use_cases::UseCaseResult;

pub struct CreateVisaUseCase<R> {
    repository: Arc<R>,
}

impl<R> CreateVisaUseCase<R>
where
    R: VisaRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "visa.create", skip_all)]
    pub async fn execute(&self, request: NewVisa) -> UseCaseResult<Visa> {
        let required = validate(&request)?;

        let visa_number = normalize_number(request.visa_number.as_deref().unwrap_or_default());
        if self.repository.find_by_visa_number(&visa_number).await?.is_some() {
            warn!(%visa_number, "visa number already in use");
            return Err(duplicate("visaNumber").into());
        }

        ensure_expiry_after_issue(required.issue_date, required.expiry_date)?;

        let visa = build(request, visa_number, required);
        let created = self
            .repository
            .create(visa)
            .await
            .map_err(translate_write_error)?;

        info!(
            visa_id = created.id,
            visa_number = %created.visa_number,
            destination = %created.destination_country,
            "visa created"
        );
        Ok(created)
    }
}

struct Required {
    person_type: PersonType,
    person_id: i64,
    issue_date: NaiveDate,
    expiry_date: NaiveDate,
}

fn validate(request: &NewVisa) -> Result<Required, ValidationError> {
    let mut errors = FieldErrors::new();
    errors.require_text("visaNumber", request.visa_number.as_deref());
    errors.require_text("visaType", request.visa_type.as_deref());
    errors.require_text("issuingCountry", request.issuing_country.as_deref());
    errors.require_text("destinationCountry", request.destination_country.as_deref());
    errors.require_text("firstName", request.first_name.as_deref());
    errors.require_text("lastName", request.last_name.as_deref());
    errors.require_text("nationality", request.nationality.as_deref());
    let person_type = errors.require("personType", request.person_type);
    let person_id = errors.require("personId", request.person_id);
    let issue_date = errors.require("issueDate", request.issue_date);
    let expiry_date = errors.require("expiryDate", request.expiry_date);
    errors.require_text("visaStatus", request.visa_status.as_deref());
    if person_id.is_some_and(|id| id <= 0) {
        errors.push("personId", "personId must be a positive id");
    }

    match (person_type, person_id, issue_date, expiry_date) {
        (Some(person_type), Some(person_id), Some(issue_date), Some(expiry_date))
            if errors.is_empty() =>
        {
            Ok(Required {
                person_type,
                person_id,
                issue_date,
                expiry_date,
            })
        }
        _ => Err(errors.into_error()),
    }
}

fn build(request: NewVisa, visa_number: String, required: Required) -> Visa {
    let NewVisa {
        visa_number: _,
        visa_type,
        visa_category,
        issuing_country,
        destination_country,
        first_name,
        middle_name,
        last_name,
        nationality,
        passport_number,
        person_type: _,
        person_id: _,
        issue_date: _,
        expiry_date: _,
        entry_type,
        number_of_entries,
        duration_of_stay,
        purpose,
        sponsor_name,
        requirements: requirement_flags,
        application_status,
        is_active,
        priority,
        visa_status,
        notes,
    } = request;

    let first_name = clean(first_name).unwrap_or_default();
    let middle_name = clean(middle_name);
    let last_name = clean(last_name).unwrap_or_default();
    let person_name = generate_full_name(
        Some(first_name.as_str()),
        middle_name.as_deref(),
        Some(last_name.as_str()),
    );
    let mut requirements = VisaRequirements::default();
    requirements.apply(requirement_flags);
    let now = Utc::now();

    Visa {
        id: 0,
        visa_number,
        visa_type: clean(visa_type).unwrap_or_default(),
        visa_category: clean(visa_category),
        issuing_country: clean(issuing_country).unwrap_or_default(),
        destination_country: clean(destination_country).unwrap_or_default(),
        first_name,
        middle_name,
        last_name,
        person_name,
        nationality: clean(nationality).unwrap_or_default(),
        passport_number: clean(passport_number).map(|number| normalize_number(&number)),
        person_type: required.person_type,
        person_id: required.person_id,
        issue_date: required.issue_date,
        expiry_date: required.expiry_date,
        entry_type,
        number_of_entries,
        duration_of_stay,
        purpose,
        sponsor_name,
        requirements,
        application_status: clean(application_status)
            .unwrap_or_else(|| DEFAULT_APPLICATION_STATUS.to_string()),
        is_active: is_active.unwrap_or(true),
        priority: clean(priority).unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
        visa_status: clean(visa_status).unwrap_or_default(),
        notes,
        created_at: now,
        updated_at: now,
    }
}
