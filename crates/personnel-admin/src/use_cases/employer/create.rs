use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::domain::employer::{DEFAULT_CONTACT_METHOD, DEFAULT_RISK_LEVEL};
use crate::domain::{
    clean, Email, Employer, EmployerIdentity, FieldErrors, NewEmployer, ValidationError,
};
use crate::repository::EmployerRepository;
use crate::use_cases::support::{duplicate, parse_email, translate_write_error};
use crate::use_cases::UseCaseResult;

pub struct CreateEmployerUseCase<R> {
    repository: Arc<R>,
}

impl<R> CreateEmployerUseCase<R>
where
    R: EmployerRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(
        name = "employer.create",
        skip_all,
        fields(employer_type = request.identity.employer_type().label())
    )]
    pub async fn execute(&self, request: NewEmployer) -> UseCaseResult<Employer> {
        validate(&request)?;

        let email = match request.email.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(parse_email("email", raw)?),
            _ => None,
        };
        if let Some(email) = &email {
            if self.repository.find_by_email(email.as_str()).await?.is_some() {
                warn!(%email, "employer email already in use");
                return Err(duplicate("email").into());
            }
        }

        if let Some(number) = request.identity.registration_number().map(str::trim) {
            if !number.is_empty()
                && self
                    .repository
                    .find_by_registration_number(number)
                    .await?
                    .is_some()
            {
                warn!(registration_number = number, "registration number already in use");
                return Err(duplicate("registrationNumber").into());
            }
        }

        let employer = build(request, email);
        let created = self
            .repository
            .create(employer)
            .await
            .map_err(translate_write_error)?;

        info!(employer_id = created.id, full_name = %created.full_name, "employer created");
        Ok(created)
    }
}

fn validate(request: &NewEmployer) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();
    request.identity.validate(&mut errors);
    errors.require_text("status", request.status.as_deref());
    errors.into_result()
}

fn build(request: NewEmployer, email: Option<Email>) -> Employer {
    let full_name = request.identity.full_name();
    let employer_type = request.identity.employer_type();
    let NewEmployer {
        identity,
        tax_id,
        email: _,
        phone,
        website,
        address,
        city,
        state,
        postal_code,
        country,
        contact_person,
        publicly_listed,
        pension_scheme,
        health_insurance,
        risk_level,
        preferred_contact_method,
        status,
        notes,
    } = request;
    let now = Utc::now();

    let mut employer = Employer {
        id: 0,
        employer_type,
        company_name: None,
        trading_name: None,
        registration_number: None,
        industry: None,
        company_size: None,
        first_name: None,
        middle_name: None,
        last_name: None,
        full_name,
        tax_id,
        email: email.map(Email::into_inner),
        phone,
        website,
        address,
        city,
        state,
        postal_code,
        country: clean(country),
        contact_person,
        publicly_listed: publicly_listed.unwrap_or(false),
        pension_scheme: pension_scheme.unwrap_or(false),
        health_insurance: health_insurance.unwrap_or(false),
        risk_level: clean(risk_level).unwrap_or_else(|| DEFAULT_RISK_LEVEL.to_string()),
        preferred_contact_method: clean(preferred_contact_method)
            .unwrap_or_else(|| DEFAULT_CONTACT_METHOD.to_string()),
        status: clean(status).unwrap_or_default(),
        notes,
        created_at: now,
        updated_at: now,
    };

    match identity {
        EmployerIdentity::Company(company) => {
            employer.company_name = clean(company.company_name);
            employer.trading_name = clean(company.trading_name);
            employer.registration_number = clean(company.registration_number);
            employer.industry = clean(company.industry);
            employer.company_size = company.company_size;
        }
        EmployerIdentity::Individual(person) => {
            employer.first_name = clean(person.first_name);
            employer.middle_name = clean(person.middle_name);
            employer.last_name = clean(person.last_name);
        }
    }
    employer
}
