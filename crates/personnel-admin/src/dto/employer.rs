use serde::Serialize;

use super::iso_timestamp;
use crate::domain::{Employer, EmployerType};
use crate::repository::StatusCount;
use crate::use_cases::employer::EmployerListWithStats;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerResponseDto {
    pub id: i64,
    pub employer_type: EmployerType,
    pub full_name: String,
    pub company_name: Option<String>,
    pub registration_number: Option<String>,
    pub industry: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub risk_level: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Employer> for EmployerResponseDto {
    fn from(employer: &Employer) -> Self {
        Self {
            id: employer.id,
            employer_type: employer.employer_type,
            full_name: employer.full_name.clone(),
            company_name: employer.company_name.clone(),
            registration_number: employer.registration_number.clone(),
            industry: employer.industry.clone(),
            email: employer.email.clone(),
            phone: employer.phone.clone(),
            country: employer.country.clone(),
            risk_level: employer.risk_level.clone(),
            status: employer.status.clone(),
            created_at: iso_timestamp(employer.created_at),
            updated_at: iso_timestamp(employer.updated_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedEmployerResponseDto {
    pub id: i64,
    pub employer_type: EmployerType,
    pub full_name: String,
    pub company_name: Option<String>,
    pub trading_name: Option<String>,
    pub registration_number: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub tax_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub contact_person: Option<String>,
    pub publicly_listed: bool,
    pub pension_scheme: bool,
    pub health_insurance: bool,
    pub risk_level: String,
    pub preferred_contact_method: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Employer> for DetailedEmployerResponseDto {
    fn from(employer: &Employer) -> Self {
        Self::from(employer.clone())
    }
}

impl From<Employer> for DetailedEmployerResponseDto {
    fn from(employer: Employer) -> Self {
        Self {
            id: employer.id,
            employer_type: employer.employer_type,
            full_name: employer.full_name,
            company_name: employer.company_name,
            trading_name: employer.trading_name,
            registration_number: employer.registration_number,
            industry: employer.industry,
            company_size: employer.company_size,
            first_name: employer.first_name,
            middle_name: employer.middle_name,
            last_name: employer.last_name,
            tax_id: employer.tax_id,
            email: employer.email,
            phone: employer.phone,
            website: employer.website,
            address: employer.address,
            city: employer.city,
            state: employer.state,
            postal_code: employer.postal_code,
            country: employer.country,
            contact_person: employer.contact_person,
            publicly_listed: employer.publicly_listed,
            pension_scheme: employer.pension_scheme,
            health_insurance: employer.health_insurance,
            risk_level: employer.risk_level,
            preferred_contact_method: employer.preferred_contact_method,
            status: employer.status,
            notes: employer.notes,
            created_at: iso_timestamp(employer.created_at),
            updated_at: iso_timestamp(employer.updated_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerListResponseDto {
    pub employers: Vec<EmployerResponseDto>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_counts: Option<Vec<StatusCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
}

impl From<&[Employer]> for EmployerListResponseDto {
    fn from(employers: &[Employer]) -> Self {
        Self {
            employers: employers.iter().map(EmployerResponseDto::from).collect(),
            total: employers.len(),
            status_counts: None,
            industries: None,
            countries: None,
        }
    }
}

impl From<EmployerListWithStats> for EmployerListResponseDto {
    fn from(listing: EmployerListWithStats) -> Self {
        Self {
            status_counts: Some(listing.status_counts),
            industries: Some(listing.industries),
            countries: Some(listing.countries),
            ..Self::from(listing.employers.as_slice())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    #[test]
    fn employer_type_serializes_as_tag_value() {
        let now = Utc::now();
        let employer = Employer {
            id: 1,
            employer_type: EmployerType::Individual,
            company_name: None,
            trading_name: None,
            registration_number: None,
            industry: None,
            company_size: None,
            first_name: Some("Kofi".to_string()),
            middle_name: None,
            last_name: Some("Mensah".to_string()),
            full_name: "Kofi Mensah".to_string(),
            tax_id: None,
            email: None,
            phone: None,
            website: None,
            address: None,
            city: None,
            state: None,
            postal_code: None,
            country: Some("Ghana".to_string()),
            contact_person: None,
            publicly_listed: false,
            pension_scheme: true,
            health_insurance: false,
            risk_level: "LOW".to_string(),
            preferred_contact_method: "PHONE".to_string(),
            status: "ACTIVE".to_string(),
            notes: None,
            created_at: now,
            updated_at: now,
        };

        let summary = serde_json::to_value(EmployerResponseDto::from(&employer)).expect("json");
        assert_eq!(summary["employerType"], json!("INDIVIDUAL"));
        assert_eq!(summary["companyName"], json!(null));

        let detailed =
            serde_json::to_value(DetailedEmployerResponseDto::from(&employer)).expect("json");
        assert_eq!(detailed["pensionScheme"], json!(true));
        assert_eq!(detailed["firstName"], json!("Kofi"));
        assert_eq!(detailed["preferredContactMethod"], json!("PHONE"));
    }
}
