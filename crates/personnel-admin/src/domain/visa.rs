use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::holder::PersonType;
use super::{matches_exact, matches_search};

pub const DEFAULT_APPLICATION_STATUS: &str = "PENDING";
pub const DEFAULT_PRIORITY: &str = "NORMAL";

/// Process flags attached to a visa. Every flag starts out false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisaRequirements {
    pub photo_required: bool,
    pub biometrics_required: bool,
    pub interview_required: bool,
    pub invitation_letter: bool,
    pub bank_statement: bool,
    pub sponsor_support: bool,
    pub insurance_coverage: bool,
    pub refused_before: bool,
    pub appeal_possible: bool,
    pub renewal_eligible: bool,
    pub vaccination_required: bool,
    pub quarantine_required: bool,
}

impl VisaRequirements {
    pub fn apply(&mut self, patch: VisaRequirementsPatch) {
        merge_patch!(
            self,
            patch;
            required: [
                photo_required,
                biometrics_required,
                interview_required,
                invitation_letter,
                bank_statement,
                sponsor_support,
                insurance_coverage,
                refused_before,
                appeal_possible,
                renewal_eligible,
                vaccination_required,
                quarantine_required,
            ];
            optional: [];
        );
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisaRequirementsPatch {
    pub photo_required: Option<bool>,
    pub biometrics_required: Option<bool>,
    pub interview_required: Option<bool>,
    pub invitation_letter: Option<bool>,
    pub bank_statement: Option<bool>,
    pub sponsor_support: Option<bool>,
    pub insurance_coverage: Option<bool>,
    pub refused_before: Option<bool>,
    pub appeal_possible: Option<bool>,
    pub renewal_eligible: Option<bool>,
    pub vaccination_required: Option<bool>,
    pub quarantine_required: Option<bool>,
}

/// Persisted visa. `visa_number` is unique across all visas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visa {
    pub id: i64,
    pub visa_number: String,
    pub visa_type: String,
    pub visa_category: Option<String>,
    pub issuing_country: String,
    pub destination_country: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub person_name: String,
    pub nationality: String,
    pub passport_number: Option<String>,
    pub person_type: PersonType,
    pub person_id: i64,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub entry_type: Option<String>,
    pub number_of_entries: Option<u32>,
    pub duration_of_stay: Option<u32>,
    pub purpose: Option<String>,
    pub sponsor_name: Option<String>,
    #[serde(flatten)]
    pub requirements: VisaRequirements,
    pub application_status: String,
    pub is_active: bool,
    pub priority: String,
    pub visa_status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Visa {
    pub fn apply(&mut self, patch: VisaPatch) {
        self.requirements.apply(patch.requirements);
        merge_patch!(
            self,
            patch;
            required: [
                visa_number,
                visa_type,
                issuing_country,
                destination_country,
                first_name,
                last_name,
                nationality,
                person_type,
                person_id,
                issue_date,
                expiry_date,
                application_status,
                is_active,
                priority,
                visa_status,
            ];
            optional: [
                visa_category,
                middle_name,
                passport_number,
                entry_type,
                number_of_entries,
                duration_of_stay,
                purpose,
                sponsor_name,
                notes,
            ];
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewVisa {
    pub visa_number: Option<String>,
    pub visa_type: Option<String>,
    pub visa_category: Option<String>,
    pub issuing_country: Option<String>,
    pub destination_country: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    pub person_type: Option<PersonType>,
    pub person_id: Option<i64>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub entry_type: Option<String>,
    pub number_of_entries: Option<u32>,
    pub duration_of_stay: Option<u32>,
    pub purpose: Option<String>,
    pub sponsor_name: Option<String>,
    #[serde(flatten)]
    pub requirements: VisaRequirementsPatch,
    pub application_status: Option<String>,
    pub is_active: Option<bool>,
    pub priority: Option<String>,
    pub visa_status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisaPatch {
    pub visa_number: Option<String>,
    pub visa_type: Option<String>,
    pub visa_category: Option<String>,
    pub issuing_country: Option<String>,
    pub destination_country: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    pub person_type: Option<PersonType>,
    pub person_id: Option<i64>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub entry_type: Option<String>,
    pub number_of_entries: Option<u32>,
    pub duration_of_stay: Option<u32>,
    pub purpose: Option<String>,
    pub sponsor_name: Option<String>,
    #[serde(flatten)]
    pub requirements: VisaRequirementsPatch,
    pub application_status: Option<String>,
    pub is_active: Option<bool>,
    pub priority: Option<String>,
    pub visa_status: Option<String>,
    pub notes: Option<String>,
}

impl VisaPatch {
    pub fn changes_name(&self) -> bool {
        self.first_name.is_some() || self.middle_name.is_some() || self.last_name.is_some()
    }

    pub fn changes_validity(&self) -> bool {
        self.issue_date.is_some() || self.expiry_date.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisaFilters {
    pub visa_type: Option<String>,
    pub visa_status: Option<String>,
    pub application_status: Option<String>,
    pub destination_country: Option<String>,
    pub nationality: Option<String>,
    pub person_type: Option<PersonType>,
    pub person_id: Option<i64>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

impl VisaFilters {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, visa: &Visa) -> bool {
        matches_exact(self.visa_type.as_deref(), Some(visa.visa_type.as_str()))
            && matches_exact(self.visa_status.as_deref(), Some(visa.visa_status.as_str()))
            && matches_exact(
                self.application_status.as_deref(),
                Some(visa.application_status.as_str()),
            )
            && matches_exact(
                self.destination_country.as_deref(),
                Some(visa.destination_country.as_str()),
            )
            && matches_exact(self.nationality.as_deref(), Some(visa.nationality.as_str()))
            && self.person_type.map_or(true, |kind| visa.person_type == kind)
            && self.person_id.map_or(true, |id| visa.person_id == id)
            && self.is_active.map_or(true, |active| visa.is_active == active)
            && matches_search(
                self.search.as_deref(),
                &[
                    Some(visa.person_name.as_str()),
                    Some(visa.visa_number.as_str()),
                    visa.passport_number.as_deref(),
                ],
            )
    }
}
