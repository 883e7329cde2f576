use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::holder::PersonType;
use super::{matches_exact, matches_search};

/// Persisted passport. `passport_number` is unique across all passports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passport {
    pub id: i64,
    pub passport_number: String,
    pub passport_type: Option<String>,
    pub issuing_country: String,
    pub nationality: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub gender: Option<String>,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub issuing_authority: Option<String>,
    pub person_type: PersonType,
    pub person_id: i64,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Passport {
    pub fn apply(&mut self, patch: PassportPatch) {
        merge_patch!(
            self,
            patch;
            required: [
                passport_number,
                issuing_country,
                nationality,
                first_name,
                last_name,
                issue_date,
                expiry_date,
                person_type,
                person_id,
                status,
            ];
            optional: [
                passport_type,
                middle_name,
                date_of_birth,
                place_of_birth,
                gender,
                issuing_authority,
                notes,
            ];
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPassport {
    pub passport_number: Option<String>,
    pub passport_type: Option<String>,
    pub issuing_country: Option<String>,
    pub nationality: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub gender: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub issuing_authority: Option<String>,
    pub person_type: Option<PersonType>,
    pub person_id: Option<i64>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassportPatch {
    pub passport_number: Option<String>,
    pub passport_type: Option<String>,
    pub issuing_country: Option<String>,
    pub nationality: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub gender: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub issuing_authority: Option<String>,
    pub person_type: Option<PersonType>,
    pub person_id: Option<i64>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl PassportPatch {
    pub fn changes_name(&self) -> bool {
        self.first_name.is_some() || self.middle_name.is_some() || self.last_name.is_some()
    }

    pub fn changes_validity(&self) -> bool {
        self.issue_date.is_some() || self.expiry_date.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassportFilters {
    pub status: Option<String>,
    pub nationality: Option<String>,
    pub issuing_country: Option<String>,
    pub person_type: Option<PersonType>,
    pub person_id: Option<i64>,
    pub search: Option<String>,
}

impl PassportFilters {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, passport: &Passport) -> bool {
        matches_exact(self.status.as_deref(), Some(passport.status.as_str()))
            && matches_exact(self.nationality.as_deref(), Some(passport.nationality.as_str()))
            && matches_exact(
                self.issuing_country.as_deref(),
                Some(passport.issuing_country.as_str()),
            )
            && self
                .person_type
                .map_or(true, |kind| passport.person_type == kind)
            && self.person_id.map_or(true, |id| passport.person_id == id)
            && matches_search(
                self.search.as_deref(),
                &[
                    Some(passport.full_name.as_str()),
                    Some(passport.passport_number.as_str()),
                ],
            )
    }
}
