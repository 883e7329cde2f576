use chrono::NaiveDate;

use super::error::{UseCaseError, UseCaseResult};
use crate::domain::{Email, EmailError, ValidationError};
use crate::repository::RepositoryError;

pub(crate) fn ensure_valid_id(entity: &'static str, id: i64) -> UseCaseResult<()> {
    if id <= 0 {
        return Err(UseCaseError::InvalidId { entity });
    }
    Ok(())
}

pub(crate) fn parse_email(field: &str, raw: &str) -> Result<Email, ValidationError> {
    Email::parse(raw).map_err(|error| match error {
        EmailError::Empty => ValidationError::from_field_error(field, format!("{field} is required")),
        EmailError::Malformed(_) => ValidationError::from_field_error(field, "Invalid email format"),
    })
}

pub(crate) fn duplicate(field: &str) -> ValidationError {
    let message = match field {
        "email" => "Email already exists",
        "registrationNumber" => "Registration number already exists",
        "passportNumber" => "Passport number already exists",
        "visaNumber" => "Visa number already exists",
        _ => "Value already exists",
    };
    ValidationError::from_field_error(field, message)
}

/// Maps a unique-constraint failure from the store onto the pre-check's error shape.
pub(crate) fn translate_write_error(error: RepositoryError) -> UseCaseError {
    match error {
        RepositoryError::UniqueViolation { field } => duplicate(&field).into(),
        other => other.into(),
    }
}

pub(crate) fn ensure_expiry_after_issue(
    issue_date: NaiveDate,
    expiry_date: NaiveDate,
) -> Result<(), ValidationError> {
    if expiry_date <= issue_date {
        return Err(ValidationError::from_field_error(
            "expiryDate",
            "Expiry date must be after issue date",
        ));
    }
    Ok(())
}

/// Upper-cased, trimmed document or registration number.
pub(crate) fn normalize_number(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_ids() {
        assert!(matches!(
            ensure_valid_id("Employee", 0),
            Err(UseCaseError::InvalidId { entity: "Employee" })
        ));
        assert!(ensure_valid_id("Employee", -4).is_err());
        assert!(ensure_valid_id("Employee", 1).is_ok());
    }

    #[test]
    fn expiry_must_follow_issue() {
        let issue = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let same_day = ensure_expiry_after_issue(issue, issue).expect_err("same day fails");
        assert!(same_day.has_field("expiryDate"));
        assert!(ensure_expiry_after_issue(issue, issue.succ_opt().expect("next day")).is_ok());
    }

    #[test]
    fn unique_violation_becomes_field_error() {
        let error = translate_write_error(RepositoryError::UniqueViolation {
            field: "passportNumber".to_string(),
        });
        let validation = error.validation().expect("validation error");
        assert_eq!(validation.errors()[0].message, "Passport number already exists");

        let passthrough = translate_write_error(RepositoryError::Unavailable("down".to_string()));
        assert!(matches!(passthrough, UseCaseError::Repository(_)));
    }

    #[test]
    fn malformed_email_is_field_scoped() {
        let error = parse_email("email", "not-an-email").expect_err("malformed");
        assert_eq!(error.fields(), vec!["email"]);
        assert_eq!(error.errors()[0].message, "Invalid email format");
    }
}
