use serde::Serialize;

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// No row with the given id exists for the entity family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: i64,
}

impl NotFoundError {
    pub fn new(entity: &'static str, id: i64) -> Self {
        Self { entity, id }
    }
}

/// One or more field-level failures reported together.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", summarize(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn from_field_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }

    pub fn from_field_errors(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|error| error.field.as_str()).collect()
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates every violation in a request before failing.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Records `<field> is required` when the value is absent or blank.
    pub fn require_text(&mut self, field: &str, value: Option<&str>) {
        if value.map_or(true, |value| value.trim().is_empty()) {
            self.push(field, format!("{field} is required"));
        }
    }

    /// Records `<field> is required` when absent and hands the value back.
    pub fn require<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(field, format!("{field} is required"));
        }
        value
    }

    /// Records `<field> cannot be blank` for a patched value that is present but empty.
    pub fn reject_blank(&mut self, field: &str, value: Option<&str>) {
        if value.is_some_and(|value| value.trim().is_empty()) {
            self.push(field, format!("{field} cannot be blank"));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError::from_field_errors(self.errors)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::from_field_errors(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_missing_field() {
        let mut errors = FieldErrors::new();
        errors.require_text("firstName", None);
        errors.require_text("lastName", Some("  "));
        errors.require_text("status", Some("ACTIVE"));
        errors.require::<i64>("personId", None);

        let error = errors.into_result().expect_err("missing fields");
        assert_eq!(error.fields(), vec!["firstName", "lastName", "personId"]);
        assert_eq!(error.errors()[0].message, "firstName is required");
    }

    #[test]
    fn empty_accumulator_passes() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn display_lists_all_fields() {
        let error = ValidationError::from_field_errors(vec![
            FieldError::new("email", "Email already exists"),
            FieldError::new("expiryDate", "Expiry date must be after issue date"),
        ]);
        assert_eq!(
            error.to_string(),
            "validation failed: email: Email already exists; expiryDate: Expiry date must be after issue date"
        );
    }

    #[test]
    fn not_found_formats_entity_and_id() {
        let error = NotFoundError::new("Employee", 999);
        assert_eq!(error.to_string(), "Employee with id 999 not found");
    }
}
