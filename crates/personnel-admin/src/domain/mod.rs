//! Entities, request shapes, value objects, and the typed errors shared by the use cases.

/// Merges a partial patch onto an entity: patch values win, unset fields keep their value.
///
/// Text is trimmed on the way in. A blank value leaves a required field as it
/// was and clears an optional one.
macro_rules! merge_patch {
    ($target:expr, $patch:expr; required: [$($required:ident),* $(,)?]; optional: [$($optional:ident),* $(,)?] $(;)?) => {
        $(
            if let Some(value) = $patch.$required.and_then($crate::domain::PatchValue::tidy) {
                $target.$required = value;
            }
        )*
        $(
            if let Some(value) = $patch.$optional {
                $target.$optional = $crate::domain::PatchValue::tidy(value);
            }
        )*
    };
}

pub mod email;
pub mod employee;
pub mod employer;
pub mod error;
pub mod holder;
pub mod names;
pub mod passport;
pub mod visa;

pub use email::{Email, EmailError};
pub use employee::{Employee, EmployeeFilters, EmployeePatch, NewEmployee};
pub use employer::{
    CompanyIdentity, Employer, EmployerFilters, EmployerIdentity, EmployerPatch, EmployerType,
    NewEmployer, PersonIdentity,
};
pub use error::{FieldError, FieldErrors, NotFoundError, ValidationError};
pub use holder::PersonType;
pub use names::{company_display_name, generate_full_name};
pub use passport::{NewPassport, Passport, PassportFilters, PassportPatch};
pub use visa::{NewVisa, Visa, VisaFilters, VisaPatch, VisaRequirements, VisaRequirementsPatch};

/// Case-insensitive equality for an optional exact-match filter.
pub(crate) fn matches_exact(filter: Option<&str>, value: Option<&str>) -> bool {
    match filter.map(str::trim).filter(|filter| !filter.is_empty()) {
        None => true,
        Some(filter) => value.is_some_and(|value| value.trim().eq_ignore_ascii_case(filter)),
    }
}

/// Case-insensitive substring match of a free-text search against any candidate.
pub(crate) fn matches_search(search: Option<&str>, candidates: &[Option<&str>]) -> bool {
    let needle = match search.map(str::trim).filter(|search| !search.is_empty()) {
        None => return true,
        Some(needle) => needle.to_lowercase(),
    };

    candidates
        .iter()
        .flatten()
        .any(|candidate| candidate.to_lowercase().contains(&needle))
}

/// Trims an optional text value and drops it when blank.
pub(crate) fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Normalization applied to a patch value before it is merged.
pub(crate) trait PatchValue: Sized {
    fn tidy(self) -> Option<Self> {
        Some(self)
    }
}

impl PatchValue for String {
    fn tidy(self) -> Option<Self> {
        clean(Some(self))
    }
}

impl PatchValue for bool {}
impl PatchValue for i64 {}
impl PatchValue for u32 {}
impl PatchValue for f64 {}
impl PatchValue for chrono::NaiveDate {}
impl PatchValue for PersonType {}
impl PatchValue for EmployerType {}
