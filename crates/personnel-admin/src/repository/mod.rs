//! Persistence ports consumed by the use cases, plus in-memory adapters.
//!
//! Use cases never assign ids or timestamps; `create` receives a row with `id = 0`
//! and returns what the store persisted.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Employee, EmployeeFilters, Employer, EmployerFilters, Passport, PassportFilters, Visa,
    VisaFilters,
};

pub mod memory;

pub use memory::{
    InMemoryEmployeeRepository, InMemoryEmployerRepository, InMemoryPassportRepository,
    InMemoryVisaRepository,
};

/// Error enumeration for repository failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("unique constraint violated on {field}")]
    UniqueViolation { field: String },
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// One bucket of a status histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Employee>>;
    async fn find_all(&self) -> RepositoryResult<Vec<Employee>>;
    async fn find_by_filters(&self, filters: &EmployeeFilters) -> RepositoryResult<Vec<Employee>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Employee>>;
    async fn create(&self, employee: Employee) -> RepositoryResult<Employee>;
    /// Replaces the stored row. `None` when no row has this id.
    async fn update(&self, id: i64, employee: Employee) -> RepositoryResult<Option<Employee>>;
    /// Returns true if a row was deleted.
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
    async fn exists(&self, id: i64) -> RepositoryResult<bool>;
    async fn get_stats_by_status(&self) -> RepositoryResult<Vec<StatusCount>>;
    async fn get_distinct_departments(&self) -> RepositoryResult<Vec<String>>;
    async fn get_distinct_positions(&self) -> RepositoryResult<Vec<String>>;
}

#[async_trait]
pub trait EmployerRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Employer>>;
    async fn find_all(&self) -> RepositoryResult<Vec<Employer>>;
    async fn find_by_filters(&self, filters: &EmployerFilters) -> RepositoryResult<Vec<Employer>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Employer>>;
    async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> RepositoryResult<Option<Employer>>;
    async fn create(&self, employer: Employer) -> RepositoryResult<Employer>;
    async fn update(&self, id: i64, employer: Employer) -> RepositoryResult<Option<Employer>>;
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
    async fn exists(&self, id: i64) -> RepositoryResult<bool>;
    async fn get_stats_by_status(&self) -> RepositoryResult<Vec<StatusCount>>;
    async fn get_distinct_industries(&self) -> RepositoryResult<Vec<String>>;
    async fn get_distinct_countries(&self) -> RepositoryResult<Vec<String>>;
}

#[async_trait]
pub trait PassportRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Passport>>;
    async fn find_all(&self) -> RepositoryResult<Vec<Passport>>;
    async fn find_by_filters(&self, filters: &PassportFilters) -> RepositoryResult<Vec<Passport>>;
    async fn find_by_passport_number(
        &self,
        passport_number: &str,
    ) -> RepositoryResult<Option<Passport>>;
    async fn create(&self, passport: Passport) -> RepositoryResult<Passport>;
    async fn update(&self, id: i64, passport: Passport) -> RepositoryResult<Option<Passport>>;
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
    async fn exists(&self, id: i64) -> RepositoryResult<bool>;
    async fn get_stats_by_status(&self) -> RepositoryResult<Vec<StatusCount>>;
    async fn get_distinct_nationalities(&self) -> RepositoryResult<Vec<String>>;
    async fn get_distinct_issuing_countries(&self) -> RepositoryResult<Vec<String>>;
    /// Passports whose expiry date falls within `[today, today + days]`.
    async fn find_expiring_within_days(&self, days: u32) -> RepositoryResult<Vec<Passport>>;
}

#[async_trait]
pub trait VisaRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Visa>>;
    async fn find_all(&self) -> RepositoryResult<Vec<Visa>>;
    async fn find_by_filters(&self, filters: &VisaFilters) -> RepositoryResult<Vec<Visa>>;
    async fn find_by_visa_number(&self, visa_number: &str) -> RepositoryResult<Option<Visa>>;
    async fn create(&self, visa: Visa) -> RepositoryResult<Visa>;
    async fn update(&self, id: i64, visa: Visa) -> RepositoryResult<Option<Visa>>;
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
    async fn exists(&self, id: i64) -> RepositoryResult<bool>;
    /// Histogram over `visa_status`.
    async fn get_stats_by_status(&self) -> RepositoryResult<Vec<StatusCount>>;
    async fn get_distinct_visa_types(&self) -> RepositoryResult<Vec<String>>;
    async fn get_distinct_destination_countries(&self) -> RepositoryResult<Vec<String>>;
    /// Visas whose expiry date falls within `[today, today + days]`.
    async fn find_expiring_within_days(&self, days: u32) -> RepositoryResult<Vec<Visa>>;
}
