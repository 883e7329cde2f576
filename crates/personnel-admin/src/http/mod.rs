//! axum routers exposing the use cases over JSON.
//!
//! Each family router is generic over its repository and builds use cases per
//! request. Use-case errors render through [`UseCaseError`]'s `IntoResponse`.
//!
//! [`UseCaseError`]: crate::use_cases::UseCaseError

use std::sync::Arc;

use axum::Router;
use serde::Deserialize;

use crate::repository::{EmployeeRepository, EmployerRepository, PassportRepository, VisaRepository};

pub mod employees;
pub mod employers;
mod error;
mod extract;
pub mod passports;
pub mod visas;


pub use employees::employee_router;
pub use employers::employer_router;
pub use extract::{JsonBody, QueryParams};
pub use passports::passport_router;
pub use visas::visa_router;

/// `?days=N` look-ahead for the expiring-document endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ExpiryWindow {
    pub days: Option<u32>,
}

/// Repository handles backing the personnel routes.
pub struct PersonnelRepositories<E, M, P, V> {
    pub employees: Arc<E>,
    pub employers: Arc<M>,
    pub passports: Arc<P>,
    pub visas: Arc<V>,
}

impl<E, M, P, V> Clone for PersonnelRepositories<E, M, P, V> {
    fn clone(&self) -> Self {
        Self {
            employees: Arc::clone(&self.employees),
            employers: Arc::clone(&self.employers),
            passports: Arc::clone(&self.passports),
            visas: Arc::clone(&self.visas),
        }
    }
}

/// Merges the four entity routers into one.
pub fn personnel_router<E, M, P, V>(repositories: PersonnelRepositories<E, M, P, V>) -> Router
where
    E: EmployeeRepository + 'static,
    M: EmployerRepository + 'static,
    P: PassportRepository + 'static,
    V: VisaRepository + 'static,
{
    Router::new()
        .merge(employee_router(repositories.employees))
        .merge(employer_router(repositories.employers))
        .merge(passport_router(repositories.passports))
        .merge(visa_router(repositories.visas))
}
