use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{
    CompanyIdentity, Employee, EmployeeFilters, EmployerIdentity, NewEmployee, NewEmployer,
    NewPassport, NewVisa, PersonIdentity, PersonType,
};
use crate::repository::{
    EmployeeRepository, InMemoryEmployeeRepository, RepositoryError, RepositoryResult,
    StatusCount,
};
use crate::use_cases::UseCaseError;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn employee_request(first: &str, last: &str, email: &str) -> NewEmployee {
    NewEmployee {
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email: Some(email.to_string()),
        status: Some("ACTIVE".to_string()),
        ..NewEmployee::default()
    }
}

pub(super) fn company_request(name: &str, registration_number: Option<&str>) -> NewEmployer {
    let mut request = NewEmployer::with_identity(EmployerIdentity::Company(CompanyIdentity {
        company_name: Some(name.to_string()),
        registration_number: registration_number.map(str::to_string),
        industry: Some("Logistics".to_string()),
        ..CompanyIdentity::default()
    }));
    request.status = Some("ACTIVE".to_string());
    request
}

pub(super) fn individual_request(first: &str, middle: Option<&str>, last: &str) -> NewEmployer {
    let mut request = NewEmployer::with_identity(EmployerIdentity::Individual(PersonIdentity {
        first_name: Some(first.to_string()),
        middle_name: middle.map(str::to_string),
        last_name: Some(last.to_string()),
    }));
    request.status = Some("ACTIVE".to_string());
    request
}

pub(super) fn passport_request(number: &str) -> NewPassport {
    NewPassport {
        passport_number: Some(number.to_string()),
        issuing_country: Some("Ghana".to_string()),
        nationality: Some("Ghanaian".to_string()),
        first_name: Some("Ama".to_string()),
        last_name: Some("Owusu".to_string()),
        issue_date: Some(date(2022, 3, 1)),
        expiry_date: Some(date(2032, 2, 28)),
        person_type: Some(PersonType::Employee),
        person_id: Some(1),
        status: Some("VALID".to_string()),
        ..NewPassport::default()
    }
}

pub(super) fn visa_request(number: &str) -> NewVisa {
    NewVisa {
        visa_number: Some(number.to_string()),
        visa_type: Some("WORK".to_string()),
        issuing_country: Some("United Kingdom".to_string()),
        destination_country: Some("United Kingdom".to_string()),
        first_name: Some("Ama".to_string()),
        last_name: Some("Owusu".to_string()),
        nationality: Some("Ghanaian".to_string()),
        person_type: Some(PersonType::Employee),
        person_id: Some(1),
        issue_date: Some(date(2024, 5, 1)),
        expiry_date: Some(date(2027, 4, 30)),
        visa_status: Some("ACTIVE".to_string()),
        ..NewVisa::default()
    }
}

pub(super) fn expect_validation(error: UseCaseError) -> Vec<(String, String)> {
    match error {
        UseCaseError::Validation(error) => error
            .into_errors()
            .into_iter()
            .map(|error| (error.field, error.message))
            .collect(),
        other => panic!("expected validation error, got {other:?}"),
    }
}

/// Wraps the in-memory store but hides rows from unique-key lookups and can
/// refuse deletes, standing in for a store that races or fails writes.
#[derive(Default)]
pub(super) struct ScriptedEmployeeRepository {
    pub(super) inner: InMemoryEmployeeRepository,
    pub(super) blind_lookups: AtomicBool,
    pub(super) refuse_delete: AtomicBool,
}

impl ScriptedEmployeeRepository {
    pub(super) fn blind() -> Self {
        let repository = Self::default();
        repository.blind_lookups.store(true, Ordering::SeqCst);
        repository
    }

    pub(super) fn refusing_delete() -> Self {
        let repository = Self::default();
        repository.refuse_delete.store(true, Ordering::SeqCst);
        repository
    }
}

#[async_trait]
impl EmployeeRepository for ScriptedEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Employee>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Employee>> {
        self.inner.find_all().await
    }

    async fn find_by_filters(&self, filters: &EmployeeFilters) -> RepositoryResult<Vec<Employee>> {
        self.inner.find_by_filters(filters).await
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Employee>> {
        if self.blind_lookups.load(Ordering::SeqCst) {
            return Ok(None);
        }
        self.inner.find_by_email(email).await
    }

    async fn create(&self, employee: Employee) -> RepositoryResult<Employee> {
        self.inner.create(employee).await
    }

    async fn update(&self, id: i64, employee: Employee) -> RepositoryResult<Option<Employee>> {
        self.inner.update(id, employee).await
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        if self.refuse_delete.load(Ordering::SeqCst) {
            return Ok(false);
        }
        self.inner.delete(id).await
    }

    async fn exists(&self, id: i64) -> RepositoryResult<bool> {
        self.inner.exists(id).await
    }

    async fn get_stats_by_status(&self) -> RepositoryResult<Vec<StatusCount>> {
        self.inner.get_stats_by_status().await
    }

    async fn get_distinct_departments(&self) -> RepositoryResult<Vec<String>> {
        self.inner.get_distinct_departments().await
    }

    async fn get_distinct_positions(&self) -> RepositoryResult<Vec<String>> {
        self.inner.get_distinct_positions().await
    }
}

pub(super) struct UnavailableEmployeeRepository;

fn offline<T>() -> RepositoryResult<T> {
    Err(RepositoryError::Unavailable("database offline".to_string()))
}

#[async_trait]
impl EmployeeRepository for UnavailableEmployeeRepository {
    async fn find_by_id(&self, _id: i64) -> RepositoryResult<Option<Employee>> {
        offline()
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Employee>> {
        offline()
    }

    async fn find_by_filters(&self, _filters: &EmployeeFilters) -> RepositoryResult<Vec<Employee>> {
        offline()
    }

    async fn find_by_email(&self, _email: &str) -> RepositoryResult<Option<Employee>> {
        offline()
    }

    async fn create(&self, _employee: Employee) -> RepositoryResult<Employee> {
        offline()
    }

    async fn update(&self, _id: i64, _employee: Employee) -> RepositoryResult<Option<Employee>> {
        offline()
    }

    async fn delete(&self, _id: i64) -> RepositoryResult<bool> {
        offline()
    }

    async fn exists(&self, _id: i64) -> RepositoryResult<bool> {
        offline()
    }

    async fn get_stats_by_status(&self) -> RepositoryResult<Vec<StatusCount>> {
        offline()
    }

    async fn get_distinct_departments(&self) -> RepositoryResult<Vec<String>> {
        offline()
    }

    async fn get_distinct_positions(&self) -> RepositoryResult<Vec<String>> {
        offline()
    }
}
