use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use super::ENTITY;
use crate::domain::{Employee, EmployeeFilters, NotFoundError};
use crate::repository::{EmployeeRepository, RepositoryResult, StatusCount};
use crate::use_cases::support::ensure_valid_id;
use crate::use_cases::UseCaseResult;

pub struct GetEmployeeByIdUseCase<R> {
    repository: Arc<R>,
}

impl<R> GetEmployeeByIdUseCase<R>
where
    R: EmployeeRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "employee.get", skip(self))]
    pub async fn execute(&self, id: i64) -> UseCaseResult<Employee> {
        ensure_valid_id(ENTITY, id)?;
        let employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::new(ENTITY, id))?;
        Ok(employee)
    }
}

/// Employee listing together with the aggregates used by list screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListWithStats {
    pub employees: Vec<Employee>,
    pub status_counts: Vec<StatusCount>,
    pub departments: Vec<String>,
    pub positions: Vec<String>,
}

pub struct GetAllEmployeesUseCase<R> {
    repository: Arc<R>,
}

impl<R> GetAllEmployeesUseCase<R>
where
    R: EmployeeRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "employee.list", skip(self))]
    pub async fn execute(&self, filters: &EmployeeFilters) -> UseCaseResult<Vec<Employee>> {
        let employees = self.fetch(filters).await?;
        debug!(count = employees.len(), "employees listed");
        Ok(employees)
    }

    #[instrument(name = "employee.list_with_stats", skip(self))]
    pub async fn execute_with_stats(
        &self,
        filters: &EmployeeFilters,
    ) -> UseCaseResult<EmployeeListWithStats> {
        let (employees, status_counts, departments, positions) = tokio::try_join!(
            self.fetch(filters),
            self.repository.get_stats_by_status(),
            self.repository.get_distinct_departments(),
            self.repository.get_distinct_positions(),
        )?;
        debug!(count = employees.len(), "employees listed with stats");

        Ok(EmployeeListWithStats {
            employees,
            status_counts,
            departments,
            positions,
        })
    }

    async fn fetch(&self, filters: &EmployeeFilters) -> RepositoryResult<Vec<Employee>> {
        if filters.is_empty() {
            self.repository.find_all().await
        } else {
            self.repository.find_by_filters(filters).await
        }
    }
}
