use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use super::ENTITY;
use crate::domain::{Employer, EmployerFilters, NotFoundError};
use crate::repository::{EmployerRepository, RepositoryResult, StatusCount};
use crate::use_cases::support::ensure_valid_id;
use crate::use_cases::UseCaseResult;

pub struct GetEmployerByIdUseCase<R> {
    repository: Arc<R>,
}

impl<R> GetEmployerByIdUseCase<R>
where
    R: EmployerRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "employer.get", skip(self))]
    pub async fn execute(&self, id: i64) -> UseCaseResult<Employer> {
        ensure_valid_id(ENTITY, id)?;
        let employer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::new(ENTITY, id))?;
        Ok(employer)
    }
}

/// Employer listing together with the aggregates used by list screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerListWithStats {
    pub employers: Vec<Employer>,
    pub status_counts: Vec<StatusCount>,
    pub industries: Vec<String>,
    pub countries: Vec<String>,
}

pub struct GetAllEmployersUseCase<R> {
    repository: Arc<R>,
}

impl<R> GetAllEmployersUseCase<R>
where
    R: EmployerRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "employer.list", skip(self))]
    pub async fn execute(&self, filters: &EmployerFilters) -> UseCaseResult<Vec<Employer>> {
        let employers = self.fetch(filters).await?;
        debug!(count = employers.len(), "employers listed");
        Ok(employers)
    }

    #[instrument(name = "employer.list_with_stats", skip(self))]
    pub async fn execute_with_stats(
        &self,
        filters: &EmployerFilters,
    ) -> UseCaseResult<EmployerListWithStats> {
        let (employers, status_counts, industries, countries) = tokio::try_join!(
            self.fetch(filters),
            self.repository.get_stats_by_status(),
            self.repository.get_distinct_industries(),
            self.repository.get_distinct_countries(),
        )?;
        debug!(count = employers.len(), "employers listed with stats");

        Ok(EmployerListWithStats {
            employers,
            status_counts,
            industries,
            countries,
        })
    }

    async fn fetch(&self, filters: &EmployerFilters) -> RepositoryResult<Vec<Employer>> {
        if filters.is_empty() {
            self.repository.find_all().await
        } else {
            self.repository.find_by_filters(filters).await
        }
    }
}
