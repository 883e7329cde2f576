use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use super::ENTITY;
use crate::domain::{NotFoundError, Passport, PassportFilters};
use crate::repository::{PassportRepository, RepositoryResult, StatusCount};
use crate::use_cases::support::ensure_valid_id;
use crate::use_cases::{UseCaseResult, DEFAULT_EXPIRY_WINDOW_DAYS};

pub struct GetPassportByIdUseCase<R> {
    repository: Arc<R>,
}

impl<R> GetPassportByIdUseCase<R>
where
    R: PassportRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "passport.get", skip(self))]
    pub async fn execute(&self, id: i64) -> UseCaseResult<Passport> {
        ensure_valid_id(ENTITY, id)?;
        let passport = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::new(ENTITY, id))?;
        Ok(passport)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassportListWithStats {
    pub passports: Vec<Passport>,
    pub status_counts: Vec<StatusCount>,
    pub nationalities: Vec<String>,
    pub issuing_countries: Vec<String>,
}

pub struct GetAllPassportsUseCase<R> {
    repository: Arc<R>,
}

impl<R> GetAllPassportsUseCase<R>
where
    R: PassportRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "passport.list", skip(self))]
    pub async fn execute(&self, filters: &PassportFilters) -> UseCaseResult<Vec<Passport>> {
        let passports = self.fetch(filters).await?;
        debug!(count = passports.len(), "passports listed");
        Ok(passports)
    }

    #[instrument(name = "passport.list_with_stats", skip(self))]
    pub async fn execute_with_stats(
        &self,
        filters: &PassportFilters,
    ) -> UseCaseResult<PassportListWithStats> {
        let (passports, status_counts, nationalities, issuing_countries) = tokio::try_join!(
            self.fetch(filters),
            self.repository.get_stats_by_status(),
            self.repository.get_distinct_nationalities(),
            self.repository.get_distinct_issuing_countries(),
        )?;
        debug!(count = passports.len(), "passports listed with stats");

        Ok(PassportListWithStats {
            passports,
            status_counts,
            nationalities,
            issuing_countries,
        })
    }

    async fn fetch(&self, filters: &PassportFilters) -> RepositoryResult<Vec<Passport>> {
        if filters.is_empty() {
            self.repository.find_all().await
        } else {
            self.repository.find_by_filters(filters).await
        }
    }
}

/// Passports whose expiry date falls within the next `days` days. The window
/// itself is evaluated by the repository.
pub struct GetExpiringPassportsUseCase<R> {
    repository: Arc<R>,
}

impl<R> GetExpiringPassportsUseCase<R>
where
    R: PassportRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "passport.expiring", skip(self))]
    pub async fn execute(&self, days: Option<u32>) -> UseCaseResult<Vec<Passport>> {
        let days = days.unwrap_or(DEFAULT_EXPIRY_WINDOW_DAYS);
        let passports = self.repository.find_expiring_within_days(days).await?;
        debug!(days, count = passports.len(), "expiring passports listed");
        Ok(passports)
    }
}
