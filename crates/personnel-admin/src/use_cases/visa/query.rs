use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use super::ENTITY;
use crate::domain::{NotFoundError, Visa, VisaFilters};
use crate::repository::{VisaRepository, RepositoryResult, StatusCount};
use crate::use_cases::support::ensure_valid_id;
use crate::use_cases::{UseCaseResult, DEFAULT_EXPIRY_WINDOW_DAYS};

pub struct GetVisaByIdUseCase<R> {
    repository: Arc<R>,
}

impl<R> GetVisaByIdUseCase<R>
where
    R: VisaRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "visa.get", skip(self))]
    pub async fn execute(&self, id: i64) -> UseCaseResult<Visa> {
        ensure_valid_id(ENTITY, id)?;
        let visa = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::new(ENTITY, id))?;
        Ok(visa)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaListWithStats {
    pub visas: Vec<Visa>,
    /// Histogram over `visaStatus`.
    pub status_counts: Vec<StatusCount>,
    pub visa_types: Vec<String>,
    pub destination_countries: Vec<String>,
}

pub struct GetAllVisasUseCase<R> {
    repository: Arc<R>,
}

impl<R> GetAllVisasUseCase<R>
where
    R: VisaRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "visa.list", skip(self))]
    pub async fn execute(&self, filters: &VisaFilters) -> UseCaseResult<Vec<Visa>> {
        let visas = self.fetch(filters).await?;
        debug!(count = visas.len(), "visas listed");
        Ok(visas)
    }

    #[instrument(name = "visa.list_with_stats", skip(self))]
    pub async fn execute_with_stats(
        &self,
        filters: &VisaFilters,
    ) -> UseCaseResult<VisaListWithStats> {
        let (visas, status_counts, visa_types, destination_countries) = tokio::try_join!(
            self.fetch(filters),
            self.repository.get_stats_by_status(),
            self.repository.get_distinct_visa_types(),
            self.repository.get_distinct_destination_countries(),
        )?;
        debug!(count = visas.len(), "visas listed with stats");

        Ok(VisaListWithStats {
            visas,
            status_counts,
            visa_types,
            destination_countries,
        })
    }

    async fn fetch(&self, filters: &VisaFilters) -> RepositoryResult<Vec<Visa>> {
        if filters.is_empty() {
            self.repository.find_all().await
        } else {
            self.repository.find_by_filters(filters).await
        }
    }
}

/// Visas expiring within `days` days, soonest first.
pub struct GetExpiringVisasUseCase<R> {
    repository: Arc<R>,
}

impl<R> GetExpiringVisasUseCase<R>
where
    R: VisaRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(name = "visa.expiring", skip(self))]
    pub async fn execute(&self, days: Option<u32>) -> UseCaseResult<Vec<Visa>> {
        let days = days.unwrap_or(DEFAULT_EXPIRY_WINDOW_DAYS);
        let visas = self.repository.find_expiring_within_days(days).await?;
        debug!(days, count = visas.len(), "expiring visas listed");
        Ok(visas)
    }
}
