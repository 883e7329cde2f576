use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::{ExpiryWindow, JsonBody, QueryParams};
use crate::domain::{NewPassport, Passport, PassportFilters, PassportPatch};
use crate::repository::PassportRepository;
use crate::use_cases::passport::{
    CreatePassportUseCase, DeletePassportUseCase, GetAllPassportsUseCase,
    GetExpiringPassportsUseCase, GetPassportByIdUseCase, PassportListWithStats,
    UpdatePassportUseCase,
};
use crate::use_cases::UseCaseError;

/// Routes under `/api/v1/passports`. Passports are returned as stored.
pub fn passport_router<R>(repository: Arc<R>) -> Router
where
    R: PassportRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/passports",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route("/api/v1/passports/stats", get(stats_handler::<R>))
        .route("/api/v1/passports/expiring", get(expiring_handler::<R>))
        .route(
            "/api/v1/passports/:id",
            get(get_handler::<R>)
                .patch(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .route(
            "/api/v1/passports/:id/deactivate",
            post(deactivate_handler::<R>),
        )
        .with_state(repository)
}

async fn list_handler<R>(
    State(repository): State<Arc<R>>,
    QueryParams(filters): QueryParams<PassportFilters>,
) -> Result<Json<Vec<Passport>>, UseCaseError>
where
    R: PassportRepository + 'static,
{
    let passports = GetAllPassportsUseCase::new(repository)
        .execute(&filters)
        .await?;
    Ok(Json(passports))
}

async fn stats_handler<R>(
    State(repository): State<Arc<R>>,
    QueryParams(filters): QueryParams<PassportFilters>,
) -> Result<Json<PassportListWithStats>, UseCaseError>
where
    R: PassportRepository + 'static,
{
    let listing = GetAllPassportsUseCase::new(repository)
        .execute_with_stats(&filters)
        .await?;
    Ok(Json(listing))
}

async fn expiring_handler<R>(
    State(repository): State<Arc<R>>,
    QueryParams(window): QueryParams<ExpiryWindow>,
) -> Result<Json<Vec<Passport>>, UseCaseError>
where
    R: PassportRepository + 'static,
{
    let passports = GetExpiringPassportsUseCase::new(repository)
        .execute(window.days)
        .await?;
    Ok(Json(passports))
}

async fn create_handler<R>(
    State(repository): State<Arc<R>>,
    JsonBody(request): JsonBody<NewPassport>,
) -> Result<Response, UseCaseError>
where
    R: PassportRepository + 'static,
{
    let passport = CreatePassportUseCase::new(repository).execute(request).await?;
    Ok((StatusCode::CREATED, Json(passport)).into_response())
}

async fn get_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Json<Passport>, UseCaseError>
where
    R: PassportRepository + 'static,
{
    let passport = GetPassportByIdUseCase::new(repository).execute(id).await?;
    Ok(Json(passport))
}

async fn update_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
    JsonBody(patch): JsonBody<PassportPatch>,
) -> Result<Json<Passport>, UseCaseError>
where
    R: PassportRepository + 'static,
{
    let passport = UpdatePassportUseCase::new(repository)
        .execute(id, patch)
        .await?;
    Ok(Json(passport))
}

async fn delete_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, UseCaseError>
where
    R: PassportRepository + 'static,
{
    DeletePassportUseCase::new(repository).execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn deactivate_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Json<Passport>, UseCaseError>
where
    R: PassportRepository + 'static,
{
    let passport = DeletePassportUseCase::new(repository)
        .soft_delete(id)
        .await?;
    Ok(Json(passport))
}
