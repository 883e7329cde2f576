use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::{JsonBody, QueryParams};
use crate::domain::{EmployerFilters, EmployerPatch, NewEmployer};
use crate::dto::{DetailedEmployerResponseDto, EmployerListResponseDto};
use crate::repository::EmployerRepository;
use crate::use_cases::employer::{
    CreateEmployerUseCase, DeleteEmployerUseCase, GetAllEmployersUseCase, GetEmployerByIdUseCase,
    UpdateEmployerUseCase,
};
use crate::use_cases::UseCaseError;

/// Routes under `/api/v1/employers`.
pub fn employer_router<R>(repository: Arc<R>) -> Router
where
    R: EmployerRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/employers",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route("/api/v1/employers/stats", get(stats_handler::<R>))
        .route(
            "/api/v1/employers/:id",
            get(get_handler::<R>)
                .patch(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .route(
            "/api/v1/employers/:id/deactivate",
            post(deactivate_handler::<R>),
        )
        .with_state(repository)
}

async fn list_handler<R>(
    State(repository): State<Arc<R>>,
    QueryParams(filters): QueryParams<EmployerFilters>,
) -> Result<Json<EmployerListResponseDto>, UseCaseError>
where
    R: EmployerRepository + 'static,
{
    let employers = GetAllEmployersUseCase::new(repository)
        .execute(&filters)
        .await?;
    Ok(Json(EmployerListResponseDto::from(employers.as_slice())))
}

async fn stats_handler<R>(
    State(repository): State<Arc<R>>,
    QueryParams(filters): QueryParams<EmployerFilters>,
) -> Result<Json<EmployerListResponseDto>, UseCaseError>
where
    R: EmployerRepository + 'static,
{
    let listing = GetAllEmployersUseCase::new(repository)
        .execute_with_stats(&filters)
        .await?;
    Ok(Json(EmployerListResponseDto::from(listing)))
}

async fn create_handler<R>(
    State(repository): State<Arc<R>>,
    JsonBody(request): JsonBody<NewEmployer>,
) -> Result<Response, UseCaseError>
where
    R: EmployerRepository + 'static,
{
    let employer = CreateEmployerUseCase::new(repository).execute(request).await?;
    let body = DetailedEmployerResponseDto::from(employer);
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

async fn get_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Json<DetailedEmployerResponseDto>, UseCaseError>
where
    R: EmployerRepository + 'static,
{
    let employer = GetEmployerByIdUseCase::new(repository).execute(id).await?;
    Ok(Json(DetailedEmployerResponseDto::from(employer)))
}

async fn update_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
    JsonBody(patch): JsonBody<EmployerPatch>,
) -> Result<Json<DetailedEmployerResponseDto>, UseCaseError>
where
    R: EmployerRepository + 'static,
{
    let employer = UpdateEmployerUseCase::new(repository)
        .execute(id, patch)
        .await?;
    Ok(Json(DetailedEmployerResponseDto::from(employer)))
}

async fn delete_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, UseCaseError>
where
    R: EmployerRepository + 'static,
{
    DeleteEmployerUseCase::new(repository).execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn deactivate_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Json<DetailedEmployerResponseDto>, UseCaseError>
where
    R: EmployerRepository + 'static,
{
    let employer = DeleteEmployerUseCase::new(repository)
        .soft_delete(id)
        .await?;
    Ok(Json(DetailedEmployerResponseDto::from(employer)))
}
