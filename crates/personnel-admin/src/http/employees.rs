use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::{JsonBody, QueryParams};
use crate::domain::{EmployeeFilters, EmployeePatch, NewEmployee};
use crate::dto::{DetailedEmployeeResponseDto, EmployeeListResponseDto};
use crate::repository::EmployeeRepository;
use crate::use_cases::employee::{
    CreateEmployeeUseCase, DeleteEmployeeUseCase, GetAllEmployeesUseCase, GetEmployeeByIdUseCase,
    UpdateEmployeeUseCase,
};
use crate::use_cases::UseCaseError;

/// Routes under `/api/v1/employees`.
pub fn employee_router<R>(repository: Arc<R>) -> Router
where
    R: EmployeeRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/employees",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route("/api/v1/employees/stats", get(stats_handler::<R>))
        .route(
            "/api/v1/employees/:id",
            get(get_handler::<R>)
                .patch(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .route(
            "/api/v1/employees/:id/deactivate",
            post(deactivate_handler::<R>),
        )
        .with_state(repository)
}

async fn list_handler<R>(
    State(repository): State<Arc<R>>,
    QueryParams(filters): QueryParams<EmployeeFilters>,
) -> Result<Json<EmployeeListResponseDto>, UseCaseError>
where
    R: EmployeeRepository + 'static,
{
    let employees = GetAllEmployeesUseCase::new(repository)
        .execute(&filters)
        .await?;
    Ok(Json(EmployeeListResponseDto::from(employees.as_slice())))
}

async fn stats_handler<R>(
    State(repository): State<Arc<R>>,
    QueryParams(filters): QueryParams<EmployeeFilters>,
) -> Result<Json<EmployeeListResponseDto>, UseCaseError>
where
    R: EmployeeRepository + 'static,
{
    let listing = GetAllEmployeesUseCase::new(repository)
        .execute_with_stats(&filters)
        .await?;
    Ok(Json(EmployeeListResponseDto::from(listing)))
}

async fn create_handler<R>(
    State(repository): State<Arc<R>>,
    JsonBody(request): JsonBody<NewEmployee>,
) -> Result<Response, UseCaseError>
where
    R: EmployeeRepository + 'static,
{
    let employee = CreateEmployeeUseCase::new(repository).execute(request).await?;
    let body = DetailedEmployeeResponseDto::from(employee);
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

async fn get_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Json<DetailedEmployeeResponseDto>, UseCaseError>
where
    R: EmployeeRepository + 'static,
{
    let employee = GetEmployeeByIdUseCase::new(repository).execute(id).await?;
    Ok(Json(DetailedEmployeeResponseDto::from(employee)))
}

async fn update_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
    JsonBody(patch): JsonBody<EmployeePatch>,
) -> Result<Json<DetailedEmployeeResponseDto>, UseCaseError>
where
    R: EmployeeRepository + 'static,
{
    let employee = UpdateEmployeeUseCase::new(repository)
        .execute(id, patch)
        .await?;
    Ok(Json(DetailedEmployeeResponseDto::from(employee)))
}

async fn delete_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, UseCaseError>
where
    R: EmployeeRepository + 'static,
{
    DeleteEmployeeUseCase::new(repository).execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn deactivate_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Json<DetailedEmployeeResponseDto>, UseCaseError>
where
    R: EmployeeRepository + 'static,
{
    let employee = DeleteEmployeeUseCase::new(repository)
        .soft_delete(id)
        .await?;
    Ok(Json(DetailedEmployeeResponseDto::from(employee)))
}
