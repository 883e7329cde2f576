use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::{ExpiryWindow, JsonBody, QueryParams};
use crate::domain::{NewVisa, Visa, VisaFilters, VisaPatch};
use crate::repository::VisaRepository;
use crate::use_cases::visa::{
    CreateVisaUseCase, DeleteVisaUseCase, GetAllVisasUseCase, GetExpiringVisasUseCase,
    GetVisaByIdUseCase, UpdateVisaUseCase, VisaListWithStats,
};
use crate::use_cases::UseCaseError;

/// Routes under `/api/v1/visas`.
pub fn visa_router<R>(repository: Arc<R>) -> Router
where
    R: VisaRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/visas",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route("/api/v1/visas/stats", get(stats_handler::<R>))
        .route("/api/v1/visas/expiring", get(expiring_handler::<R>))
        .route(
            "/api/v1/visas/:id",
            get(get_handler::<R>)
                .patch(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .route(
            "/api/v1/visas/:id/deactivate",
            post(deactivate_handler::<R>),
        )
        .with_state(repository)
}

async fn list_handler<R>(
    State(repository): State<Arc<R>>,
    QueryParams(filters): QueryParams<VisaFilters>,
) -> Result<Json<Vec<Visa>>, UseCaseError>
where
    R: VisaRepository + 'static,
{
    let visas = GetAllVisasUseCase::new(repository)
        .execute(&filters)
        .await?;
    Ok(Json(visas))
}

async fn stats_handler<R>(
    State(repository): State<Arc<R>>,
    QueryParams(filters): QueryParams<VisaFilters>,
) -> Result<Json<VisaListWithStats>, UseCaseError>
where
    R: VisaRepository + 'static,
{
    let listing = GetAllVisasUseCase::new(repository)
        .execute_with_stats(&filters)
        .await?;
    Ok(Json(listing))
}

async fn expiring_handler<R>(
    State(repository): State<Arc<R>>,
    QueryParams(window): QueryParams<ExpiryWindow>,
) -> Result<Json<Vec<Visa>>, UseCaseError>
where
    R: VisaRepository + 'static,
{
    let visas = GetExpiringVisasUseCase::new(repository)
        .execute(window.days)
        .await?;
    Ok(Json(visas))
}

async fn create_handler<R>(
    State(repository): State<Arc<R>>,
    JsonBody(request): JsonBody<NewVisa>,
) -> Result<Response, UseCaseError>
where
    R: VisaRepository + 'static,
{
    let visa = CreateVisaUseCase::new(repository).execute(request).await?;
    Ok((StatusCode::CREATED, Json(visa)).into_response())
}

async fn get_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Json<Visa>, UseCaseError>
where
    R: VisaRepository + 'static,
{
    let visa = GetVisaByIdUseCase::new(repository).execute(id).await?;
    Ok(Json(visa))
}

async fn update_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
    JsonBody(patch): JsonBody<VisaPatch>,
) -> Result<Json<Visa>, UseCaseError>
where
    R: VisaRepository + 'static,
{
    let visa = UpdateVisaUseCase::new(repository)
        .execute(id, patch)
        .await?;
    Ok(Json(visa))
}

async fn delete_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, UseCaseError>
where
    R: VisaRepository + 'static,
{
    DeleteVisaUseCase::new(repository).execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn deactivate_handler<R>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> Result<Json<Visa>, UseCaseError>
where
    R: VisaRepository + 'static,
{
    let visa = DeleteVisaUseCase::new(repository)
        .soft_delete(id)
        .await?;
    Ok(Json(visa))
}
