use axum::async_trait;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::domain::ValidationError;
use crate::use_cases::UseCaseError;

/// JSON body whose rejections render as field-scoped validation errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = UseCaseError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(body_rejection(&rejection)),
        }
    }
}

/// Query string whose rejections render as validation errors on `query`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = UseCaseError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(query_rejection(&rejection)),
        }
    }
}

fn body_rejection(rejection: &JsonRejection) -> UseCaseError {
    let text = rejection.body_text();
    let (field, message) = locate(detail(&text), "body");
    ValidationError::from_field_error(field, message).into()
}

fn query_rejection(rejection: &QueryRejection) -> UseCaseError {
    let text = rejection.body_text();
    let (field, message) = locate(detail(&text), "query");
    ValidationError::from_field_error(field, message).into()
}

/// Drops axum's "Failed to ...:" preamble.
fn detail(text: &str) -> &str {
    match text.split_once(": ") {
        Some((preamble, rest)) if preamble.starts_with("Failed to") => rest,
        _ => text,
    }
}

/// Picks the offending field out of a serde message: a leading `path: ` or a
/// ``missing field `name` `` clause. Anything else is pinned to `fallback`.
fn locate<'a>(detail: &'a str, fallback: &'a str) -> (&'a str, &'a str) {
    if let Some((path, message)) = detail.split_once(": ") {
        let is_path = !path.is_empty()
            && path
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'));
        if is_path {
            return (path, message);
        }
    }

    let missing = detail
        .split_once("missing field `")
        .and_then(|(_, rest)| rest.split_once('`'))
        .map(|(name, _)| name);
    match missing {
        Some(name) => (name, detail),
        None => (fallback, detail),
    }
}
