//! Request-part extractors whose rejections use the API error envelope

use axum::{
    extract::{FromRequestParts, Path as AxumPath, Query as AxumQuery},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::ApiError;
use crate::domain::operation::ScreenId;

/// Header naming the client screen instance a request comes from
pub const SCREEN_HEADER: &str = "x-screen-id";

/// `axum::extract::Path` with an enveloped rejection
#[derive(Debug, Clone)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumPath::<T>::from_request_parts(parts, state).await {
            Ok(AxumPath(value)) => Ok(Path(value)),
            Err(rejection) => Err(ApiError::bad_request(rejection.body_text())
                .with_code("invalid_path_parameter")),
        }
    }
}

/// `axum::extract::Query` with an enveloped rejection
#[derive(Debug, Clone)]
pub struct Query<T>(pub T);

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(value)) => Ok(Query(value)),
            Err(rejection) => Err(ApiError::bad_request(rejection.body_text())
                .with_code("invalid_query_parameter")),
        }
    }
}

/// The screen a request belongs to, from the `x-screen-id` header.
///
/// Without the header the request is its own screen, so it never waits on
/// or blocks anything else.
#[derive(Debug, Clone)]
pub struct Screen(pub ScreenId);

impl<S> FromRequestParts<S> for Screen
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(SCREEN_HEADER) else {
            return Ok(Screen(ScreenId::generate()));
        };

        value
            .to_str()
            .map_err(|_| "Invalid screen ID: header is not visible ASCII".to_string())
            .and_then(ScreenId::new)
            .map(Screen)
            .map_err(|message| ApiError::bad_request(message).with_param(SCREEN_HEADER))
    }
}
