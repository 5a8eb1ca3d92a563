//! Request extractors.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that rejects with [`AppError::BadRequest`].
///
/// Axum's own [`Json`] answers 415/422 for missing content types or bodies
/// that do not fit the schema. Every malformed body is a client error of the
/// same kind here, so all of them become a 400 with the JSON error shape.
///
/// Take it as `Result<ApiJson<T>, AppError>` to defer the rejection until
/// after other checks have run.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Path parameter extractor that rejects with [`AppError::NotFound`].
///
/// A segment that does not parse (`/api/skills/abc`, or an id past `i64`)
/// can never name a stored record, so it answers 404 like an unknown id.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::NotFound(rejection.body_text())),
        }
    }
}
