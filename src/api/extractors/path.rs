//! Path extractor that reports bad ids in the application's error format.

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Drop-in replacement for `axum::extract::Path`.
///
/// A segment that does not parse as the expected type cannot name a stored
/// record, so it is answered with `404` like any other unknown id.
pub struct Path<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Path<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Path(value)),
            Err(PathRejection::FailedToDeserializePathParams(e)) => {
                tracing::debug!(uri = %parts.uri, error = %e.body_text(), "Unparseable path");
                Err(AppError::NotFound)
            }
            Err(rejection) => Err(AppError::Internal(rejection.body_text())),
        }
    }
}
