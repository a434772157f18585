//! JSON body extractor with catalog error responses.
//!
//! Axum's own `Json` rejects bad bodies with plain-text 4xx responses of
//! varying status. `ApiJson` turns every body problem into a 400 carrying
//! the usual `{code, message}` error shape.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use catalog_core::CatalogError;
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejection is a `VALIDATION_ERROR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError(CatalogError::validation(rejection.body_text())))?;

        Ok(Self(value))
    }
}
