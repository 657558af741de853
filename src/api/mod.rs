//! API handlers for Adroute REST endpoints

pub mod health;
pub mod openapi;
pub mod route;
pub mod targets;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON extractor that reports malformed bodies as a structured 400
///
/// Axum's stock `Json` rejection renders plain text; routing callers expect
/// the same JSON error envelope as every other failure.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON: {}", e)))?;
        Ok(ValidatedJson(value))
    }
}
