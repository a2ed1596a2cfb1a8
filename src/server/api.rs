//! Request and response payloads for the HTTP API.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::weapon::WeaponSummary;
use crate::error::CalcError;

pub const SERVICE_NAME: &str = "mhrb-api";

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeaponsQuery {
    /// Restrict the listing to one category; every category when absent.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeaponsResponse {
    pub count: usize,
    pub weapons: Vec<WeaponSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    Body(String),
    #[error("invalid query: {0}")]
    Query(String),
    #[error("unknown weapon category '{0}'")]
    UnknownCategory(String),
    #[error(transparent)]
    Calc(#[from] CalcError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Query(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(%status, error = %self, "request rejected");
        let body = ErrorResponse {
            status: "error",
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
