//! Structured error types for the incident API.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use thiserror::Error;

use crate::types::ErrorBody;

/// Failures raised by an [`IncidentStore`](crate::store::IncidentStore).
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("database: {0}")]
  Database(#[from] sqlx_core::Error),

  #[error("corrupt row: {field}: {reason}")]
  Corrupt { field: String, reason: String },
}

impl StoreError {
  pub fn corrupt(field: &str, reason: impl Into<String>) -> Self {
    Self::Corrupt {
      field: field.to_string(),
      reason: reason.into(),
    }
  }
}

/// Errors a route handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Missing or invalid request fields. The caller is not told which one.
  #[error("invalid input")]
  InvalidInput,

  /// No record for the identifier, malformed identifiers included.
  #[error("not found")]
  NotFound,

  #[error("storage: {0}")]
  Storage(#[from] StoreError),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput => StatusCode::BAD_REQUEST,
      Self::NotFound => StatusCode::NOT_FOUND,
      Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn public_message(&self) -> &'static str {
    match self {
      Self::InvalidInput => "Invalid input",
      Self::NotFound => "Not found",
      Self::Storage(_) => "Internal server error",
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    if let Self::Storage(e) = &self {
      tracing::error!(error = %e, "request failed on storage");
    }
    (self.status(), Json(ErrorBody::new(self.public_message()))).into_response()
  }
}

/// Invalid or missing process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("{0} must be set")]
  Missing(&'static str),

  #[error("{name}: invalid value {value:?}: {reason}")]
  Invalid {
    name: &'static str,
    value: String,
    reason: String,
  },
}
