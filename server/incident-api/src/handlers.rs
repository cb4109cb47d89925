//! HTTP handlers for the incident API.

use axum::{
  extract::{rejection::JsonRejection, Path, State},
  http::StatusCode,
  Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::Deletion;
use crate::types::{Incident, NewIncidentPayload};
use crate::validate;

pub async fn health() -> &'static str {
  "ok"
}

pub async fn list_incidents(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Incident>>, ApiError> {
  let incidents = state.store.list_all().await?;
  Ok(Json(incidents))
}

pub async fn create_incident(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<NewIncidentPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Incident>), ApiError> {
  let Json(payload) = payload.map_err(|rejection| {
    tracing::debug!(reason = %rejection.body_text(), "create: undecodable body");
    ApiError::InvalidInput
  })?;

  let new_incident = validate::new_incident(payload).inspect_err(|_| {
    tracing::debug!("create: payload failed validation");
  })?;

  let incident = state.store.insert(new_incident).await?;
  tracing::info!(id = %incident.id, severity = %incident.severity, "incident created");
  Ok((StatusCode::CREATED, Json(incident)))
}

pub async fn get_incident(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<Incident>, ApiError> {
  match state.store.find_by_id(&id).await {
    Ok(Some(incident)) => Ok(Json(incident)),
    Ok(None) => Err(ApiError::NotFound),
    Err(e) => {
      tracing::error!(%id, error = %e, "get: store error, answering not found");
      Err(ApiError::NotFound)
    }
  }
}

pub async fn delete_incident(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
  match state.store.delete_by_id(&id).await {
    Ok(Deletion::Deleted) => {
      tracing::info!(%id, "incident deleted");
      Ok(StatusCode::NO_CONTENT)
    }
    Ok(Deletion::NotFound) => Err(ApiError::NotFound),
    Err(e) => {
      tracing::error!(%id, error = %e, "delete: store error, answering not found");
      Err(ApiError::NotFound)
    }
  }
}
