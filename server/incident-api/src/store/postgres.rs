//! PostgreSQL-backed incident store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx_core::query::query;
use sqlx_core::row::Row;
use sqlx_postgres::{PgPool, PgRow, Postgres};
use uuid::Uuid;

use super::{Deletion, IncidentStore};
use crate::error::StoreError;
use crate::types::{Incident, IncidentId, NewIncident, Severity};

/// CHECK constraints mirror the validation rules so rows written by other
/// clients still hold the incident invariants.
const SCHEMA: &str = r#"
  CREATE TABLE IF NOT EXISTS incidents (
    id          UUID PRIMARY KEY,
    title       TEXT NOT NULL CHECK (title <> ''),
    description TEXT NOT NULL CHECK (description <> ''),
    severity    TEXT NOT NULL CHECK (severity IN ('Low', 'Medium', 'High')),
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
  )
"#;

const COLUMNS: &str = "id, title, description, severity, created_at";

#[derive(Debug, Clone)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }

  /// Create the `incidents` table if it does not exist yet. Idempotent.
  pub async fn ensure_schema(&self) -> Result<(), StoreError> {
    query::<Postgres>(SCHEMA).execute(&self.pool).await?;
    Ok(())
  }
}

fn incident_from_row(row: &PgRow) -> Result<Incident, StoreError> {
  let id: Uuid = row.try_get("id")?;
  let severity: String = row.try_get("severity")?;
  let created_at: DateTime<Utc> = row.try_get("created_at")?;

  Ok(Incident {
    id: IncidentId(id),
    title: row.try_get("title")?,
    description: row.try_get("description")?,
    severity: severity
      .parse::<Severity>()
      .map_err(|e| StoreError::corrupt("severity", e.to_string()))?,
    created_at,
  })
}

#[async_trait]
impl IncidentStore for PgStore {
  async fn insert(&self, incident: NewIncident) -> Result<Incident, StoreError> {
    let sql = format!(
      "INSERT INTO incidents (id, title, description, severity, created_at) \
       VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
    );
    let row = query::<Postgres>(&sql)
      .bind(IncidentId::generate().0)
      .bind(&incident.title)
      .bind(&incident.description)
      .bind(incident.severity.as_str())
      .bind(Utc::now())
      .fetch_one(&self.pool)
      .await?;

    incident_from_row(&row)
  }

  async fn list_all(&self) -> Result<Vec<Incident>, StoreError> {
    let sql = format!("SELECT {COLUMNS} FROM incidents ORDER BY created_at, id");
    let rows = query::<Postgres>(&sql).fetch_all(&self.pool).await?;
    rows.iter().map(incident_from_row).collect()
  }

  async fn find_by_id(&self, id: &str) -> Result<Option<Incident>, StoreError> {
    let Some(id) = IncidentId::parse(id) else {
      return Ok(None);
    };
    let sql = format!("SELECT {COLUMNS} FROM incidents WHERE id = $1");
    let row = query::<Postgres>(&sql)
      .bind(id.0)
      .fetch_optional(&self.pool)
      .await?;

    row.as_ref().map(incident_from_row).transpose()
  }

  async fn delete_by_id(&self, id: &str) -> Result<Deletion, StoreError> {
    let Some(id) = IncidentId::parse(id) else {
      return Ok(Deletion::NotFound);
    };
    let result = query::<Postgres>("DELETE FROM incidents WHERE id = $1")
      .bind(id.0)
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      Ok(Deletion::NotFound)
    } else {
      Ok(Deletion::Deleted)
    }
  }
}
