//! Incident persistence.
//!
//! Handlers only see the [`IncidentStore`] trait; the concrete store is
//! chosen at startup and injected through [`AppState`](crate::AppState).

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{Incident, NewIncident};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Outcome of [`IncidentStore::delete_by_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
  Deleted,
  NotFound,
}

#[async_trait]
pub trait IncidentStore: Send + Sync {
  /// Persist a new record, assigning its id and creation time.
  async fn insert(&self, incident: NewIncident) -> Result<Incident, StoreError>;

  /// Every stored incident in insertion order.
  async fn list_all(&self) -> Result<Vec<Incident>, StoreError>;

  /// `Ok(None)` when no record matches, including malformed ids.
  async fn find_by_id(&self, id: &str) -> Result<Option<Incident>, StoreError>;

  /// Malformed ids yield [`Deletion::NotFound`] without touching storage.
  async fn delete_by_id(&self, id: &str) -> Result<Deletion, StoreError>;
}
