//! In-process store. Backs the tests and local runs without PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{Deletion, IncidentStore};
use crate::error::StoreError;
use crate::types::{Incident, IncidentId, NewIncident};

#[derive(Debug, Default)]
pub struct MemoryStore {
  incidents: RwLock<Vec<Incident>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl IncidentStore for MemoryStore {
  async fn insert(&self, incident: NewIncident) -> Result<Incident, StoreError> {
    let stored = Incident {
      id: IncidentId::generate(),
      title: incident.title,
      description: incident.description,
      severity: incident.severity,
      created_at: Utc::now(),
    };
    self.incidents.write().await.push(stored.clone());
    Ok(stored)
  }

  async fn list_all(&self) -> Result<Vec<Incident>, StoreError> {
    Ok(self.incidents.read().await.clone())
  }

  async fn find_by_id(&self, id: &str) -> Result<Option<Incident>, StoreError> {
    let Some(id) = IncidentId::parse(id) else {
      return Ok(None);
    };
    let incidents = self.incidents.read().await;
    Ok(incidents.iter().find(|i| i.id == id).cloned())
  }

  async fn delete_by_id(&self, id: &str) -> Result<Deletion, StoreError> {
    let Some(id) = IncidentId::parse(id) else {
      return Ok(Deletion::NotFound);
    };
    let mut incidents = self.incidents.write().await;
    match incidents.iter().position(|i| i.id == id) {
      Some(idx) => {
        incidents.remove(idx);
        Ok(Deletion::Deleted)
      }
      None => Ok(Deletion::NotFound),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Severity;

  fn new_incident(title: &str) -> NewIncident {
    NewIncident {
      title: title.into(),
      description: "desc".into(),
      severity: Severity::Medium,
    }
  }

  #[tokio::test]
  async fn insert_assigns_distinct_ids() {
    let store = MemoryStore::new();
    let a = store.insert(new_incident("a")).await.unwrap();
    let b = store.insert(new_incident("b")).await.unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(a.title, "a");
    assert_eq!(a.severity, Severity::Medium);
  }

  #[tokio::test]
  async fn list_all_keeps_insertion_order() {
    let store = MemoryStore::new();
    for title in ["first", "second", "third"] {
      store.insert(new_incident(title)).await.unwrap();
    }
    let titles: Vec<_> = store
      .list_all()
      .await
      .unwrap()
      .into_iter()
      .map(|i| i.title)
      .collect();
    assert_eq!(titles, ["first", "second", "third"]);
  }

  #[tokio::test]
  async fn find_treats_malformed_and_unknown_ids_alike() {
    let store = MemoryStore::new();
    let stored = store.insert(new_incident("a")).await.unwrap();
    assert_eq!(store.find_by_id(&stored.id.to_string()).await.unwrap(), Some(stored));
    assert_eq!(store.find_by_id("garbage").await.unwrap(), None);
    let unknown = IncidentId::generate().to_string();
    assert_eq!(store.find_by_id(&unknown).await.unwrap(), None);
  }

  #[tokio::test]
  async fn delete_removes_only_the_target() {
    let store = MemoryStore::new();
    let keep = store.insert(new_incident("keep")).await.unwrap();
    let gone = store.insert(new_incident("gone")).await.unwrap();

    assert_eq!(store.delete_by_id(&gone.id.to_string()).await.unwrap(), Deletion::Deleted);
    assert_eq!(store.delete_by_id(&gone.id.to_string()).await.unwrap(), Deletion::NotFound);
    assert_eq!(store.delete_by_id("garbage").await.unwrap(), Deletion::NotFound);
    assert_eq!(store.list_all().await.unwrap(), vec![keep]);
  }
}
