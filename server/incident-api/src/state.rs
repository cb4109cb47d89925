//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::store::IncidentStore;

/// Holds the injected store. The store is the only state shared across requests.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn IncidentStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn IncidentStore>) -> Self {
    Self { store }
  }
}
