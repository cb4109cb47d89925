//! PushLog Incident API
//!
//! HTTP service that records incidents (title, description, severity) and
//! serves create / list / fetch / delete over `/incidents`. Storage is behind
//! the [`IncidentStore`] trait: PostgreSQL in production, in-memory in tests.

pub mod config;
pub mod error;
mod handlers;
mod routes;
mod state;
pub mod store;
pub mod types;
pub mod validate;

pub use config::Config;
pub use error::{ApiError, ConfigError, StoreError};
pub use handlers::{create_incident, delete_incident, get_incident, health, list_incidents};
pub use routes::create_router;
pub use state::AppState;
pub use store::{Deletion, IncidentStore, MemoryStore, PgStore};
pub use types::{Incident, IncidentId, NewIncident, NewIncidentPayload, Severity};
