//! Core types for the incident API (JSON contracts + domain models).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
  Low,
  Medium,
  High,
}

impl Severity {
  pub const ALL: [Severity; 3] = [Self::Low, Self::Medium, Self::High];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Low => "Low",
      Self::Medium => "Medium",
      Self::High => "High",
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0:?}")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
  type Err = UnknownSeverity;

  /// Exact, case-sensitive match against the three wire names.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|sev| sev.as_str() == s)
      .ok_or_else(|| UnknownSeverity(s.to_string()))
  }
}

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// Store-assigned identifier of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(pub Uuid);

impl IncidentId {
  pub fn generate() -> Self {
    Self(Uuid::new_v4())
  }

  /// Parse a path segment. `None` means the id is malformed, which callers
  /// treat exactly like a missing record.
  pub fn parse(raw: &str) -> Option<Self> {
    Uuid::parse_str(raw).ok().map(Self)
  }
}

impl fmt::Display for IncidentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

// ---------------------------------------------------------------------------
// Domain model
// ---------------------------------------------------------------------------

/// A persisted incident. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
  pub id: IncidentId,
  pub title: String,
  pub description: String,
  pub severity: Severity,
  pub created_at: DateTime<Utc>,
}

/// A validated incident that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIncident {
  pub title: String,
  pub description: String,
  pub severity: Severity,
}

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// POST /incidents body. Every field is optional here so that absence is a
/// validation failure rather than a decode failure. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewIncidentPayload {
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub severity: Option<String>,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// `{"error": "..."}` body for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
  pub error: String,
}

impl ErrorBody {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: message.into(),
    }
  }
}
