//! Validate POST payloads into [`NewIncident`] values.

use crate::error::ApiError;
use crate::types::{NewIncident, NewIncidentPayload, Severity};

/// Check title, then description, then severity. The first failure
/// short-circuits; all of them collapse into [`ApiError::InvalidInput`].
pub fn new_incident(payload: NewIncidentPayload) -> Result<NewIncident, ApiError> {
  let title = required(payload.title).ok_or(ApiError::InvalidInput)?;
  let description = required(payload.description).ok_or(ApiError::InvalidInput)?;
  let severity = payload
    .severity
    .as_deref()
    .ok_or(ApiError::InvalidInput)?
    .parse::<Severity>()
    .map_err(|_| ApiError::InvalidInput)?;

  Ok(NewIncident {
    title,
    description,
    severity,
  })
}

/// Empty strings count as missing.
fn required(field: Option<String>) -> Option<String> {
  field.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn payload(title: Option<&str>, description: Option<&str>, severity: Option<&str>) -> NewIncidentPayload {
    NewIncidentPayload {
      title: title.map(Into::into),
      description: description.map(Into::into),
      severity: severity.map(Into::into),
    }
  }

  #[test]
  fn accepts_complete_payload() {
    let incident = new_incident(payload(Some("Server down"), Some("Prod outage"), Some("High"))).unwrap();
    assert_eq!(incident.title, "Server down");
    assert_eq!(incident.description, "Prod outage");
    assert_eq!(incident.severity, Severity::High);
  }

  #[test]
  fn rejects_missing_or_empty_title() {
    assert!(matches!(
      new_incident(payload(None, Some("d"), Some("Low"))),
      Err(ApiError::InvalidInput)
    ));
    assert!(matches!(
      new_incident(payload(Some(""), Some("d"), Some("Low"))),
      Err(ApiError::InvalidInput)
    ));
  }

  #[test]
  fn rejects_missing_or_empty_description() {
    assert!(new_incident(payload(Some("t"), None, Some("Low"))).is_err());
    assert!(new_incident(payload(Some("t"), Some(""), Some("Low"))).is_err());
  }

  #[test]
  fn rejects_severity_outside_allowed_set() {
    assert!(new_incident(payload(Some("t"), Some("d"), None)).is_err());
    assert!(new_incident(payload(Some("t"), Some("d"), Some("Critical"))).is_err());
    assert!(new_incident(payload(Some("t"), Some("d"), Some("low"))).is_err());
  }
}
