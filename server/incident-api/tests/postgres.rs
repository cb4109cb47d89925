//! PostgreSQL store round trip. Needs a live database:
//!
//!   TEST_DATABASE_URL=postgres://... cargo test -p incident-api -- --ignored

use incident_api::{Deletion, IncidentStore, NewIncident, PgStore, Severity};
use sqlx_postgres::PgPoolOptions;

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn pg_store_insert_find_delete() {
  let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
    eprintln!("TEST_DATABASE_URL not set, skipping");
    return;
  };
  let pool = PgPoolOptions::new()
    .max_connections(2)
    .connect(&url)
    .await
    .expect("connect to test database");
  let store = PgStore::new(pool);
  store.ensure_schema().await.expect("create schema");
  store.ensure_schema().await.expect("schema bootstrap is idempotent");

  let created = store
    .insert(NewIncident {
      title: "Server down".into(),
      description: "Prod outage".into(),
      severity: Severity::High,
    })
    .await
    .expect("insert");
  assert_eq!(created.title, "Server down");
  assert_eq!(created.severity, Severity::High);

  let id = created.id.to_string();
  let found = store.find_by_id(&id).await.expect("find").expect("record exists");
  assert_eq!(found.id, created.id);
  assert_eq!(found.description, "Prod outage");

  let listed = store.list_all().await.expect("list");
  assert!(listed.iter().any(|i| i.id == created.id));

  assert_eq!(store.find_by_id("not-a-uuid").await.expect("find"), None);
  assert_eq!(store.delete_by_id(&id).await.expect("delete"), Deletion::Deleted);
  assert_eq!(store.delete_by_id(&id).await.expect("delete"), Deletion::NotFound);
  assert_eq!(store.find_by_id(&id).await.expect("find"), None);
}
