//! Shared helpers for `PostgreSQL` integration tests.

use std::sync::OnceLock;

use chrono::{DateTime, Local, TimeZone, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool};
use mockable::Clock;
use todo_app::todo::adapters::postgres::PostgresTodoRepository;

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL_VAR: &str = "TODO_TEST_DATABASE_URL";

/// SQL that creates the `todo_items` table.
const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_todo_items/up.sql");

static SCHEMA_READY: OnceLock<()> = OnceLock::new();

/// Opens every pooled connection inside a test transaction.
#[derive(Debug, Clone, Copy)]
struct TestTransaction;

impl CustomizeConnection<PgConnection, r2d2::Error> for TestTransaction {
    fn on_acquire(&self, connection: &mut PgConnection) -> Result<(), r2d2::Error> {
        connection
            .begin_test_transaction()
            .map_err(r2d2::Error::QueryError)
    }
}

fn database_url() -> String {
    std::env::var(TEST_DATABASE_URL_VAR)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| panic!("{TEST_DATABASE_URL_VAR} must name a PostgreSQL database"))
}

/// Creates the schema once per test binary, outside any test transaction.
fn ensure_schema(url: &str) {
    SCHEMA_READY.get_or_init(|| {
        let mut connection = PgConnection::establish(url).expect("connect to test database");
        connection
            .batch_execute(CREATE_SCHEMA_SQL)
            .expect("create todo schema");
    });
}

/// Returns a repository whose changes are rolled back.
///
/// The pool holds a single connection so every call shares one transaction.
///
/// # Panics
///
/// Panics when no test database is configured or reachable.
#[must_use]
pub fn transactional_repository() -> PostgresTodoRepository {
    let url = database_url();
    ensure_schema(&url);

    let pool = Pool::builder()
        .max_size(1)
        .connection_customizer(Box::new(TestTransaction))
        .build(ConnectionManager::<PgConnection>::new(url))
        .expect("build test pool");
    PostgresTodoRepository::new(pool)
}

/// Returns 09:00 UTC on the given day of January 2026.
#[must_use]
pub fn january(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, 9, 0, 0)
        .single()
        .expect("valid January date")
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
