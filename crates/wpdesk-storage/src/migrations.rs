//! Database migrations
//!
//! The schema version lives in SQLite's `user_version` pragma.

use crate::Result;
use rusqlite::Connection;

const SCHEMA_VERSION: i32 = 1;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    let version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    if version >= SCHEMA_VERSION {
        return Ok(());
    }

    tracing::info!(from = version, to = SCHEMA_VERSION, "Migrating settings schema");
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
    )?;
    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

    Ok(())
}
