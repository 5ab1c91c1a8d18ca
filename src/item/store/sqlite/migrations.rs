//! Versioned schema migrations for the ticket table.
//!
//! The applied version is tracked in SQLite's `user_version` pragma. Each migration
//! runs in its own transaction together with the version bump.

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::info;

/// A single schema step with its inverse.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub up: &'static str,
    pub down: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "tickets",
        up: "CREATE TABLE tickets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                problem TEXT,
                created_at TEXT
            );",
        down: "DROP TABLE tickets;",
    },
    Migration {
        version: 2,
        name: "priority",
        up: "ALTER TABLE tickets ADD COLUMN priority INTEGER DEFAULT 0;",
        down: "ALTER TABLE tickets DROP COLUMN priority;",
    },
];

/// Version reached once every migration has run.
pub const SCHEMA_VERSION: i64 = 2;

pub fn current_version(conn: &Connection) -> Result<i64> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .context("failed to read schema version")
}

/// Apply every migration newer than the current version. Returns the new version.
pub fn migrate_up(conn: &mut Connection) -> Result<i64> {
    let start = current_version(conn)?;
    let mut version = start;
    for migration in MIGRATIONS.iter().filter(|m| m.version > start) {
        let tx = conn.transaction()?;
        tx.execute_batch(migration.up)
            .with_context(|| format!("migration {} ({}) failed", migration.version, migration.name))?;
        tx.pragma_update(None, "user_version", migration.version)?;
        tx.commit()?;
        info!(version = migration.version, name = migration.name, "Applied migration");
        version = migration.version;
    }
    Ok(version)
}

/// Undo migrations down to (and excluding) `target`. Returns the new version.
pub fn migrate_down(conn: &mut Connection, target: i64) -> Result<i64> {
    let start = current_version(conn)?;
    let mut version = start;
    for migration in MIGRATIONS
        .iter()
        .rev()
        .filter(|m| m.version <= start && m.version > target)
    {
        let tx = conn.transaction()?;
        tx.execute_batch(migration.down).with_context(|| {
            format!("rollback of {} ({}) failed", migration.version, migration.name)
        })?;
        let previous = migration.version.saturating_sub(1);
        tx.pragma_update(None, "user_version", previous)?;
        tx.commit()?;
        info!(version = migration.version, name = migration.name, "Rolled back migration");
        version = previous;
    }
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn.prepare("PRAGMA table_info(tickets)").unwrap();
        stmt.query_map([], |row| row.get::<_, String>("name"))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_schema_version_matches_last_migration() {
        assert_eq!(MIGRATIONS.last().map(|m| m.version), Some(SCHEMA_VERSION));
    }

    #[test]
    fn test_migrate_up_from_empty() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(current_version(&conn).unwrap(), 0);
        assert_eq!(migrate_up(&mut conn).unwrap(), SCHEMA_VERSION);
        assert_eq!(
            column_names(&conn),
            vec!["id", "name", "problem", "created_at", "priority"]
        );
    }

    #[test]
    fn test_migrate_up_is_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        migrate_up(&mut conn).unwrap();
        assert_eq!(migrate_up(&mut conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_priority_defaults_to_zero_for_old_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        let first = MIGRATIONS.first().unwrap();
        conn.execute_batch(first.up).unwrap();
        conn.pragma_update(None, "user_version", 1).unwrap();
        conn.execute("INSERT INTO tickets (name, problem) VALUES ('a', 'b')", [])
            .unwrap();

        migrate_up(&mut conn).unwrap();
        let priority: i64 = conn
            .query_row("SELECT priority FROM tickets", [], |row| row.get(0))
            .unwrap();
        assert_eq!(priority, 0);
    }

    #[test]
    fn test_migrate_down_one_step() {
        let mut conn = Connection::open_in_memory().unwrap();
        migrate_up(&mut conn).unwrap();
        assert_eq!(migrate_down(&mut conn, 1).unwrap(), 1);
        assert_eq!(column_names(&conn), vec!["id", "name", "problem", "created_at"]);
    }

    #[test]
    fn test_migrate_down_to_zero_drops_table() {
        let mut conn = Connection::open_in_memory().unwrap();
        migrate_up(&mut conn).unwrap();
        assert_eq!(migrate_down(&mut conn, 0).unwrap(), 0);
        assert!(column_names(&conn).is_empty());
    }

    #[test]
    fn test_down_then_up_restores_schema() {
        let mut conn = Connection::open_in_memory().unwrap();
        migrate_up(&mut conn).unwrap();
        assert_eq!(migrate_down(&mut conn, 0).unwrap(), 0);
        assert_eq!(current_version(&conn).unwrap(), 0);
        assert_eq!(migrate_up(&mut conn).unwrap(), SCHEMA_VERSION);
        assert_eq!(current_version(&conn).unwrap(), SCHEMA_VERSION);
        assert_eq!(
            column_names(&conn),
            vec!["id", "name", "problem", "created_at", "priority"]
        );
    }
}
