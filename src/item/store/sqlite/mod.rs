//! SQLite-backed ticket store.
//!
//! One `tickets` table, one statement per request (plus a read-back where the
//! created or updated row is returned). Order is ascending id.

pub mod migrations;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

use crate::item::core::crud::{ItemStore, Record};
use crate::item::core::error::ItemError;
use crate::item::core::id::ItemId;
use crate::item::entities::{CreateTicket, Priority, Ticket, UpdateTicket};

const SELECT_TICKET: &str = "SELECT id, name, problem, created_at, priority FROM tickets";

pub struct SqliteTicketStore {
    conn: Mutex<Connection>,
}

impl SqliteTicketStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).with_context(|| {
                format!("failed to create database directory {}", dir.display())
            })?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database at {}", path.display()))?;
        info!(path = %path.display(), "Opened ticket database");
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        Self::from_connection(conn)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        let journal_mode: String = conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
            .context("failed to set journal mode")?;
        conn.pragma_update(None, "synchronous", "NORMAL")
            .context("failed to configure database pragmas")?;
        conn.busy_timeout(std::time::Duration::from_secs(5))
            .context("failed to set busy timeout")?;
        let version = migrations::migrate_up(&mut conn)?;
        debug!(version, journal_mode = %journal_mode, "Ticket schema ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Schema version recorded in the database.
    pub fn schema_version(&self) -> Result<i64> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| anyhow::anyhow!("store lock poisoned: {e}"))?;
        migrations::current_version(&conn)
    }

    /// Undo schema migrations newer than `version`.
    pub fn rollback_to(&self, version: i64) -> Result<i64> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| anyhow::anyhow!("store lock poisoned: {e}"))?;
        migrations::migrate_down(&mut conn, version)
    }
}

fn row_to_ticket(row: &rusqlite::Row<'_>) -> rusqlite::Result<Ticket> {
    let id: i64 = row.get("id")?;
    let priority: Option<u8> = row.get("priority")?;
    Ok(Ticket {
        id: u64::try_from(id).unwrap_or_default(),
        name: row.get("name")?,
        problem: row.get("problem")?,
        priority: priority
            .and_then(|code| Priority::try_from(code).ok())
            .unwrap_or_default(),
        created_at: row.get("created_at")?,
    })
}

/// Row key for an id; ids that cannot exist in the table are reported as not found.
fn row_key(id: &ItemId) -> Result<i64, ItemError> {
    id.value()
        .and_then(|v| i64::try_from(v).ok())
        .ok_or_else(|| ItemError::not_found(id.to_string()))
}

#[async_trait]
impl ItemStore<Ticket> for SqliteTicketStore {
    async fn list(&self) -> Result<Vec<Ticket>, ItemError> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare(&format!("{SELECT_TICKET} ORDER BY id"))?;
        let tickets = stmt
            .query_map([], row_to_ticket)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tickets)
    }

    async fn create(&self, fields: CreateTicket) -> Result<Ticket, ItemError> {
        let conn = self.conn.lock()?;
        conn.execute(
            "INSERT INTO tickets (name, problem, priority, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                fields.name,
                fields.problem,
                fields.priority.unwrap_or_default().code(),
                Utc::now()
            ],
        )?;
        let id = conn.last_insert_rowid();
        let ticket = conn.query_row(
            &format!("{SELECT_TICKET} WHERE id = ?1"),
            params![id],
            row_to_ticket,
        )?;
        debug!(noun = Ticket::NOUN, id, "Created record");
        Ok(ticket)
    }

    async fn update(&self, id: &ItemId, fields: UpdateTicket) -> Result<Ticket, ItemError> {
        let key = row_key(id)?;
        let conn = self.conn.lock()?;
        let mut ticket = conn
            .query_row(
                &format!("{SELECT_TICKET} WHERE id = ?1"),
                params![key],
                row_to_ticket,
            )
            .optional()?
            .ok_or_else(|| ItemError::not_found(id.to_string()))?;
        ticket.apply_update(&fields);
        conn.execute(
            "UPDATE tickets SET name = ?1, problem = ?2, priority = ?3 WHERE id = ?4",
            params![ticket.name, ticket.problem, ticket.priority.code(), key],
        )?;
        debug!(noun = Ticket::NOUN, id = key, "Updated record");
        Ok(ticket)
    }

    async fn delete(&self, id: &ItemId) -> Result<(), ItemError> {
        let key = row_key(id)?;
        let conn = self.conn.lock()?;
        let removed = conn.execute("DELETE FROM tickets WHERE id = ?1", params![key])?;
        if removed == 0 {
            return Err(ItemError::not_found(id.to_string()));
        }
        debug!(noun = Ticket::NOUN, id = key, "Deleted record");
        Ok(())
    }
}
