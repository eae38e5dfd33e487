//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! The desk and the front ends call store methods. They never execute SQL directly.

use crate::error::LoanResult;
use rusqlite::{Connection, OpenFlags};

mod history;

pub struct HistoryStore {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for file
}

impl HistoryStore {
    /// Open (or create) the history database at `path`.
    pub fn open(path: &str) -> LoanResult<Self> {
        Self::open_with(path, true)
    }

    /// Open (or create) the history database, optionally switching it to WAL.
    pub fn open_with(path: &str, wal: bool) -> LoanResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI,
        )?;
        if wal {
            // Ignored by :memory: and shared-memory URIs.
            let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        }
        log::debug!("store: opened {path} (wal={wal})");
        Ok(Self {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> LoanResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn, path: None })
    }

    /// Path of the backing file, or `None` for an in-memory store.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Apply all schema migrations in order. Safe to run on every start.
    pub fn migrate(&self) -> LoanResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_history.sql"))?;
        Ok(())
    }

    /// Release the connection, surfacing any error SQLite reports on close.
    /// Dropping the store also closes it, but swallows that error.
    pub fn close(self) -> LoanResult<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| e)?;
        log::debug!("store: closed {}", path.as_deref().unwrap_or(":memory:"));
        Ok(())
    }
}
