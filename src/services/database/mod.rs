// Database service module
// SQLite connection and schema for persisted calendar events

use anyhow::{Context, Result};
use rusqlite::Connection;

pub mod events;
mod schema;

pub use events::SqliteEventRepository;

/// Thin wrapper around the calendar's SQLite connection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Create a new database connection
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file (or ":memory:" for in-memory)
    ///
    /// # Examples
    /// ```
    /// use project_calendar::services::database::Database;
    /// let db = Database::new(":memory:").unwrap();
    /// ```
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .context(format!("Failed to open database at {}", path))?;

        conn.execute("PRAGMA foreign_keys = ON", [])
            .context("Failed to enable foreign keys")?;

        Ok(Self { conn })
    }

    /// Creates the events table if it does not exist yet.
    pub fn initialize_schema(&self) -> Result<()> {
        schema::initialize_schema(&self.conn)
    }

    /// Get a reference to the database connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Event repository over this connection.
    pub fn events(&self) -> SqliteEventRepository<'_> {
        SqliteEventRepository::new(&self.conn)
    }
}
