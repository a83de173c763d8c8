use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_events_table(conn)?;
    create_event_indexes(conn)?;
    Ok(())
}

fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            location TEXT,
            start_datetime TEXT NOT NULL,
            end_datetime TEXT NOT NULL,
            is_all_day INTEGER NOT NULL DEFAULT 0,
            attendees TEXT NOT NULL DEFAULT '[]',
            tags TEXT NOT NULL DEFAULT '[]',
            color TEXT NOT NULL DEFAULT 'blue',
            event_type TEXT NOT NULL DEFAULT 'personal',
            project_id TEXT,
            task_id TEXT,
            recurrence_rule TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            CHECK (is_all_day = 1 OR end_datetime >= start_datetime),
            CHECK (date(end_datetime) >= date(start_datetime))
        )",
        [],
    )
    .context("Failed to create events table")?;
    Ok(())
}

fn create_event_indexes(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_events_start ON events(start_datetime)",
        [],
    )
    .context("Failed to create events start index")?;
    conn.execute(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_events_task ON events(task_id)
         WHERE task_id IS NOT NULL",
        [],
    )
    .context("Failed to create events task index")?;
    Ok(())
}
