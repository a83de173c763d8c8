use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::models::event::{Event, EventColor, EventPatch, EventType};
use crate::models::recurrence::RecurrenceRule;
use crate::services::event::StoreError;
use crate::services::repository::EventRepository;
use crate::utils::date::DateWindow;

const EVENT_COLUMNS: &str = "id, title, description, location, start_datetime, end_datetime,
    is_all_day, attendees, tags, color, event_type, project_id, task_id, recurrence_rule,
    created_at, updated_at";

/// Event repository stored in the `events` table.
pub struct SqliteEventRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteEventRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// List every event ordered by start date.
    pub fn list_all(&self) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM events ORDER BY start_datetime ASC, id ASC",
            EVENT_COLUMNS
        ))?;

        let events = stmt
            .query_map([], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(events)
    }

    /// Events that could produce occurrences in `window`: those whose own
    /// span intersects it plus every recurring event starting before its end.
    pub fn find_in_window(&self, window: &DateWindow) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM events
             WHERE (date(start_datetime) <= ?1 AND date(end_datetime) >= ?2)
                OR (recurrence_rule IS NOT NULL AND recurrence_rule != '' AND date(start_datetime) <= ?1)
             ORDER BY start_datetime ASC, id ASC",
            EVENT_COLUMNS
        ))?;

        let events = stmt
            .query_map(params![window.end, window.start], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(events)
    }

    fn fetch(&self, id: i64) -> Result<Option<Event>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM events WHERE id = ?1", EVENT_COLUMNS),
                [id],
                map_event_row,
            )
            .optional()
            .context("Failed to load event")
    }

    fn insert(&self, event: &Event) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO events (
                    id, title, description, location, start_datetime, end_datetime,
                    is_all_day, attendees, tags, color, event_type, project_id, task_id,
                    recurrence_rule, created_at, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
                params![
                    event.id,
                    event.title,
                    event.description,
                    event.location,
                    event.start_date,
                    event.end_date,
                    event.is_all_day as i32,
                    serialize_list(&event.attendees)?,
                    serialize_list(&event.tags)?,
                    event.color.name(),
                    event.event_type.as_str(),
                    event.project_id,
                    event.task_id,
                    event.recurrence.as_ref().and_then(RecurrenceRule::to_rrule),
                    event.created_at,
                    event.updated_at,
                ],
            )
            .context("Failed to insert event")?;

        Ok(self.conn.last_insert_rowid())
    }

    fn write(&self, event: &Event) -> Result<usize> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE events SET
                    title = ?1, description = ?2, location = ?3, start_datetime = ?4,
                    end_datetime = ?5, is_all_day = ?6, attendees = ?7, tags = ?8, color = ?9,
                    event_type = ?10, project_id = ?11, task_id = ?12, recurrence_rule = ?13,
                    updated_at = ?14
                 WHERE id = ?15",
                params![
                    event.title,
                    event.description,
                    event.location,
                    event.start_date,
                    event.end_date,
                    event.is_all_day as i32,
                    serialize_list(&event.attendees)?,
                    serialize_list(&event.tags)?,
                    event.color.name(),
                    event.event_type.as_str(),
                    event.project_id,
                    event.task_id,
                    event.recurrence.as_ref().and_then(RecurrenceRule::to_rrule),
                    event.updated_at,
                    event.id,
                ],
            )
            .context("Failed to update event")?;

        Ok(rows_affected)
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn list(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.list_all()?)
    }

    fn get(&self, id: i64) -> Result<Option<Event>, StoreError> {
        Ok(self.fetch(id)?)
    }

    fn create(&mut self, mut event: Event) -> Result<Event, StoreError> {
        event.validate()?;

        if let Some(id) = event.id {
            if self.fetch(id)?.is_some() {
                return Err(StoreError::DuplicateId(id));
            }
        }

        let now = Local::now().naive_local();
        event.created_at.get_or_insert(now);
        event.updated_at = Some(now);

        let id = self.insert(&event)?;
        event.id = Some(id);
        log::debug!("Inserted event {} '{}'", id, event.title);
        Ok(event)
    }

    fn update(&mut self, id: i64, patch: &EventPatch) -> Result<Event, StoreError> {
        let current = self.fetch(id)?.ok_or(StoreError::NotFound(id))?;

        let mut patched = patch.apply_to(&current)?;
        patched.id = Some(id);
        patched.updated_at = Some(Local::now().naive_local());

        if self.write(&patched)? == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(patched)
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM events WHERE id = ?1", [id])
            .context("Failed to delete event")?;

        if rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}

fn serialize_list(values: &[String]) -> Result<String> {
    serde_json::to_string(values).context("Failed to serialize list column")
}

fn deserialize_list(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<String>> {
    let json: String = row.get(idx)?;
    serde_json::from_str(&json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn map_event_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    let recurrence = row
        .get::<_, Option<String>>(13)?
        .filter(|rrule| !rrule.trim().is_empty())
        .map(|rrule| RecurrenceRule::parse_rrule(&rrule));

    Ok(Event {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        location: row.get(3)?,
        start_date: row.get::<_, NaiveDateTime>(4)?,
        end_date: row.get::<_, NaiveDateTime>(5)?,
        is_all_day: row.get::<_, i32>(6)? != 0,
        attendees: deserialize_list(row, 7)?,
        tags: deserialize_list(row, 8)?,
        color: EventColor::from(row.get::<_, String>(9)?),
        event_type: EventType::from(row.get::<_, String>(10)?),
        project_id: row.get(11)?,
        task_id: row.get(12)?,
        recurrence,
        created_at: row.get(14)?,
        updated_at: row.get(15)?,
    })
}
