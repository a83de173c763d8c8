//! Boundaries between the calendar core and its collaborators.
//!
//! The core never does I/O itself: events come from an [`EventRepository`],
//! projects from a [`ProjectDirectory`] and task deadlines from a
//! [`TaskDueDateSource`].

use anyhow::Result;

use crate::models::event::{Event, EventPatch};
use crate::models::project::{ProjectSummary, TaskDueDate};
use crate::services::event::{EventStore, StoreError};

pub mod json;

pub use json::{load_snapshot, save_snapshot, CalendarSnapshot, JsonEventRepository};

/// CRUD access to stored events.
pub trait EventRepository {
    fn list(&self) -> Result<Vec<Event>, StoreError>;
    fn get(&self, id: i64) -> Result<Option<Event>, StoreError>;
    fn create(&mut self, event: Event) -> Result<Event, StoreError>;
    fn update(&mut self, id: i64, patch: &EventPatch) -> Result<Event, StoreError>;
    fn delete(&mut self, id: i64) -> Result<(), StoreError>;
}

/// Read-only list of the projects that can be toggled on the calendar.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectDirectory {
    fn list_projects(&self) -> Result<Vec<ProjectSummary>>;
}

/// Read-only list of task deadlines to mirror as events.
#[cfg_attr(test, mockall::automock)]
pub trait TaskDueDateSource {
    fn list_task_due_dates(&self) -> Result<Vec<TaskDueDate>>;
}

impl TaskDueDateSource for Vec<TaskDueDate> {
    fn list_task_due_dates(&self) -> Result<Vec<TaskDueDate>> {
        Ok(self.clone())
    }
}

impl EventRepository for EventStore {
    fn list(&self) -> Result<Vec<Event>, StoreError> {
        Ok(EventStore::list(self))
    }

    fn get(&self, id: i64) -> Result<Option<Event>, StoreError> {
        Ok(EventStore::get(self, id).cloned())
    }

    fn create(&mut self, event: Event) -> Result<Event, StoreError> {
        EventStore::create(self, event)
    }

    fn update(&mut self, id: i64, patch: &EventPatch) -> Result<Event, StoreError> {
        EventStore::update(self, id, patch)
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        EventStore::remove(self, id)
    }
}
