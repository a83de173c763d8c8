use super::{EventStore, StoreError};
use crate::models::event::{Event, EventPatch};
use chrono::Local;

impl EventStore {
    /// Add an event, assigning a fresh id when it has none.
    pub fn create(&mut self, mut event: Event) -> Result<Event, StoreError> {
        event.validate()?;

        let id = match event.id {
            Some(id) if self.position(id).is_some() => return Err(StoreError::DuplicateId(id)),
            Some(id) => id,
            None => self.next_id,
        };
        self.next_id = self.next_id.max(id + 1);

        let now = Local::now().naive_local();
        event.id = Some(id);
        event.created_at.get_or_insert(now);
        event.updated_at = Some(now);

        log::debug!("Created event {} '{}'", id, event.title);
        self.events.push(event.clone());
        Ok(event)
    }

    /// Retrieve an event by ID.
    pub fn get(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|event| event.id == Some(id))
    }

    /// Apply a partial update. The whole series is edited for recurring events.
    pub fn update(&mut self, id: i64, patch: &EventPatch) -> Result<Event, StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;

        let mut patched = patch.apply_to(&self.events[index])?;
        patched.id = Some(id);
        patched.updated_at = Some(Local::now().naive_local());

        self.events[index] = patched.clone();
        log::debug!("Updated event {}", id);
        Ok(patched)
    }

    /// Delete an event by ID, taking all of its occurrences with it.
    ///
    /// Unknown ids report `NotFound`; callers may treat that as success.
    pub fn remove(&mut self, id: i64) -> Result<(), StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.events.remove(index);
        log::debug!("Removed event {}", id);
        Ok(())
    }

    /// Snapshot of every event. Order is not significant.
    pub fn list(&self) -> Vec<Event> {
        self.events.clone()
    }

    /// Find the event mirroring a task's due date.
    pub fn find_by_task(&self, task_id: &str) -> Option<&Event> {
        self.events
            .iter()
            .find(|event| event.task_id.as_deref() == Some(task_id))
    }

    /// Insert a persisted event as-is, assigning an id only when missing.
    ///
    /// On failure the event is handed back with the reason.
    pub(super) fn insert_stored(&mut self, mut event: Event) -> Result<(), (Event, StoreError)> {
        if let Err(e) = event.validate() {
            return Err((event, e.into()));
        }

        let id = match event.id {
            Some(id) if self.position(id).is_some() => {
                return Err((event, StoreError::DuplicateId(id)))
            }
            Some(id) => id,
            None => self.next_id,
        };
        self.next_id = self.next_id.max(id.saturating_add(1));
        event.id = Some(id);
        self.events.push(event);
        Ok(())
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.events.iter().position(|event| event.id == Some(id))
    }
}
