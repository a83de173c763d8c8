//! Calendar event service entry point.
//! Provides the in-memory event store and recurrence expansion helpers
//! organized across focused submodules.

use thiserror::Error;

use crate::models::event::{Event, ValidationError};

pub mod crud;
pub mod queries;
pub mod recurrence;

/// Failures surfaced by event stores and repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Event with id {0} not found")]
    NotFound(i64),
    #[error("Event with id {0} already exists")]
    DuplicateId(i64),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Canonical in-memory collection of events.
///
/// Performs no I/O; persistent repositories wrap or replace it.
#[derive(Debug, Clone)]
pub struct EventStore {
    pub(crate) events: Vec<Event>,
    pub(crate) next_id: i64,
    /// Stored records that failed validation; never queried, kept for write-back.
    pub(crate) rejected: Vec<Event>,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
            rejected: Vec::new(),
        }
    }

    /// Build a store from previously persisted events.
    ///
    /// Stored timestamps are kept as they are. Events without an id receive
    /// one after every stored id is known. Invalid records and duplicate ids
    /// are set aside in [`EventStore::rejected`]: hidden from queries but
    /// still handed back to whoever saves the store.
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut store = Self::new();
        let (with_id, without_id): (Vec<Event>, Vec<Event>) =
            events.into_iter().partition(|event| event.id.is_some());

        for event in with_id.into_iter().chain(without_id) {
            if let Err((event, e)) = store.insert_stored(event) {
                log::warn!("Hiding stored event {:?} '{}': {}", event.id, event.title, e);
                if let Some(id) = event.id {
                    store.next_id = store.next_id.max(id.saturating_add(1));
                }
                store.rejected.push(event);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Borrow the stored events, e.g. to run queries without cloning.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Records set aside by [`EventStore::from_events`].
    pub fn rejected(&self) -> &[Event] {
        &self.rejected
    }
}
