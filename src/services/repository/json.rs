use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use super::{EventRepository, ProjectDirectory, TaskDueDateSource};
use crate::models::event::{Event, EventPatch};
use crate::models::project::{ProjectSummary, TaskDueDate};
use crate::services::event::{EventStore, StoreError};

/// On-disk layout of the dashboard's calendar data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSnapshot {
    pub events: Vec<Event>,
    pub projects: Vec<ProjectSummary>,
    pub tasks: Vec<TaskDueDate>,
}

pub fn load_snapshot(path: &Path) -> Result<CalendarSnapshot> {
    if !path.exists() {
        return Ok(CalendarSnapshot::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read calendar data from {}", path.display()))?;
    let snapshot = serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    Ok(snapshot)
}

pub fn save_snapshot(path: &Path, snapshot: &CalendarSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write calendar data to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize calendar data from {}",
        path.display()
    ))
}

/// Event repository persisted as a JSON snapshot file.
///
/// The whole file is loaded on open and rewritten after every mutation.
/// Projects and tasks stored alongside the events are served read-only.
pub struct JsonEventRepository {
    path: PathBuf,
    store: EventStore,
    projects: Vec<ProjectSummary>,
    tasks: Vec<TaskDueDate>,
}

impl JsonEventRepository {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = load_snapshot(&path)?;
        log::info!(
            "Loaded {} event(s), {} project(s), {} task(s) from {}",
            snapshot.events.len(),
            snapshot.projects.len(),
            snapshot.tasks.len(),
            path.display()
        );

        Ok(Self {
            path,
            store: EventStore::from_events(snapshot.events),
            projects: snapshot.projects,
            tasks: snapshot.tasks,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded events, for running queries.
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn save(&self) -> Result<()> {
        let mut events = self.store.list();
        events.extend_from_slice(self.store.rejected());
        let snapshot = CalendarSnapshot {
            events,
            projects: self.projects.clone(),
            tasks: self.tasks.clone(),
        };
        save_snapshot(&self.path, &snapshot)?;
        log::debug!("Saved {} event(s) to {}", snapshot.events.len(), self.path.display());
        Ok(())
    }

    /// Run a mutation and persist it; the in-memory state is rolled back
    /// if the write fails.
    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut EventStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let previous = self.store.clone();
        let value = op(&mut self.store)?;
        if let Err(e) = self.save() {
            self.store = previous;
            return Err(StoreError::Backend(e));
        }
        Ok(value)
    }
}

impl EventRepository for JsonEventRepository {
    fn list(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.store.list())
    }

    fn get(&self, id: i64) -> Result<Option<Event>, StoreError> {
        Ok(self.store.get(id).cloned())
    }

    fn create(&mut self, event: Event) -> Result<Event, StoreError> {
        self.mutate(|store| store.create(event))
    }

    fn update(&mut self, id: i64, patch: &EventPatch) -> Result<Event, StoreError> {
        self.mutate(|store| store.update(id, patch))
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        self.mutate(|store| store.remove(id))
    }
}

impl ProjectDirectory for JsonEventRepository {
    fn list_projects(&self) -> Result<Vec<ProjectSummary>> {
        Ok(self.projects.clone())
    }
}

impl TaskDueDateSource for JsonEventRepository {
    fn list_task_due_dates(&self) -> Result<Vec<TaskDueDate>> {
        Ok(self.tasks.clone())
    }
}
