//! One-way mirroring of task due dates onto the calendar.
//!
//! Each task deadline becomes a non-recurring, all-day, single-day event
//! carrying the task id. Events the user created by hand are never touched.

use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::models::event::{Event, EventColor, EventPatch, EventType};
use crate::models::project::TaskDueDate;
use crate::services::event::StoreError;
use crate::services::repository::{EventRepository, TaskDueDateSource};
use crate::utils::date::start_of_day;

pub const TASK_TAG: &str = "task";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSyncSummary {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

impl TaskSyncSummary {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Build the calendar event for a task deadline.
pub fn event_for_task(task: &TaskDueDate) -> Result<Event, StoreError> {
    let mut builder = Event::builder()
        .title(task.title.clone())
        .all_day_span(task.due_date, task.due_date)
        .color(EventColor::Orange)
        .tag(TASK_TAG)
        .task(task.task_id.clone());

    if let Some(ref project_id) = task.project_id {
        builder = builder.project(project_id.clone());
    }

    Ok(builder.build()?)
}

/// Patch bringing `event` in line with `task`, or `None` if already current.
fn patch_for_task(event: &Event, task: &TaskDueDate) -> Option<EventPatch> {
    let due = start_of_day(task.due_date);
    let event_type = if task.project_id.is_some() {
        EventType::Project
    } else {
        EventType::Personal
    };

    let current = event.title == task.title
        && event.start_date == due
        && event.end_date == due
        && event.is_all_day
        && event.recurrence.is_none()
        && event.project_id == task.project_id
        && event.event_type == event_type;
    if current {
        return None;
    }

    Some(EventPatch {
        title: Some(task.title.clone()),
        start_date: Some(due),
        end_date: Some(due),
        is_all_day: Some(true),
        event_type: Some(event_type),
        project_id: Some(task.project_id.clone()),
        recurrence: Some(None),
        ..Default::default()
    })
}

/// Mirror every task due date from `source` into `repo`.
pub fn sync_task_events(
    repo: &mut dyn EventRepository,
    source: &dyn TaskDueDateSource,
) -> Result<TaskSyncSummary> {
    let tasks = source
        .list_task_due_dates()
        .context("Failed to list task due dates")?;
    let mut existing: HashMap<String, Vec<Event>> = HashMap::new();
    for event in repo.list()? {
        if let Some(task_id) = event.task_id.clone() {
            existing.entry(task_id).or_default().push(event);
        }
    }
    // Lowest id is the task's event; any others are duplicates
    for events in existing.values_mut() {
        events.sort_by_key(|event| event.id);
    }

    let mut summary = TaskSyncSummary::default();
    let mut stale: Vec<(String, Event)> = Vec::new();

    for task in &tasks {
        let mut events = existing.remove(&task.task_id).unwrap_or_default().into_iter();
        match events.next() {
            Some(event) => {
                if let Some(patch) = patch_for_task(&event, task) {
                    let id = event.id.context("Stored task event has no id")?;
                    repo.update(id, &patch)
                        .with_context(|| format!("Failed to update event for task {}", task.task_id))?;
                    summary.updated += 1;
                }
            }
            None => {
                let event = event_for_task(task)
                    .with_context(|| format!("Task {} cannot become an event", task.task_id))?;
                repo.create(event)
                    .with_context(|| format!("Failed to create event for task {}", task.task_id))?;
                summary.created += 1;
            }
        }
        stale.extend(events.map(|event| (task.task_id.clone(), event)));
    }

    for (task_id, events) in existing {
        stale.extend(events.into_iter().map(|event| (task_id.clone(), event)));
    }

    for (task_id, event) in stale {
        let Some(id) = event.id else { continue };
        match repo.delete(id) {
            Ok(()) => summary.removed += 1,
            Err(e) if e.is_not_found() => {}
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to remove event for task {}", task_id)))
            }
        }
    }

    log::info!(
        "Task sync: {} created, {} updated, {} removed",
        summary.created,
        summary.updated,
        summary.removed
    );
    Ok(summary)
}
