//! Decides which events a calendar view should consider.

use anyhow::{Context, Result};

use crate::models::event::{Event, EventType};
use crate::models::visibility::VisibilityToggles;
use crate::services::repository::ProjectDirectory;

/// Whether `event` passes the personal / per-project switches.
///
/// Project events with no project id and events of unknown type are hidden.
pub fn is_visible(event: &Event, toggles: &VisibilityToggles) -> bool {
    match event.event_type {
        EventType::Personal => toggles.personal,
        EventType::Project => event
            .project_id
            .as_deref()
            .is_some_and(|project_id| toggles.is_project_visible(project_id)),
        EventType::Unknown(_) => false,
    }
}

impl VisibilityToggles {
    /// Initial toggles for every project the directory knows about.
    pub fn from_directory(directory: &dyn ProjectDirectory) -> Result<Self> {
        let projects = directory
            .list_projects()
            .context("Failed to list projects for calendar filters")?;
        log::info!("Calendar filters initialised for {} project(s)", projects.len());
        Ok(Self::from_projects(&projects))
    }
}
