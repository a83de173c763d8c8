//! Records supplied by the project side of the dashboard.
//!
//! The calendar only reads these: projects drive the visibility toggles and
//! task due dates become all-day events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::event::EventColor;

/// A project that can be shown or hidden on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: EventColor,
}

impl ProjectSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: EventColor) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
        }
    }
}

/// A task deadline mirrored onto the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDueDate {
    pub task_id: String,
    pub title: String,
    pub due_date: NaiveDate,
    /// Owning project; tasks without one land on the personal calendar.
    #[serde(default)]
    pub project_id: Option<String>,
}
