// Event module
// Calendar event model shared by the personal and project calendars

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::recurrence::{Frequency, RecurrenceRule};

/// Reasons an event is rejected by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event start time is required")]
    MissingStart,
    #[error("Event end ({end}) is before its start ({start})")]
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("Project events require a project id")]
    MissingProjectId,
    #[error("Personal events cannot carry a project id")]
    UnexpectedProjectId,
    #[error("Recurrence count must be greater than zero")]
    NonPositiveCount,
}

/// Whether an event belongs to the owner's personal calendar or to a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Personal,
    Project,
    /// Anything else read back from storage. Never visible.
    Unknown(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Personal => "personal",
            Self::Project => "project",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "personal" => Self::Personal,
            "project" => Self::Project,
            _ => {
                log::warn!("Unknown event type '{}'", value);
                Self::Unknown(value)
            }
        }
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        value.as_str().to_string()
    }
}

/// The fixed palette events are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventColor {
    #[default]
    Blue,
    Green,
    Orange,
    Red,
    Purple,
    Teal,
    Pink,
    Gray,
}

impl EventColor {
    pub const ALL: [EventColor; 8] = [
        Self::Blue,
        Self::Green,
        Self::Orange,
        Self::Red,
        Self::Purple,
        Self::Teal,
        Self::Pink,
        Self::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Teal => "teal",
            Self::Pink => "pink",
            Self::Gray => "gray",
        }
    }

    /// Hex color code used when painting the event.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#3B82F6",
            Self::Green => "#10B981",
            Self::Orange => "#F59E0B",
            Self::Red => "#EF4444",
            Self::Purple => "#8B5CF6",
            Self::Teal => "#14B8A6",
            Self::Pink => "#EC4899",
            Self::Gray => "#6B7280",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }
}

impl From<String> for EventColor {
    fn from(value: String) -> Self {
        Self::from_name(&value).unwrap_or_else(|| {
            log::warn!("Unknown event color '{}', falling back to blue", value);
            Self::default()
        })
    }
}

impl From<EventColor> for String {
    fn from(value: EventColor) -> Self {
        value.name().to_string()
    }
}

/// Calendar event as stored by the event store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color: EventColor,
    pub event_type: EventType,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub recurrence: Option<RecurrenceRule>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Event {
    /// Create a personal, timed event.
    ///
    /// # Examples
    /// ```
    /// use project_calendar::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
    /// let end = start + chrono::Duration::minutes(90);
    /// let event = Event::new("Design review", start, end).unwrap();
    /// assert!(!event.is_multi_day());
    /// ```
    pub fn new(
        title: impl Into<String>,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        Self::builder()
            .title(title)
            .start(start_date)
            .end(end_date)
            .build()
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Check the event against the store's invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        // All-day events only care about the calendar date
        let ends_first = if self.is_all_day {
            self.end_day() < self.start_day()
        } else {
            self.end_date < self.start_date
        };
        if ends_first {
            return Err(ValidationError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }

        match self.event_type {
            EventType::Project if self.project_id.is_none() => {
                return Err(ValidationError::MissingProjectId)
            }
            EventType::Personal if self.project_id.is_some() => {
                return Err(ValidationError::UnexpectedProjectId)
            }
            _ => {}
        }

        if let Some(ref rule) = self.recurrence {
            rule.validate()?;
        }

        Ok(())
    }

    /// True when the event carries a rule that actually repeats.
    pub fn is_recurring(&self) -> bool {
        self.recurrence
            .as_ref()
            .is_some_and(|rule| rule.frequency != Frequency::None)
    }

    pub fn duration(&self) -> Duration {
        self.end_date - self.start_date
    }

    pub fn start_day(&self) -> NaiveDate {
        self.start_date.date()
    }

    pub fn end_day(&self) -> NaiveDate {
        self.end_date.date()
    }

    pub fn is_multi_day(&self) -> bool {
        self.start_day() != self.end_day()
    }

    /// Drop a rule with [`Frequency::None`]; it never repeats, so the event
    /// reads the same with or without it.
    fn without_inert_rule(mut self) -> Self {
        self.recurrence = self
            .recurrence
            .take()
            .filter(|rule| rule.frequency != Frequency::None);
        self
    }

    pub fn is_task_derived(&self) -> bool {
        self.task_id.is_some()
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    all_day: bool,
    attendees: Vec<String>,
    tags: Vec<String>,
    color: EventColor,
    project_id: Option<String>,
    task_id: Option<String>,
    recurrence: Option<RecurrenceRule>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Span whole days: start at midnight of `first`, end at midnight of `last`.
    pub fn all_day_span(mut self, first: NaiveDate, last: NaiveDate) -> Self {
        self.start = Some(first.and_time(chrono::NaiveTime::MIN));
        self.end = Some(last.and_time(chrono::NaiveTime::MIN));
        self.all_day = true;
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    pub fn attendee(mut self, attendee: impl Into<String>) -> Self {
        self.attendees.push(attendee.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    /// Attach the event to a project, which makes it a project event.
    pub fn project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn task(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    pub fn recurrence(mut self, rule: RecurrenceRule) -> Self {
        self.recurrence = Some(rule);
        self
    }

    /// Build the event.
    ///
    /// A missing end defaults to the start (a zero-length event).
    pub fn build(self) -> Result<Event, ValidationError> {
        let title = self.title.unwrap_or_default();
        let start = self.start.ok_or(ValidationError::MissingStart)?;
        let end = self.end.unwrap_or(start);
        let event_type = if self.project_id.is_some() {
            EventType::Project
        } else {
            EventType::Personal
        };

        let event = Event {
            id: None,
            title,
            description: self.description,
            start_date: start,
            end_date: end,
            is_all_day: self.all_day,
            location: self.location,
            attendees: self.attendees,
            tags: self.tags,
            color: self.color,
            event_type,
            project_id: self.project_id,
            task_id: self.task_id,
            recurrence: self.recurrence,
            created_at: None,
            updated_at: None,
        };

        event.validate()?;
        Ok(event.without_inert_rule())
    }
}

/// Partial update applied by the store's `update`.
///
/// Plain `Option` fields replace the value when `Some`. Fields that are
/// optional on [`Event`] use `Option<Option<_>>` so `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub is_all_day: Option<bool>,
    pub location: Option<Option<String>>,
    pub attendees: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub color: Option<EventColor>,
    pub event_type: Option<EventType>,
    pub project_id: Option<Option<String>>,
    pub task_id: Option<Option<String>>,
    pub recurrence: Option<Option<RecurrenceRule>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Return a patched copy of `event`, validated against the event invariants.
    pub fn apply_to(&self, event: &Event) -> Result<Event, ValidationError> {
        let mut patched = event.clone();

        if let Some(ref title) = self.title {
            patched.title = title.clone();
        }
        if let Some(ref description) = self.description {
            patched.description = description.clone();
        }
        if let Some(start) = self.start_date {
            patched.start_date = start;
        }
        if let Some(end) = self.end_date {
            patched.end_date = end;
        }
        if let Some(all_day) = self.is_all_day {
            patched.is_all_day = all_day;
        }
        if let Some(ref location) = self.location {
            patched.location = location.clone();
        }
        if let Some(ref attendees) = self.attendees {
            patched.attendees = attendees.clone();
        }
        if let Some(ref tags) = self.tags {
            patched.tags = tags.clone();
        }
        if let Some(color) = self.color {
            patched.color = color;
        }
        if let Some(ref event_type) = self.event_type {
            patched.event_type = event_type.clone();
        }
        if let Some(ref project_id) = self.project_id {
            patched.project_id = project_id.clone();
        }
        if let Some(ref task_id) = self.task_id {
            patched.task_id = task_id.clone();
        }
        if let Some(ref recurrence) = self.recurrence {
            patched.recurrence = recurrence.clone();
        }

        patched.validate()?;
        Ok(patched.without_inert_rule())
    }
}
