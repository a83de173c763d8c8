// Test fixtures - reusable test data
// Provides consistent events and collaborators across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use project_calendar::models::event::{Event, EventColor};
use project_calendar::models::project::{ProjectSummary, TaskDueDate};
use project_calendar::models::recurrence::{Frequency, RecurrenceRule};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn at(year: i32, month: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
        day(year, month, d).and_hms_opt(hour, minute, 0).unwrap()
    }

    /// Returns Jan 31, 2025 at 09:00
    pub fn jan_31_2025() -> NaiveDateTime {
        at(2025, 1, 31, 9, 0)
    }

    /// Returns Feb 29, 2024 at noon (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        at(2024, 2, 29, 12, 0)
    }
}

/// Sample events for testing
pub mod events {
    use super::dates::*;
    use super::*;

    /// Weekly 1:1, ten occurrences from Mon 4 Aug 2025
    pub fn weekly_one_on_one() -> Event {
        Event::builder()
            .title("1:1")
            .start(at(2025, 8, 4, 10, 0))
            .end(at(2025, 8, 4, 10, 30))
            .recurrence(RecurrenceRule::new(Frequency::Weekly).with_count(10))
            .build()
            .unwrap()
    }

    /// Three-day all-day offsite on project `alpha`
    pub fn alpha_offsite() -> Event {
        Event::builder()
            .title("Alpha offsite")
            .all_day_span(day(2025, 8, 14), day(2025, 8, 16))
            .color(EventColor::Purple)
            .project("alpha")
            .build()
            .unwrap()
    }

    /// Monthly report due on the 31st
    pub fn month_end_report() -> Event {
        Event::builder()
            .title("Month-end report")
            .start(jan_31_2025())
            .end(jan_31_2025() + chrono::Duration::hours(1))
            .recurrence(RecurrenceRule::new(Frequency::Monthly).with_count(4))
            .build()
            .unwrap()
    }

    pub fn dentist() -> Event {
        Event::new("Dentist", at(2025, 8, 15, 14, 0), at(2025, 8, 15, 15, 0)).unwrap()
    }
}

/// Projects and tasks supplied by the dashboard
pub mod dashboard {
    use super::dates::*;
    use super::*;

    pub fn projects() -> Vec<ProjectSummary> {
        vec![
            ProjectSummary::new("alpha", "Alpha", EventColor::Purple),
            ProjectSummary::new("beta", "Beta", EventColor::Green),
        ]
    }

    pub fn tasks() -> Vec<TaskDueDate> {
        vec![TaskDueDate {
            task_id: "task-7".to_string(),
            title: "Submit budget".to_string(),
            due_date: day(2025, 8, 20),
            project_id: Some("beta".to_string()),
        }]
    }
}
