//! Day and window queries over expanded, visibility-filtered occurrences.
//!
//! Results are always ordered by occurrence start, then event id, then
//! series position, so repeated calls with the same inputs render the same.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::recurrence::expand;
use super::EventStore;
use crate::models::event::Event;
use crate::models::occurrence::Occurrence;
use crate::models::visibility::VisibilityToggles;
use crate::services::visibility::is_visible;
use crate::utils::date::DateWindow;

/// Every visible occurrence intersecting `window`, sorted for display.
pub fn occurrences_in_window<'a>(
    events: &'a [Event],
    toggles: &VisibilityToggles,
    window: &DateWindow,
) -> Vec<Occurrence<'a>> {
    let mut occurrences: Vec<Occurrence<'a>> = events
        .iter()
        .filter(|event| is_visible(event, toggles))
        .flat_map(|event| expand(event, window))
        .collect();

    occurrences.sort_by(|a, b| a.display_order(b));
    occurrences
}

/// Visible occurrences whose day span contains `day`.
///
/// `window` is the range the view is showing; `day` is expected to fall
/// inside it since nothing beyond the window is expanded.
pub fn occurrences_on_day<'a>(
    day: NaiveDate,
    events: &'a [Event],
    toggles: &VisibilityToggles,
    window: &DateWindow,
) -> Vec<Occurrence<'a>> {
    occurrences_in_window(events, toggles, window)
        .into_iter()
        .filter(|occurrence| occurrence.covers(day))
        .collect()
}

/// Bucket the window's occurrences under each day of the window they cover.
///
/// Days without occurrences have no entry.
pub fn occurrences_by_day<'a>(
    events: &'a [Event],
    toggles: &VisibilityToggles,
    window: &DateWindow,
) -> BTreeMap<NaiveDate, Vec<Occurrence<'a>>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Occurrence<'a>>> = BTreeMap::new();

    for occurrence in occurrences_in_window(events, toggles, window) {
        for day in occurrence.days().filter(|day| window.contains(*day)) {
            buckets.entry(day).or_default().push(occurrence);
        }
    }

    buckets
}

impl EventStore {
    pub fn occurrences_on_day(
        &self,
        day: NaiveDate,
        toggles: &VisibilityToggles,
        window: &DateWindow,
    ) -> Vec<Occurrence<'_>> {
        occurrences_on_day(day, &self.events, toggles, window)
    }

    pub fn occurrences_by_day(
        &self,
        toggles: &VisibilityToggles,
        window: &DateWindow,
    ) -> BTreeMap<NaiveDate, Vec<Occurrence<'_>>> {
        occurrences_by_day(&self.events, toggles, window)
    }

    /// Search events by title, description, location, or tag.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![];
        }

        let matches = |field: Option<&str>| {
            field.is_some_and(|value| value.to_lowercase().contains(&query))
        };

        self.events
            .iter()
            .filter(|event| {
                matches(Some(event.title.as_str()))
                    || matches(event.description.as_deref())
                    || matches(event.location.as_deref())
                    || event.tags.iter().any(|tag| matches(Some(tag.as_str())))
            })
            .collect()
    }
}
