//! Materialized event instances.
//!
//! An [`Occurrence`] is one dated instance of an [`Event`], produced for a
//! bounded window and never stored. Display attributes come from the
//! borrowed source event.

use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

use crate::models::event::Event;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occurrence<'a> {
    pub event: &'a Event,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Position in the series, 0 for the event's own start.
    pub sequence_index: u32,
}

impl<'a> Occurrence<'a> {
    pub fn source_event_id(&self) -> Option<i64> {
        self.event.id
    }

    pub fn start_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_day(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn is_all_day(&self) -> bool {
        self.event.is_all_day
    }

    pub fn is_multi_day(&self) -> bool {
        self.start_day() != self.end_day()
    }

    /// Inclusive, date-granular containment.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_day() <= day && day <= self.end_day()
    }

    /// Every calendar day the occurrence touches, first to last.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + 'a {
        let last = self.end_day();
        self.start_day()
            .iter_days()
            .take_while(move |day| *day <= last)
    }

    /// Rendering order: start, then source id, then series position.
    ///
    /// Events without an id sort after stored ones.
    pub fn display_order(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| cmp_ids(self.event.id, other.event.id))
            .then_with(|| self.sequence_index.cmp(&other.sequence_index))
    }
}

fn cmp_ids(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
