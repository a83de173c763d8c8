//! Expansion of recurring events into dated occurrences.
//!
//! Occurrence `k` of a series starts `k * interval` frequency units after the
//! event's own start and lasts as long as the event. Expansion never walks
//! past the requested window, so the work is bounded by what a view shows.

use crate::models::event::Event;
use crate::models::occurrence::Occurrence;
use crate::models::recurrence::{Frequency, RecurrenceRule};
use crate::utils::date::DateWindow;
use chrono::NaiveDateTime;

mod daily;
mod monthly;
mod utils;
mod weekly;
mod yearly;

/// Upper bound on series steps walked by one expansion.
pub const MAX_EXPANSION_STEPS: u32 = 100_000;

/// Expand `event` into the occurrences that intersect `window`.
///
/// Events without a rule, or with [`Frequency::None`], yield their own span
/// when it intersects the window.
pub fn expand<'a>(event: &'a Event, window: &DateWindow) -> Vec<Occurrence<'a>> {
    match event.recurrence {
        Some(ref rule) if rule.frequency != Frequency::None => expand_series(event, rule, window),
        _ => single_occurrence(event, window).into_iter().collect(),
    }
}

fn single_occurrence<'a>(event: &'a Event, window: &DateWindow) -> Option<Occurrence<'a>> {
    window
        .intersects(event.start_day(), event.end_day())
        .then_some(Occurrence {
            event,
            start: event.start_date,
            end: event.end_date,
            sequence_index: 0,
        })
}

fn expand_series<'a>(
    event: &'a Event,
    rule: &RecurrenceRule,
    window: &DateWindow,
) -> Vec<Occurrence<'a>> {
    let mut occurrences = Vec::new();
    let duration = event.duration();
    let interval = rule.effective_interval();
    let mut index = first_candidate_index(rule.frequency, event, interval, window);
    let mut steps = 0u32;

    loop {
        if let Some(count) = rule.count {
            if index >= count {
                break;
            }
        }

        let Some(start) = nth_start(rule.frequency, event.start_date, interval, index) else {
            break;
        };

        if let Some(until) = rule.until {
            if start.date() > until {
                break;
            }
        }

        if start.date() > window.end {
            break;
        }

        let Some(end) = start.checked_add_signed(duration) else {
            break;
        };

        if window.intersects(start.date(), end.date()) {
            occurrences.push(Occurrence {
                event,
                start,
                end,
                sequence_index: index,
            });
        }

        steps += 1;
        if steps >= MAX_EXPANSION_STEPS {
            log::warn!(
                "Stopped expanding event {:?} after {} steps; bound the window or the rule",
                event.id,
                steps
            );
            break;
        }

        let Some(next) = index.checked_add(1) else {
            break;
        };
        index = next;
    }

    log::debug!(
        "Expanded event {:?} into {} occurrence(s) for {}..={}",
        event.id,
        occurrences.len(),
        window.start,
        window.end
    );
    occurrences
}

/// Start of occurrence `index`, or `None` once date arithmetic overflows.
fn nth_start(
    frequency: Frequency,
    start: NaiveDateTime,
    interval: i64,
    index: u32,
) -> Option<NaiveDateTime> {
    match frequency {
        Frequency::None => (index == 0).then_some(start),
        Frequency::Daily => daily::nth_start(start, interval, index),
        Frequency::Weekly => weekly::nth_start(start, interval, index),
        Frequency::Monthly => monthly::nth_start(start, interval, index),
        Frequency::Yearly => yearly::nth_start(start, interval, index),
    }
}

/// Lowest series index whose occurrence could still reach the window.
///
/// Conservative: it may return an index a little early, never too late.
fn first_candidate_index(
    frequency: Frequency,
    event: &Event,
    interval: i64,
    window: &DateWindow,
) -> u32 {
    match frequency {
        Frequency::None => 0,
        Frequency::Daily => utils::skip_fixed_steps(event, interval, window),
        Frequency::Weekly => utils::skip_fixed_steps(event, interval.saturating_mul(7), window),
        Frequency::Monthly => utils::skip_month_steps(event, interval, window),
        Frequency::Yearly => utils::skip_month_steps(event, interval.saturating_mul(12), window),
    }
}
