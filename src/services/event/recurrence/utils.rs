use crate::models::event::Event;
use crate::utils::date::DateWindow;
use chrono::{Datelike, Months, NaiveDateTime};

/// Add whole months; chrono clamps the day to the target month's length.
pub(super) fn add_months_clamped(start: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let months = u32::try_from(months).ok()?;
    start.checked_add_months(Months::new(months))
}

/// Skip for series advancing by a fixed number of days per step.
pub(super) fn skip_fixed_steps(event: &Event, step_days: i64, window: &DateWindow) -> u32 {
    let lead_days = (window.start - event.start_day()).num_days() - event.duration().num_days() - 1;
    steps_before(lead_days, step_days)
}

/// Skip for series advancing by calendar months.
pub(super) fn skip_month_steps(event: &Event, step_months: i64, window: &DateWindow) -> u32 {
    let span_months = event.duration().num_days() / 28 + 1;
    let lead_months = month_ordinal(window.start.year(), window.start.month())
        - month_ordinal(event.start_date.year(), event.start_date.month())
        - span_months
        - 1;
    steps_before(lead_months, step_months)
}

fn month_ordinal(year: i32, month: u32) -> i64 {
    year as i64 * 12 + month as i64 - 1
}

fn steps_before(lead: i64, step: i64) -> u32 {
    if lead <= 0 || step <= 0 {
        return 0;
    }
    u32::try_from(lead / step).unwrap_or(u32::MAX)
}
