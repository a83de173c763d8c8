use chrono::NaiveDateTime;

/// `start + index * interval` weeks.
pub(super) fn nth_start(start: NaiveDateTime, interval: i64, index: u32) -> Option<NaiveDateTime> {
    super::daily::nth_start(start, interval.checked_mul(7)?, index)
}
