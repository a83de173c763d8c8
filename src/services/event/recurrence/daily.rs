use chrono::{Duration, NaiveDateTime};

/// `start + index * interval` days.
pub(super) fn nth_start(start: NaiveDateTime, interval: i64, index: u32) -> Option<NaiveDateTime> {
    let days = interval.checked_mul(index as i64)?;
    start.checked_add_signed(Duration::try_days(days)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_nth_start_every_other_day() {
        let start = NaiveDate::from_ymd_opt(2025, 8, 30)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();
        let third = nth_start(start, 2, 2).unwrap();
        assert_eq!(third.date(), NaiveDate::from_ymd_opt(2025, 9, 3).unwrap());
        assert_eq!(third.time(), start.time());
    }

    #[test]
    fn test_nth_start_overflow_is_none() {
        assert!(nth_start(NaiveDateTime::MAX, 1, 1).is_none());
    }
}
