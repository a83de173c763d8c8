use chrono::NaiveDateTime;

use super::utils::add_months_clamped;

/// `start + index * interval` calendar months, keeping the day of month and
/// clamping it to the last day of shorter months.
pub(super) fn nth_start(start: NaiveDateTime, interval: i64, index: u32) -> Option<NaiveDateTime> {
    add_months_clamped(start, interval.checked_mul(index as i64)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn jan_31() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    #[test_case(1, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(); "february clamps")]
    #[test_case(2, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(); "march restores day")]
    #[test_case(3, NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(); "april clamps")]
    #[test_case(13, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(); "next february")]
    fn test_nth_start_from_month_end(index: u32, expected: NaiveDate) {
        assert_eq!(nth_start(jan_31(), 1, index).unwrap().date(), expected);
    }

    #[test]
    fn test_nth_start_keeps_time() {
        assert_eq!(nth_start(jan_31(), 1, 1).unwrap().time(), jan_31().time());
    }
}
