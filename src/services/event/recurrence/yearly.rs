use chrono::NaiveDateTime;

use super::utils::add_months_clamped;

/// `start + index * interval` years; Feb 29 falls back to Feb 28 in common years.
pub(super) fn nth_start(start: NaiveDateTime, interval: i64, index: u32) -> Option<NaiveDateTime> {
    let years = interval.checked_mul(index as i64)?;
    add_months_clamped(start, years.checked_mul(12)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_leap_day_every_four_years_stays_on_leap_day() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            nth_start(start, 4, 1).unwrap().date(),
            NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()
        );
        assert_eq!(
            nth_start(start, 1, 1).unwrap().date(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }
}
