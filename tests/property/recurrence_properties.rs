// Property-based tests for recurrence expansion
// Check the series invariants with random start dates and rules

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

use project_calendar::models::event::Event;
use project_calendar::models::recurrence::{Frequency, RecurrenceRule};
use project_calendar::services::event::recurrence::expand;
use project_calendar::utils::date::DateWindow;

fn frequency() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Daily),
        Just(Frequency::Weekly),
        Just(Frequency::Monthly),
        Just(Frequency::Yearly),
    ]
}

fn recurring_event(start: NaiveDate, rule: RecurrenceRule) -> Event {
    let start = start.and_hms_opt(9, 30, 0).unwrap();
    Event::builder()
        .title("Series")
        .start(start)
        .end(start + Duration::minutes(45))
        .recurrence(rule)
        .build()
        .unwrap()
}

proptest! {
    /// Property: a count-limited series yields exactly `count` occurrences
    /// when the window covers all of them
    #[test]
    fn prop_count_limits_series(
        year in 2000..2030i32,
        month in 1..=12u32,
        day in 1..=28u32,
        freq in frequency(),
        interval in 1..4i64,
        count in 1..40u32,
    ) {
        let start = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let event = recurring_event(
            start,
            RecurrenceRule::new(freq).with_interval(interval).with_count(count),
        );

        let occurrences = expand(&event, &DateWindow::unbounded());

        prop_assert_eq!(occurrences.len(), count as usize);
        for (k, occurrence) in occurrences.iter().enumerate() {
            prop_assert_eq!(occurrence.sequence_index as usize, k);
            prop_assert_eq!(occurrence.end - occurrence.start, event.duration());
        }
    }

    /// Property: no occurrence starts after `until` or outside the window
    #[test]
    fn prop_until_and_window_bound_series(
        start_offset in 0..365i64,
        until_offset in 0..400i64,
        window_offset in 0..200i64,
        window_len in 0..120i64,
        freq in frequency(),
    ) {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let start = base + Duration::days(start_offset);
        let until = start + Duration::days(until_offset);
        let window_start = base + Duration::days(window_offset);
        let window = DateWindow::new(window_start, window_start + Duration::days(window_len));
        let event = recurring_event(start, RecurrenceRule::new(freq).with_until(until));

        for occurrence in expand(&event, &window) {
            prop_assert!(occurrence.start_day() <= until);
            prop_assert!(window.intersects(occurrence.start_day(), occurrence.end_day()));
        }
    }

    /// Property: occurrences come out strictly increasing
    #[test]
    fn prop_occurrences_strictly_increase(
        day in 1..=31u32,
        freq in frequency(),
        interval in 1..6i64,
    ) {
        let start = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        let event = recurring_event(
            start,
            RecurrenceRule::new(freq).with_interval(interval).with_count(24),
        );

        let occurrences = expand(&event, &DateWindow::unbounded());
        for pair in occurrences.windows(2) {
            prop_assert!(pair[0].start < pair[1].start);
        }
    }

    /// Property: monthly occurrences land on the original day or the
    /// month's last day when it is shorter
    #[test]
    fn prop_monthly_clamps_to_month_end(day in 1..=31u32, count in 1..30u32) {
        let start = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let event = recurring_event(start, RecurrenceRule::new(Frequency::Monthly).with_count(count));

        for occurrence in expand(&event, &DateWindow::unbounded()) {
            let date = occurrence.start_day();
            let last_of_month = date
                .with_day(1)
                .and_then(|first| first.checked_add_months(chrono::Months::new(1)))
                .and_then(|next| next.pred_opt())
                .unwrap();
            prop_assert_eq!(date.day(), day.min(last_of_month.day()));
        }
    }

    /// Property: frequency none, or no rule at all, yields the event once
    #[test]
    fn prop_non_recurring_yields_single_occurrence(
        start_offset in 0..365i64,
        count in proptest::option::of(1..10u32),
    ) {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(start_offset);
        let mut rule = RecurrenceRule::new(Frequency::None);
        rule.count = count;
        let event = recurring_event(start, rule);
        let window = DateWindow::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        );

        let occurrences = expand(&event, &window);
        prop_assert_eq!(occurrences.len(), 1);
        prop_assert_eq!(occurrences[0].start, event.start_date);
    }
}
