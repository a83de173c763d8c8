// Unit tests for the recurrence frequency types
// Cover the text forms used in stored data and RRULE strings

use project_calendar::models::recurrence::{Frequency, RecurrenceRule};
use test_case::test_case;

#[test_case("daily", Frequency::Daily; "lowercase")]
#[test_case("WEEKLY", Frequency::Weekly; "uppercase")]
#[test_case(" Monthly ", Frequency::Monthly; "padded")]
#[test_case("yearly", Frequency::Yearly; "yearly")]
#[test_case("", Frequency::None; "empty")]
#[test_case("quarterly", Frequency::None; "unknown")]
fn test_frequency_from_text(text: &str, expected: Frequency) {
    assert_eq!(Frequency::from(text.to_string()), expected);
}

#[test_case(Frequency::Daily, "daily")]
#[test_case(Frequency::Weekly, "weekly")]
#[test_case(Frequency::Monthly, "monthly")]
#[test_case(Frequency::Yearly, "yearly")]
#[test_case(Frequency::None, "none")]
fn test_frequency_serializes_lowercase(frequency: Frequency, expected: &str) {
    let json = serde_json::to_string(&frequency).unwrap();
    assert_eq!(json, format!("\"{}\"", expected));
}

#[test_case("FREQ=WEEKLY;INTERVAL=2", Frequency::Weekly, 2; "fortnightly")]
#[test_case("FREQ=MONTHLY;INTERVAL=3", Frequency::Monthly, 3; "quarterly")]
#[test_case("FREQ=DAILY;INTERVAL=x", Frequency::Daily, 1; "bad interval")]
fn test_parse_rrule_interval(rrule: &str, frequency: Frequency, interval: i64) {
    let rule = RecurrenceRule::parse_rrule(rrule);
    assert_eq!(rule.frequency, frequency);
    assert_eq!(rule.interval, interval);
}

#[test]
fn test_default_frequency_is_none() {
    assert_eq!(Frequency::default(), Frequency::None);
    assert_eq!(Frequency::None.rrule_code(), None);
}
