// Recurrence module
// Repeat rules attached to events, with RRULE (RFC 5545) text interop

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::event::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// RRULE `FREQ` value, `None` for non-repeating rules.
    pub fn rrule_code(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Daily => Some("DAILY"),
            Self::Weekly => Some("WEEKLY"),
            Self::Monthly => Some("MONTHLY"),
            Self::Yearly => Some("YEARLY"),
        }
    }
}

impl From<String> for Frequency {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Self::None,
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "yearly" => Self::Yearly,
            other => {
                log::warn!("Unknown recurrence frequency '{}', treating as none", other);
                Self::None
            }
        }
    }
}

impl From<Frequency> for String {
    fn from(value: Frequency) -> Self {
        value.as_str().to_string()
    }
}

fn default_interval() -> i64 {
    1
}

/// How an event repeats.
///
/// `until` is inclusive at day granularity. When both `until` and `count`
/// are set, whichever stops the series first wins; `count` is checked first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    #[serde(default = "default_interval")]
    pub interval: i64,
    #[serde(default)]
    pub until: Option<NaiveDate>,
    #[serde(default)]
    pub count: Option<u32>,
}

impl RecurrenceRule {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            until: None,
            count: None,
        }
    }

    pub fn with_interval(mut self, interval: i64) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_until(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Interval used for expansion; zero and negative values count as 1.
    pub fn effective_interval(&self) -> i64 {
        self.interval.max(1)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.count == Some(0) {
            return Err(ValidationError::NonPositiveCount);
        }
        Ok(())
    }

    /// Render as an RRULE value, e.g. `FREQ=WEEKLY;INTERVAL=2;COUNT=5`.
    ///
    /// Returns `None` for non-repeating rules.
    pub fn to_rrule(&self) -> Option<String> {
        let freq = self.frequency.rrule_code()?;
        let mut parts = vec![format!("FREQ={}", freq)];

        if self.effective_interval() != 1 {
            parts.push(format!("INTERVAL={}", self.effective_interval()));
        }
        if let Some(count) = self.count {
            parts.push(format!("COUNT={}", count));
        }
        if let Some(until) = self.until {
            parts.push(format!("UNTIL={}", until.format("%Y%m%d")));
        }

        Some(parts.join(";"))
    }

    /// Parse the subset of RRULE this calendar writes.
    ///
    /// Unknown keys are ignored and an unknown `FREQ` yields [`Frequency::None`].
    pub fn parse_rrule(rrule: &str) -> Self {
        let rrule = rrule.trim().trim_start_matches("RRULE:");
        let mut rule = Self::new(Frequency::None);

        for part in rrule.split(';') {
            let Some((key, value)) = part.split_once('=') else {
                continue;
            };
            let value = value.trim();

            match key.trim().to_ascii_uppercase().as_str() {
                "FREQ" => rule.frequency = Frequency::from(value.to_string()),
                "INTERVAL" => rule.interval = value.parse().unwrap_or(1),
                "COUNT" => rule.count = value.parse().ok(),
                "UNTIL" => rule.until = parse_until(value),
                _ => {}
            }
        }

        rule
    }
}

/// Accepts `YYYYMMDD` optionally followed by a `THHMMSS[Z]` time part.
fn parse_until(value: &str) -> Option<NaiveDate> {
    let date_str = value.get(..8)?;
    NaiveDate::parse_from_str(date_str, "%Y%m%d").ok()
}
