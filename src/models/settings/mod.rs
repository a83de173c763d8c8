// Settings module
// User preferences for the calendar views, persisted as TOML

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    /// Occurrences drawn inline in a month cell before "+N more".
    pub max_inline_events: usize,
    /// Event snapshot file; the platform data dir is used when unset.
    pub data_file: Option<PathBuf>,
    pub show_personal: bool,
    pub hidden_projects: Vec<String>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            max_inline_events: 2,
            data_file: None,
            show_personal: true,
            hidden_projects: Vec::new(),
        }
    }
}

impl CalendarSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            ));
        }

        if self.max_inline_events == 0 {
            return Err("max_inline_events must be at least 1".to_string());
        }

        Ok(())
    }
}
