//! Loading and saving [`CalendarSettings`] as TOML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::CalendarSettings;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "KenBoyle";
const APPLICATION: &str = "ProjectCalendar";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .context("Failed to determine the platform directories")
}

/// `<config dir>/settings.toml`
pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("settings.toml"))
}

/// `<data dir>/calendar.json`
pub fn default_data_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().join("calendar.json"))
}

/// Read settings, falling back to defaults when the file does not exist.
pub fn load(path: &Path) -> Result<CalendarSettings> {
    if !path.exists() {
        log::info!("No settings at {}, using defaults", path.display());
        return Ok(CalendarSettings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    let settings: CalendarSettings = toml::from_str(&data)
        .with_context(|| format!("Failed to parse settings in {}", path.display()))?;
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

    Ok(settings)
}

pub fn save(path: &Path, settings: &CalendarSettings) -> Result<()> {
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create dir {}", parent.display()))?;
    }

    let data = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(path, data)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;
    Ok(())
}

/// Where the event snapshot lives: the configured file or the platform default.
pub fn resolve_data_path(settings: &CalendarSettings) -> Result<PathBuf> {
    match settings.data_file {
        Some(ref path) => Ok(path.clone()),
        None => default_data_path(),
    }
}
