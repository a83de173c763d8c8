// Project Calendar agenda
// Prints a month grid's worth of occurrences to the terminal

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;

use project_calendar::models::occurrence::Occurrence;
use project_calendar::models::settings::CalendarSettings;
use project_calendar::services::repository::{JsonEventRepository, TaskDueDateSource};
use project_calendar::services::segment::{segment_style, DayCell, SegmentFill};
use project_calendar::services::settings as settings_store;
use project_calendar::services::task_sync::sync_task_events;
use project_calendar::utils::date::month_window;
use project_calendar::VisibilityToggles;

#[derive(Parser)]
#[command(name = "calendar-agenda")]
#[command(about = "Print the calendar occurrences for a month")]
struct Cli {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    month: Option<String>,

    /// Calendar data file (JSON snapshot)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hide personal events
    #[arg(long)]
    hide_personal: bool,

    /// Hide a project's events; may be repeated
    #[arg(long = "hide-project", value_name = "ID")]
    hide_project: Vec<String>,

    /// Mirror task due dates into the data file before printing
    #[arg(long)]
    sync_tasks: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(ref path) => path.clone(),
        None => settings_store::default_config_path()?,
    };
    let settings = settings_store::load(&config_path)?;

    let data_path = match cli.data {
        Some(ref path) => path.clone(),
        None => settings_store::resolve_data_path(&settings)?,
    };
    let mut repo = JsonEventRepository::open(&data_path)?;

    if cli.sync_tasks {
        let tasks = repo.list_task_due_dates()?;
        let summary = sync_task_events(&mut repo, &tasks)?;
        println!(
            "Synced tasks: {} created, {} updated, {} removed",
            summary.created, summary.updated, summary.removed
        );
    }

    let toggles = build_toggles(&repo, &settings, &cli)?;
    let (year, month) = parse_month(cli.month.as_deref())?;
    let window = month_window(year, month, settings.first_day_of_week)
        .ok_or_else(|| anyhow!("Invalid month {}-{:02}", year, month))?;

    log::info!("Showing {} to {}", window.start, window.end);
    let by_day = repo.store().occurrences_by_day(&toggles, &window);

    for day in window.days() {
        let occurrences = by_day.get(&day).map(Vec::as_slice).unwrap_or(&[]);
        print_day(day, month, occurrences, settings.max_inline_events);
    }

    Ok(())
}

fn build_toggles(
    repo: &JsonEventRepository,
    settings: &CalendarSettings,
    cli: &Cli,
) -> Result<VisibilityToggles> {
    let mut toggles = VisibilityToggles::from_directory(repo)?;
    toggles.set_personal(settings.show_personal && !cli.hide_personal);

    for project_id in settings.hidden_projects.iter().chain(cli.hide_project.iter()) {
        toggles.set_project(project_id.clone(), false);
    }

    Ok(toggles)
}

/// `YYYY-MM`, or today's month when absent.
fn parse_month(month: Option<&str>) -> Result<(i32, u32)> {
    let Some(month) = month else {
        let today = Local::now().date_naive();
        return Ok((today.year(), today.month()));
    };

    let first = NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
        .with_context(|| format!("Expected --month as YYYY-MM, got '{}'", month))?;
    Ok((first.year(), first.month()))
}

fn print_day(day: NaiveDate, month: u32, occurrences: &[Occurrence<'_>], max_inline: usize) {
    let marker = if day.month() == month { ' ' } else { '.' };
    println!("{}{} {}", marker, day.format("%a %Y-%m-%d"), "-".repeat(24));

    let cell = DayCell::layout(occurrences, max_inline);
    for occurrence in &cell.inline {
        println!("    {}", describe(occurrence, day));
    }
    if let Some(label) = cell.overflow_label() {
        println!("    {}", label);
    }
}

/// One agenda line: `[` / `]` mark where a bar really starts or ends,
/// `<` / `>` where it runs on from or into a neighbouring day.
fn describe(occurrence: &Occurrence<'_>, day: NaiveDate) -> String {
    let Some(style) = segment_style(occurrence, day) else {
        return occurrence.event.title.clone();
    };

    let (open, close) = match style.fill {
        SegmentFill::SolidBar => ('[', ']'),
        SegmentFill::BorderedChip => ('(', ')'),
    };
    let open = if style.corners.round_start { open } else { '<' };
    let close = if style.corners.round_end { close } else { '>' };

    let time = if occurrence.is_all_day() {
        "all day".to_string()
    } else {
        occurrence.start.format("%H:%M").to_string()
    };

    format!(
        "{}{}{} {} ({})",
        open,
        occurrence.event.title,
        close,
        time,
        occurrence.event.color.name()
    )
}
