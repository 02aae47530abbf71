// Events Calendar
// Main entry point

mod cli;

use std::process::ExitCode;

use clap::Parser;

use events_calendar::models::settings::Settings;
use events_calendar::models::view_state::ViewState;
use events_calendar::services::display::EventDetail;
use events_calendar::services::document::{load_calendar, Calendar};
use events_calendar::services::grid::{build_month_snapshot, build_year_overview};
use events_calendar::services::settings::SettingsService;
use events_calendar::ui_text::{DetailView, EventsTableView, FilterPanel, MonthView, YearView};

use cli::{Cli, Command};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Events Calendar");

    let args = Cli::parse();
    let settings = load_settings(&args);
    let data_file = args
        .data
        .clone()
        .unwrap_or_else(|| settings.data_file.clone());

    let calendar = match load_calendar(&data_file) {
        Ok(calendar) => calendar,
        Err(e) => {
            log::error!("Failed to initialize calendar: {e:?}");
            eprintln!("Ошибка загрузки данных: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut state = initial_view_state(&args, &calendar);
    let command = args.command.unwrap_or(match state.month {
        Some(month) => Command::Month { month: month + 1 },
        None => Command::Year,
    });

    print!("{}", render(command, &calendar, &settings, &mut state));
    log::info!("View state: ?{}", state.to_query());

    ExitCode::SUCCESS
}

fn load_settings(args: &Cli) -> Settings {
    match &args.config {
        Some(path) => SettingsService::new(path.clone()),
        None => SettingsService::from_default_location(),
    }
    .load_or_default()
}

/// `--state` seeds the view; `--categories` replaces its filter and
/// `--toggle` then flips individual ids.
fn initial_view_state(args: &Cli, calendar: &Calendar) -> ViewState {
    let mut state = args
        .state
        .as_deref()
        .map(|query| ViewState::from_query(query, calendar.categories.as_slice()))
        .unwrap_or_default();

    if !args.categories.is_empty() {
        for id in args.categories.iter().filter(|id| !calendar.categories.contains(id)) {
            log::warn!("Ignoring unknown category '{}'", id);
        }
        state.filters = args
            .categories
            .iter()
            .filter(|id| calendar.categories.contains(id))
            .cloned()
            .collect();
    }

    for id in &args.toggle {
        if !calendar.categories.contains(id) {
            log::warn!("Ignoring unknown category '{}'", id);
            continue;
        }
        let active = state.toggle_filter(id);
        log::debug!("Filter '{}' is now {}", id, if active { "on" } else { "off" });
    }
    state
}

fn render(command: Command, calendar: &Calendar, settings: &Settings, state: &mut ViewState) -> String {
    let service = calendar.event_service();
    let year = settings.year;

    match command {
        Command::Year => {
            state.show_year();
            let overview = build_year_overview(&calendar.events, &state.filters, year);
            YearView::render(&overview, &calendar.categories)
        }
        Command::Month { month } => {
            state.show_month(month - 1);
            render_month(calendar, settings, state)
        }
        Command::Next => step_month(1, calendar, settings, state),
        Command::Prev => step_month(-1, calendar, settings, state),
        Command::Categories => FilterPanel::render(&calendar.categories, &state.filters),
        Command::List => {
            let table = service.events_table(&state.filters);
            EventsTableView::render(&table, &calendar.categories)
        }
        Command::Show { id } => match service.find(&id) {
            Some(event) => DetailView::render(&EventDetail::build(event, &calendar.categories)),
            None => {
                log::info!("No event with id '{}'", id);
                String::new()
            }
        },
    }
}

/// Outside the month view there is nothing to step, so the year is shown.
fn step_month(delta: i32, calendar: &Calendar, settings: &Settings, state: &mut ViewState) -> String {
    state.navigate_month(delta);
    if state.month.is_some() {
        return render_month(calendar, settings, state);
    }
    log::info!("No month selected, showing the year");
    let overview = build_year_overview(&calendar.events, &state.filters, settings.year);
    YearView::render(&overview, &calendar.categories)
}

fn render_month(calendar: &Calendar, settings: &Settings, state: &ViewState) -> String {
    let year = settings.year;
    let month = state.month.unwrap_or(0) as i32;
    let cap = settings.visible_events_per_day;
    let snapshot = build_month_snapshot(&calendar.events, &state.filters, year, month, cap);
    let list = calendar
        .event_service()
        .month_event_list(&state.filters, year, month);
    MonthView::render(&snapshot, &list, &calendar.categories, cap)
}
