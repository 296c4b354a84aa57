mod args;
mod error;
mod paths;
mod roster;
mod settings;

use std::fs;
use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use hostelgrid::text::{TextStyle, render_text};
use hostelgrid::{Table, TableEvent};
use hostelgrid_lib::query::{QueryState, distinct_values};
use log::{debug, info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::args::Args;
use crate::error::CliError;
use crate::settings::Settings;

fn init_logging(verbose: bool) -> Result<(), CliError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| CliError::io(dir, e))?;
    }
    let file = File::create(&path).map_err(|e| CliError::io(&path, e))?;
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

fn log_event<T>(event: Option<TableEvent<T>>) {
    match event {
        Some(TableEvent::SelectionChanged(rows)) => info!("selection: {} rows", rows.len()),
        Some(TableEvent::SortChanged { column, direction }) => {
            info!("sort: {} {}", column, direction.as_str())
        }
        None => {}
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let settings = Settings::load(args.config.as_deref())?;
    let students = roster::load(args.roster.as_deref())?;
    info!("loaded {} students", students.len());

    if let Some(field) = &args.options {
        for value in distinct_values(&students, field) {
            println!("{}", value);
        }
        return Ok(());
    }

    let mut table = Table::new(roster::columns()).with_config(settings.table.clone());
    let row_query = settings.students.row_query(&table.sortable_keys());

    let mut state = QueryState::new().with_search(args.search.clone().unwrap_or_default());
    for raw in &args.filters {
        let filter = args::parse_filter(raw)?;
        state.set_filter(filter.field, filter.value);
    }

    if let Some(column) = &args.sort {
        let clicks = if args.desc { 2 } else { 1 };
        for _ in 0..clicks {
            match table.click_header(column) {
                Some(event) => {
                    state.sort = event.sort_directive();
                    log_event(Some(event));
                }
                None => {
                    warn!("column '{}' is not sortable", column);
                    eprintln!("warning: column '{}' is not sortable", column);
                    break;
                }
            }
        }
    }

    let visible = row_query.run(&students, &state);
    debug!("{} of {} students visible", visible.len(), students.len());
    log_event(table.set_rows(visible));

    if args.select_all {
        log_event(table.toggle_select_all(true));
    }
    for &position in &args.select {
        let row = position
            .checked_sub(1)
            .and_then(|index| table.rows().get(index))
            .cloned()
            .ok_or_else(|| CliError::NoSuchRow {
                position,
                visible: table.rows().len(),
            })?;
        log_event(table.toggle_row(&row));
    }

    table.set_loading(args.loading);

    print!("{}", render_text(&table.render(), &TextStyle::default()));
    println!("{}", roster::showing_label(table.rows().len(), students.len()));
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("warning: logging disabled: {}", e);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
