//! main.rs
//! Entry point for rex

use rex_explorer::config::Config;
use rex_explorer::core::{DisplayRecord, WorkerResponse, Workers, fit_to_width};
use rex_explorer::utils::cli::{CliAction, handle_args};
use rex_explorer::utils::resolve_initial_dir;

use std::process::ExitCode;

const TYPE_COLUMN: usize = 8;
const SIZE_COLUMN: usize = 9;
const NAME_COLUMN: usize = 26;

/// Listing context: which view asked for the rows.
const MAIN_VIEW: u32 = 0;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let target = match handle_args() {
        CliAction::Exit => return ExitCode::SUCCESS,
        CliAction::ListCurrent => resolve_initial_dir("."),
        CliAction::ListPath(arg) => resolve_initial_dir(&arg),
    };

    if !target.is_dir() {
        eprintln!("[rex] Error: Path '{}' cannot be opened.", target.display());
        return ExitCode::FAILURE;
    }

    let config = Config::load();
    let workers: Workers<u32> = Workers::spawn(config.inspector(), config.formatter());

    if !workers.request_listing(target.clone(), MAIN_VIEW, 1) {
        eprintln!("[rex] Error: listing worker is not running.");
        return ExitCode::FAILURE;
    }

    let response = match workers.response_rx().recv() {
        Ok(response) => response,
        Err(_) => {
            eprintln!("[rex] Error: listing worker stopped unexpectedly.");
            return ExitCode::FAILURE;
        }
    };

    match response {
        WorkerResponse::ListingLoaded { path, listing, .. } => {
            println!("{}", config.header_path(&path));
            for record in listing.records() {
                println!("{}", render_row(record));
            }
            for failure in listing.failures() {
                eprintln!("[rex] skipped: {}", failure);
            }
            ExitCode::SUCCESS
        }
        WorkerResponse::Error { path, error, .. } => {
            eprintln!("[rex] Error listing '{}': {}", path.display(), error);
            ExitCode::FAILURE
        }
    }
}

fn render_row<C>(record: &DisplayRecord<C>) -> String {
    let mut row = String::with_capacity(NAME_COLUMN + TYPE_COLUMN + SIZE_COLUMN + 10);
    row.push_str(&fit_to_width(record.display_name(), NAME_COLUMN));
    row.push_str(&fit_to_width(record.display_type(), TYPE_COLUMN));
    row.push_str(&fit_to_width(&record.display_size(), SIZE_COLUMN));
    row.push_str(record.display_date());
    row.trim_end().to_string()
}
