//! Command-line argument parsing and help for rex.
//!
//! When invoked with no args/flags (rex), the current directory is listed.

use crate::config::Config;

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    ListCurrent,
    ListPath(String),
    Exit,
}

/// Reads the process arguments and performs informational flags directly.
pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args(&args)
}

/// Maps the arguments (program name excluded) to an action.
pub fn parse_args(args: &[String]) -> CliAction {
    if args.is_empty() {
        return CliAction::ListCurrent;
    }

    if args.len() > 1 {
        eprintln!("Error: rex accepts only one argument at a time.");
        eprintln!("Usage: rex [PATH] or rex [OPTION]");
        return CliAction::Exit;
    }

    match args[0].as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        "--init" => {
            let config_path = Config::default_path();
            match Config::generate_default(&config_path) {
                Ok(()) => println!("Default config generated at {:?}", config_path),
                Err(e) => eprintln!("Error: {}", e),
            }
            CliAction::Exit
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::ListPath(arg.to_string())
        }
        arg => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("rex {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"rex - list a directory the way the rex file browser shows it

USAGE:
  rex [PATH]

PATH:
  Directory to list (defaults to current directory)

OPTIONS:
      --init              Generate a default configuration file
  -h, --help              Print help information
  -v, --version           Display the current installed version of rex

ENVIRONMENT:
  REX_CONFIG              Override the default config path
  RUST_LOG                Log filter (default: warn)
"#
    );
}
