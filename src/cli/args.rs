//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use super::prompts::{choose_project, print_no_projects_help};
use crate::dispatch::DEFAULT_UPLOAD_DELAY;
use crate::service::JsonProjectStore;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Store file used when none is given
pub const DEFAULT_STORE_FILE: &str = "deliverables.json";

/// Configuration from CLI arguments
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub store_path: PathBuf,
    pub project_id: String,
    pub project_name: String,
    pub can_edit: bool,
    pub upload_delay: Duration,
    pub log_dir: Option<PathBuf>,
}

/// Arguments as given, before the project is resolved against the store
#[derive(Debug, Clone, PartialEq)]
pub struct RawArgs {
    pub store_path: PathBuf,
    pub project_id: Option<String>,
    pub read_only: bool,
    pub upload_delay: Duration,
    pub log_dir: Option<PathBuf>,
}

/// What the command line asked for
#[derive(Debug, PartialEq)]
pub enum ParsedArgs {
    Run(RawArgs),
    Help,
    Version,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Deliverables TUI - Track and update project deliverables");
    eprintln!();
    eprintln!("Usage: deliverables-tui [store-file] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [store-file]           Project store JSON file (default: {})", DEFAULT_STORE_FILE);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --project <ID>     Project to open (prompts if omitted)");
    eprintln!("  --read-only            View deliverables without editing");
    eprintln!("  --upload-delay-ms <N>  Simulated upload time (default: 1000)");
    eprintln!("  --log-dir <DIR>        Directory for log files");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  deliverables-tui                          # Pick a project from ./deliverables.json");
    eprintln!("  deliverables-tui store.json -p website    # Open a specific project");
    eprintln!("  deliverables-tui --read-only              # Browse without edit actions");
}

fn missing_value(flag: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("Missing value for {}", flag),
    )
}

/// Parse an argument list (without the program name)
pub fn parse_arg_list(args: &[String]) -> io::Result<ParsedArgs> {
    let mut store_path: Option<PathBuf> = None;
    let mut project_id: Option<String> = None;
    let mut read_only = false;
    let mut upload_delay = DEFAULT_UPLOAD_DELAY;
    let mut log_dir: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            return Ok(ParsedArgs::Help);
        } else if arg == "-V" || arg == "--version" {
            return Ok(ParsedArgs::Version);
        } else if arg == "--read-only" {
            read_only = true;
            i += 1;
        } else if arg == "-p" || arg == "--project" {
            i += 1;
            let value = args.get(i).ok_or_else(|| missing_value("--project"))?;
            project_id = Some(value.clone());
            i += 1;
        } else if arg == "--upload-delay-ms" {
            i += 1;
            let value = args.get(i).ok_or_else(|| missing_value("--upload-delay-ms"))?;
            let millis: u64 = value.parse().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid upload-delay-ms value: {}", value),
                )
            })?;
            upload_delay = Duration::from_millis(millis);
            i += 1;
        } else if arg == "--log-dir" {
            i += 1;
            let value = args.get(i).ok_or_else(|| missing_value("--log-dir"))?;
            log_dir = Some(PathBuf::from(value));
            i += 1;
        } else if !arg.starts_with('-') && store_path.is_none() {
            store_path = Some(PathBuf::from(arg));
            i += 1;
        } else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(ParsedArgs::Run(RawArgs {
        store_path: store_path.unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE)),
        project_id,
        read_only,
        upload_delay,
        log_dir,
    }))
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let raw = match parse_arg_list(&args) {
        Ok(ParsedArgs::Run(raw)) => raw,
        Ok(ParsedArgs::Help) => {
            print_usage();
            std::process::exit(0);
        }
        Ok(ParsedArgs::Version) => {
            println!("deliverables-tui {}", VERSION);
            std::process::exit(0);
        }
        Err(e) => {
            print_usage();
            return Err(e);
        }
    };

    let projects = JsonProjectStore::load_projects(&raw.store_path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", raw.store_path.display(), e),
        )
    })?;

    if projects.is_empty() {
        print_no_projects_help(&raw.store_path);
        return Err(io::Error::new(io::ErrorKind::NotFound, "No projects found"));
    }

    let project = match raw.project_id {
        Some(ref id) => projects
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("Unknown project: {}", id))
            })?,
        None => choose_project(&projects)?,
    };

    Ok(CliConfig {
        store_path: raw.store_path,
        project_id: project.id,
        project_name: project.name,
        can_edit: !raw.read_only,
        upload_delay: raw.upload_delay,
        log_dir: raw.log_dir,
    })
}
