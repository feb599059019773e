//! CLI argument parsing and user prompts for the deliverables TUI.

mod args;
mod prompts;

pub use args::{parse_args, CliConfig};
