//! CLI argument definitions for the swath project tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "swath",
    version,
    about = "Inspect and edit swath survey project files",
    long_about = "Inspect and edit swath survey project files.\n\n\
                  Every editing command loads the project, applies one change\n\
                  and writes the file back atomically."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the swath groups of a project.
    Show(ShowArgs),

    /// Add an empty swath group. Creates the project file if it is missing.
    AddGroup(AddGroupArgs),

    /// Remove a swath group.
    RemoveGroup(RemoveGroupArgs),

    /// Rename a swath group in place.
    RenameGroup(RenameGroupArgs),

    /// Load a project and write it to a new file.
    SaveAs(SaveAsArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Project file to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the full model as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct AddGroupArgs {
    /// Project file to edit.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Name of the new group.
    #[arg(long)]
    pub name: String,

    /// Data folder (default: the group name).
    #[arg(long)]
    pub folder: Option<String>,

    /// Propagation velocity of the medium.
    #[arg(long, default_value_t = 0.0)]
    pub velocity: f64,

    /// Create the group hidden.
    #[arg(long)]
    pub hidden: bool,
}

#[derive(Parser)]
pub struct RemoveGroupArgs {
    /// Project file to edit.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Name of the group to remove.
    #[arg(long)]
    pub name: String,
}

#[derive(Parser)]
pub struct RenameGroupArgs {
    /// Project file to edit.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Current group name.
    #[arg(long)]
    pub from: String,

    /// New group name.
    #[arg(long)]
    pub to: String,
}

#[derive(Parser)]
pub struct SaveAsArgs {
    /// Project file to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Destination file.
    #[arg(value_name = "OUT")]
    pub output: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
