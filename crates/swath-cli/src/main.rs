//! Swath project CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use swath_cli::commands::{add_group, remove_group, rename_group, save_as, show_project};
use swath_cli::logging::{LogConfig, LogFormat, init_logging};
use swath_model::SwathGroup;
use swath_persistence::ProjectError;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{AddGroupArgs, Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(()) => 0,
        Err(error) => {
            report_error(&error);
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Show(args) => {
            println!("{}", show_project(&args.file, args.json)?);
        }
        Command::AddGroup(args) => {
            let group = group_from_args(&args);
            add_group(&args.file, group)?;
            println!("Added swath group '{}'", args.name);
        }
        Command::RemoveGroup(args) => {
            remove_group(&args.file, &args.name)?;
            println!("Removed swath group '{}'", args.name);
        }
        Command::RenameGroup(args) => {
            rename_group(&args.file, &args.from, &args.to)?;
            println!("Renamed swath group '{}' to '{}'", args.from, args.to);
        }
        Command::SaveAs(args) => {
            let count = save_as(&args.file, &args.output)?;
            println!("Wrote {count} swath groups to {}", args.output.display());
        }
    }
    Ok(())
}

fn group_from_args(args: &AddGroupArgs) -> SwathGroup {
    let mut group = SwathGroup::new(args.name.as_str())
        .with_visible(!args.hidden)
        .with_propagation_velocity(args.velocity);
    if let Some(folder) = &args.folder {
        group = group.with_folder(folder.as_str());
    }
    group
}

/// Print the error chain, plus a hint when the cause is a project error.
fn report_error(error: &anyhow::Error) {
    eprintln!("error: {error:#}");
    if let Some(hint) = error
        .downcast_ref::<ProjectError>()
        .and_then(ProjectError::suggestion)
    {
        eprintln!("hint: {hint}");
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
