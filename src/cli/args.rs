use crate::constants::{exit_codes, verbosity, DEFAULT_DATA_DIR, OUTPUT_LOG_TARGET};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for rendertemplates.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the config file. Fetched from GitHub when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the data directory.
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data: PathBuf,

    /// Path to a single data file. Takes precedence over `--data`.
    #[arg(long = "data-file")]
    pub data_file: Option<PathBuf>,

    /// Path to the templates directory. Templates are fetched from GitHub when omitted.
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Log every rendered FromTo.
    #[arg(long = "show-output-dir")]
    pub show_output_dir: bool,

    /// GitHub access token.
    #[arg(long = "gh-token")]
    pub gh_token: Option<String>,

    /// Append lists instead of overwriting them when merging values.
    #[arg(long = "append-slice")]
    pub append_slice: bool,

    /// Render everything without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Logger for this run. `--show-output-dir` lines are shown at any verbosity.
    pub fn log_builder(&self) -> env_logger::Builder {
        let level = get_log_level_from_verbose(self.verbose);
        let mut builder = env_logger::Builder::new();
        builder.filter_level(level);
        if self.show_output_dir {
            builder.filter_module(OUTPUT_LOG_TARGET, level.max(LevelFilter::Info));
        }
        builder
    }
}

/// Parse command line arguments, printing the help on unknown or missing input.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
