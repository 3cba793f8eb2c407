//! specialize CLI entrypoint
//! Parses command-line arguments and runs the specialization use case.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use specialize::application::{SpecializeRequest, SpecializeUseCase};
use specialize::core::Error;
use specialize::generation::describe_macros;
use specialize::infrastructure::{FileSystemOutputService, TeraTemplateRenderer};

// External imports (alphabetized)
use anyhow::Context;
use clap::{Command, CommandFactory, FromArgMatches, Parser};
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

/// Exit status for invocation errors, matching clap's usage errors
const USAGE_EXIT_CODE: u8 = 2;

/// Generate type-specialized code from a template.
///
/// The template sees `Name` (the template's base name) and `X`, a list of
/// `{Name, Type, Y}` entries; each Y entry is `{Name, Type, Z}`.
#[derive(Parser, Debug)]
#[command(name = "specialize")]
#[command(author, version, about)]
struct Cli {
    /// Comma-separated list of X types
    #[arg(long, value_name = "TYPES")]
    x: Option<String>,

    /// Comma-separated list of Y types (optional)
    #[arg(long, value_name = "TYPES")]
    y: Option<String>,

    /// Comma-separated list of Z types (optional, requires --y)
    #[arg(long, value_name = "TYPES")]
    z: Option<String>,

    /// Template file
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Filename for generated code. If not provided, a file next to the input is generated
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for SpecializeRequest {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output: cli.output,
            x: cli.x,
            y: cli.y,
            z: cli.z,
        }
    }
}

/// Command definition with the macro registry appended to `--help`
fn command() -> Command {
    Cli::command().after_long_help(describe_macros())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let input = cli.input.clone().unwrap_or_default();
    let use_case = SpecializeUseCase::new(
        Arc::new(TeraTemplateRenderer::new()),
        Arc::new(FileSystemOutputService::new()),
    );

    let response = use_case
        .execute(cli.into())
        .with_context(|| format!("failed to specialize {}", input.display()))?;

    debug!(
        output = %response.output_path.display(),
        bytes = response.bytes_written,
        "Done"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::from_arg_matches(&command().get_matches()) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let is_config = err.downcast_ref::<Error>().is_some_and(Error::is_config);
            if is_config {
                eprintln!("{}", command().render_help());
                eprintln!("specialize: {}", err.root_cause());
                return ExitCode::from(USAGE_EXIT_CODE);
            }

            eprintln!("specialize: {err:#}");
            ExitCode::FAILURE
        }
    }
}
