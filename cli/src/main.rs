//! Farepath CLI — answers connection questions from a file or stdin
//!
//! The first non-empty input line is the connections table; every other
//! non-empty line is a question. Answers go to stdout, logs to stderr.

use anyhow::Context;
use clap::{ArgAction, Parser};
use farepath::{AnalyticsConfig, OutputFormat, Session, SessionConfig};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "farepath", version, about = "Route and fare analytics over an airport network")]
struct Cli {
    /// Question file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Count paths that loop back through the destination in stop-count questions
    #[arg(long, default_value_t = true, action = ArgAction::Set, env = "FAREPATH_CYCLIC_EXTENSIONS")]
    cyclic_extensions: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", env = "FAREPATH_FORMAT")]
    format: Format,

    /// Log filter, e.g. `warn` or `farepath=debug`
    #[arg(long, default_value = "warn", env = "FAREPATH_LOG")]
    log_level: String,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = SessionConfig::default()
        .with_analytics(AnalyticsConfig::default().with_cyclic_extensions(cli.cyclic_extensions))
        .with_format(cli.format.into());
    let session = Session::new(config);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let answered = match &cli.input {
        Some(path) => session
            .run_file(path, &mut writer)
            .with_context(|| format!("failed to answer questions from {}", path.display()))?,
        None => session
            .run(io::stdin().lock(), &mut writer)
            .context("failed to answer questions from stdin")?,
    };

    debug!("{} questions answered", answered);
    Ok(())
}
