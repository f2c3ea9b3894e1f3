use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info, warn};

use outreach_pulse::config::{ImportFlags, load_seed, resolve_options};
use outreach_pulse::input::ImportOptions;
use outreach_pulse::report::csv_template;
use outreach_pulse::report::json::render_dashboard_json;
use outreach_pulse::report::text::render_dashboard_text;
use outreach_pulse::session::{Dashboard, StatusKind};
use outreach_pulse::{MetricsSnapshot, logging};

#[derive(Debug, Parser)]
#[command(
    name = "outreach-pulse",
    version,
    about = "Import outreach CSV snapshots and print dashboard metrics"
)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the dashboard for the seed snapshot
    Show(OutputArgs),
    /// Import one or more CSV files in order, then print the dashboard
    Import(ImportArgs),
    /// Print a CSV template with every recognized header
    Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON snapshot to start from instead of the built-in one
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ImportArgs {
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Fail the whole import when any numeric cell is not a count
    #[arg(long)]
    strict: bool,

    /// Split on raw commas without honoring quotes
    #[arg(long)]
    naive_split: bool,

    /// Reject imports where a part exceeds its total
    #[arg(long)]
    enforce_invariants: bool,

    /// JSON file with import options
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

impl ImportArgs {
    fn flags(&self) -> ImportFlags {
        ImportFlags {
            strict: self.strict,
            naive_split: self.naive_split,
            enforce_invariants: self.enforce_invariants,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Template => {
            print!("{}", csv_template());
            Ok(())
        }
        Command::Show(output) => {
            let dashboard = build_dashboard(output.seed.as_deref(), ImportOptions::default())?;
            emit(&dashboard, &output)
        }
        Command::Import(args) => {
            let options = resolve_options(args.config.as_deref(), args.flags())?;
            let mut dashboard = build_dashboard(args.output.seed.as_deref(), options)?;
            for path in &args.files {
                let status = dashboard.import_path(path);
                match status.kind {
                    StatusKind::Success => info!(file = %path.display(), "{}", status.message),
                    StatusKind::Error => warn!(file = %path.display(), "{}", status.message),
                }
            }
            emit(&dashboard, &args.output)
        }
    }
}

fn build_dashboard(
    seed: Option<&Path>,
    options: ImportOptions,
) -> Result<Dashboard, Box<dyn std::error::Error>> {
    let snapshot = match seed {
        Some(path) => load_seed(path)?,
        None => MetricsSnapshot::default(),
    };
    Ok(Dashboard::with_snapshot(snapshot, options))
}

fn emit(dashboard: &Dashboard, output: &OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = match output.format {
        OutputFormat::Text => render_dashboard_text(dashboard.snapshot(), dashboard.derived()),
        OutputFormat::Json => {
            render_dashboard_json(dashboard.snapshot(), dashboard.derived(), dashboard.status())?
        }
    };
    match &output.out {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
