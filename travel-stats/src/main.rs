//! Command-line entry point.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use travel_stats::classify::{CachedClassifier, Classifier};
use travel_stats::config::{DEFAULT_OPERATORS_FILE, RunConfig};
use travel_stats::declarative::DeclarativeRules;
use travel_stats::export::load_all;
use travel_stats::report::{ReportContext, Step, run};

#[derive(Parser)]
#[command(name = "travel-stats")]
#[command(about = "Statistics from Träwelling check-in exports", long_about = None)]
struct Cli {
    /// Exports to read; overlapping periods are merged
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Show at most this many rows in ranked tables
    #[arg(long, value_name = "N")]
    top_limit: Option<usize>,

    /// JSON file with additional operator definitions
    #[arg(long, env = "TRAVEL_STATS_OPERATORS", default_value = DEFAULT_OPERATORS_FILE)]
    operators_file: PathBuf,

    /// Period covered and account totals
    #[arg(long)]
    metadata: bool,

    /// Every check-in with times and delays
    #[arg(long)]
    checkins: bool,

    /// Check-ins per event
    #[arg(long)]
    events: bool,

    /// Check-ins per transport mode
    #[arg(long)]
    modes: bool,

    /// Distance, duration and speed per mode
    #[arg(long)]
    mode_stats: bool,

    /// Check-ins per line
    #[arg(long)]
    lines: bool,

    /// Every distinct line with its operator
    #[arg(long)]
    all_lines: bool,

    /// Check-ins per operator
    #[arg(long)]
    operators: bool,

    /// How often each station was visited
    #[arg(long)]
    seen_stations: bool,
}

impl Cli {
    fn steps(&self) -> Vec<Step> {
        [
            (self.metadata, Step::Metadata),
            (self.checkins, Step::CheckIns),
            (self.events, Step::Events),
            (self.modes, Step::Modes),
            (self.mode_stats, Step::ModeStats),
            (self.lines, Step::Lines),
            (self.all_lines, Step::AllLines),
            (self.operators, Step::Operators),
            (self.seen_stations, Step::SeenStations),
        ]
        .into_iter()
        .filter_map(|(enabled, step)| enabled.then_some(step))
        .collect()
    }

    fn config(&self) -> RunConfig {
        RunConfig {
            operators_file: self.operators_file.clone(),
            ..RunConfig::default()
        }
        .with_top_limit(self.top_limit)
        .with_steps(self.steps())
    }
}

fn main() -> Result<()> {
    // Reports go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let files: Vec<PathBuf> = cli
        .files
        .into_iter()
        .filter(|path| {
            let exists = path.exists();
            if !exists {
                warn!(path = %path.display(), "Input file does not exist, skipping");
            }
            exists
        })
        .collect();
    if files.is_empty() {
        bail!("no input files");
    }

    let dataset = load_all(&files).context("failed to load exports")?;

    let declarative = DeclarativeRules::load(&config.operators_file)
        .context("failed to load operator definitions")?;
    let classifier = CachedClassifier::new(Classifier::new(declarative), &config.cache);

    let ctx = ReportContext {
        dataset: &dataset,
        classifier: &classifier,
        top_limit: config.top_limit,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config.steps, &ctx, &mut out)?;
    out.flush()?;

    Ok(())
}
