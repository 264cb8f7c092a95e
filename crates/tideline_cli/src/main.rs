//! Command-line probe for the timeline core.
//!
//! # Responsibility
//! - Load exchange snapshots from JSON files and run one reconciliation.
//! - Print the resulting snapshot as JSON on stdout.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use tideline_core::{init_logging, CoreConfig, MergeOrder, SyncSummary, Timeline, TimelineModel};

#[derive(Parser, Debug)]
#[command(
    name = "tideline",
    version,
    about = "Apply timeline snapshots and print the result",
    long_about = None
)]
struct Cli {
    /// Snapshot the model is built from.
    base: PathBuf,

    /// Make the model equal this snapshot.
    #[arg(long, value_name = "NEW.json", conflicts_with = "merge")]
    replace: Option<PathBuf>,

    /// Fold this payload into the model without removing anything.
    #[arg(long, value_name = "NEW.json")]
    merge: Option<PathBuf>,

    /// Where merged child references go; defaults to TIDELINE_MERGE_ORDER.
    #[arg(long, value_enum, requires = "merge")]
    order: Option<OrderArg>,

    /// Print single-line JSON.
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Before,
    After,
}

impl From<OrderArg> for MergeOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Before => MergeOrder::NewBeforeOld,
            OrderArg::After => MergeOrder::NewAfterOld,
        }
    }
}

fn read_timeline(path: &Path) -> Result<Timeline> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn run(cli: &Cli, config: &CoreConfig) -> Result<(TimelineModel, Option<SyncSummary>)> {
    let base = read_timeline(&cli.base)?;
    let model = TimelineModel::from_timeline(&base)
        .with_context(|| format!("invalid snapshot {}", cli.base.display()))?;

    let summary = if let Some(path) = &cli.replace {
        let incoming = read_timeline(path)?;
        Some(
            model
                .replace(&incoming)
                .with_context(|| format!("replace with {} failed", path.display()))?,
        )
    } else if let Some(path) = &cli.merge {
        let incoming = read_timeline(path)?;
        let order = cli.order.map(MergeOrder::from).unwrap_or(config.merge_order);
        info!(
            "event=cli_merge module=cli status=start order={}",
            order.as_str()
        );
        Some(
            model
                .merge(&incoming, order.strategy())
                .with_context(|| format!("merge with {} failed", path.display()))?,
        )
    } else {
        None
    };

    Ok((model, summary))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CoreConfig::from_env().context("invalid TIDELINE_* environment")?;
    init_logging(&config).context("failed to initialize logging")?;

    let (model, summary) = run(&cli, &config)?;
    if let Some(summary) = summary {
        eprintln!("tideline: {summary}");
    }

    let snapshot = model.snapshot();
    let output = if cli.compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    println!("{output}");
    Ok(())
}
