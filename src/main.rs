//! pagesim - replay a page reference string against FIFO or LRU.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use pagesim::common::config::{DEFAULT_CAPACITY, DEFAULT_POLICY};
use pagesim::{compare, render, simulate, trace, PageId, PolicyKind, SimConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Replacement policy (FIFO or LRU)
    #[arg(short, long, env = "PAGESIM_POLICY", default_value_t = DEFAULT_POLICY)]
    policy: PolicyKind,

    /// Cache capacity (number of page frames)
    #[arg(short, long, env = "PAGESIM_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Reference string, e.g. "1 2 3 2 4 1" (may start with a negative page)
    #[arg(short, long, conflicts_with = "trace_file", allow_hyphen_values = true)]
    trace: Option<String>,

    /// Read the reference string from a file
    #[arg(short = 'f', long)]
    trace_file: Option<PathBuf>,

    /// Explain every step below its table row
    #[arg(short, long)]
    explain: bool,

    /// Run every policy and print one summary row each (--policy is ignored)
    #[arg(long, conflicts_with = "explain")]
    compare: bool,
}

impl Args {
    fn load_trace(&self) -> Result<Vec<PageId>> {
        match (&self.trace, &self.trace_file) {
            (Some(text), _) => trace::parse_trace(text).context("failed to parse --trace"),
            (None, Some(path)) => trace::load_trace(path)
                .with_context(|| format!("failed to load trace file {}", path.display())),
            (None, None) => bail!("no reference string given (use --trace or --trace-file)"),
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so the table on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    let pages = args.load_trace()?;
    info!(references = pages.len(), "trace loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.compare {
        let reports = compare(args.capacity, &pages)?;
        render::render_comparison(&mut out, &reports)?;
    } else {
        let config = SimConfig::new(args.policy, args.capacity)?;
        let report = simulate(config, &pages)?;
        render::render_report(&mut out, &report, args.explain)?;
    }

    out.flush()?;
    Ok(())
}
