//! `agglo` command-line driver.
//!
//! Loads objects from a file, merges them down to `N` clusters and prints
//! the result.
//!
//! ```text
//! agglo objects.txt 2
//! agglo -v --history objects.txt 3
//! ```

use agglo::{load_clusters, write_clusters, Agglomerative};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Average-linkage agglomerative clustering of 2-D points.
#[derive(Parser)]
#[command(name = "agglo")]
#[command(version)]
#[command(about = "Merge labelled 2-D points into N clusters by average linkage")]
struct Cli {
    /// Input file: optional `count=N` header, then one `ID X Y` per line.
    file: PathBuf,

    /// Number of clusters to produce.
    #[arg(default_value_t = 1)]
    clusters: usize,

    /// Also print every merge (nodes, distance, resulting size).
    #[arg(long)]
    history: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let mut clusters = load_clusters(&cli.file)
        .with_context(|| format!("failed to load objects from {}", cli.file.display()))?;

    if cli.clusters == 0 || cli.clusters > clusters.len() {
        bail!(
            "cluster count must be between 1 and {} (the number of objects), got {}",
            clusters.len(),
            cli.clusters
        );
    }

    info!(file = %cli.file.display(), objects = clusters.len(), "loaded");

    let dendro = Agglomerative::new(cli.clusters)
        .run(&mut clusters)
        .context("agglomeration failed")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.history {
        writeln!(out, "Merges:")?;
        for (step, merge) in dendro.merges().enumerate() {
            writeln!(
                out,
                "merge {step}: {} + {} -> {} (distance {:.6}, size {})",
                merge.node_a,
                merge.node_b,
                dendro.n_items() + step,
                merge.distance,
                merge.size
            )?;
        }
    }
    write_clusters(&mut out, &clusters)?;
    out.flush()?;

    Ok(())
}
