//! # partition
//!
//! Command-line front end for the painter's partition solver.
//!
//! ## Usage
//! ```bash
//! # Minimum max-sum for two painters
//! partition -k 2 10 20 30 40
//!
//! # Also print the chosen ranges, and cross-check against brute force
//! partition -k 3 --splits --verify 5 1 9 2 2 8
//! ```

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use painter_partition::{solve_reference, PartitionSolver};
use tracing_subscriber::EnvFilter;

/// Largest input the `--verify` brute force is allowed to run on.
const VERIFY_LIMIT: usize = 12;

#[derive(Parser)]
#[command(
    name = "partition",
    about = "Split a sequence into K contiguous parts minimising the largest sum",
    version
)]
struct Cli {
    /// Number of contiguous partitions (1 <= K <= number of values).
    #[arg(short = 'k', long = "partitions")]
    partitions: usize,

    /// Print each partition's index range and sum.
    #[arg(short, long)]
    splits: bool,

    /// Cross-check the result with the exhaustive solver (at most 12 values).
    #[arg(long)]
    verify: bool,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The non-negative integers to partition, in order.
    #[arg(value_name = "VALUES")]
    values: Vec<u64>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::info!(n = cli.values.len(), k = cli.partitions, "solving");
    let solver = PartitionSolver::new(&cli.values, cli.partitions)
        .context("cannot partition the given values")?;
    let result = solver.run();

    if cli.verify {
        ensure!(
            cli.values.len() <= VERIFY_LIMIT,
            "--verify supports at most {VERIFY_LIMIT} values, got {}",
            cli.values.len()
        );
        let expected = solve_reference(&cli.values, cli.partitions)
            .context("reference solver rejected the input")?;
        if expected != result.max_sum {
            bail!(
                "verification failed: dp gave {}, brute force gave {expected}",
                result.max_sum
            );
        }
        tracing::info!(expected, "verified against brute force");
    }

    println!("{}", result.max_sum);
    if cli.splits {
        for (range, sum) in result.ranges.iter().zip(&result.sums) {
            println!("  [{}..{}) sum={sum}", range.start, range.end);
        }
    }
    Ok(())
}
