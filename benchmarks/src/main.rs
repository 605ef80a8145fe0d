// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

use std::{
    io::{self, Write},
    time::Instant,
};

mod algo;

use algo::Candidate;
use anyhow::Context;
use clap::Parser;
use itertools::{iproduct, Itertools};
use pointhash::{CollisionReport, HornerHash, NamedRange, Xxh3Hash};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_PRIMES: [i64; 4] = [31, 193, 389, 769];
const DEFAULT_RANGES: [(&str, i64, i64); 3] = [
    ("small range", -10, 10),
    ("medium range", -50, 50),
    ("large range", -100, 100),
];

/// Measures the hash collisions of Horner hashes `prime * (prime * x + y) + z`
/// over cubes of integer coordinates.
#[derive(Parser, Debug)]
struct Args {
    /// Multipliers of the Horner hashes to measure.
    #[clap(short, long, value_delimiter = ',', default_values_t = DEFAULT_PRIMES)]
    primes: Vec<i64>,

    /// Coordinate ranges to measure, as `name=start..end`, the end being
    /// exclusive. Defaults to the small, medium and large ranges.
    #[clap(short, long, value_parser = parse_named_range)]
    ranges: Vec<NamedRange>,

    /// Also measures XXH3, as a baseline.
    #[clap(long)]
    xxh3_baseline: bool,

    #[clap(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// One sentence per measurement.
    Text,
    /// One JSON object per measurement, with all the counts.
    Jsonl,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let candidates = candidates(&args);
    let ranges = if args.ranges.is_empty() {
        default_ranges()
    } else {
        args.ranges
    };
    info!(
        candidates = %candidates.iter().join(", "),
        ranges = %ranges.iter().join(", "),
        "Measuring {} hash collisions",
        candidates.len() * ranges.len()
    );

    run_experiment(&mut io::stdout().lock(), &candidates, &ranges, args.format)
}

fn candidates(args: &Args) -> Vec<Candidate> {
    args.primes
        .iter()
        .map(|&prime| Candidate::Horner(HornerHash::new(prime)))
        .chain(args.xxh3_baseline.then_some(Candidate::Xxh3(Xxh3Hash)))
        .collect()
}

fn default_ranges() -> Vec<NamedRange> {
    DEFAULT_RANGES
        .iter()
        .map(|&(name, start, end)| NamedRange::new(name, start..end))
        .collect()
}

fn run_experiment(
    output: &mut impl Write,
    candidates: &[Candidate],
    ranges: &[NamedRange],
    format: Format,
) -> anyhow::Result<()> {
    for (candidate, range) in iproduct!(candidates, ranges) {
        let start = Instant::now();
        let report = candidate
            .measure(range)
            .with_context(|| format!("measuring {candidate} on {range}"))?;
        debug!(
            num_keys = report.stats().num_keys,
            elapsed = ?start.elapsed(),
            "Measured {} on {}",
            candidate,
            range
        );
        match format {
            Format::Text => writeln!(output, "{report}")?,
            Format::Jsonl => {
                let result = ExperimentResult::new(candidate, range, &report);
                serde_json::to_writer(output.by_ref(), &result)?;
                output.write_all("\n".as_bytes())?;
            }
        }
    }
    output.flush()?;
    Ok(())
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ExperimentResult {
    algo: String,
    range: String,
    start: i64,
    end: i64,
    #[serde(flatten)]
    result: CollisionResult,
}

impl ExperimentResult {
    fn new(candidate: &Candidate, range: &NamedRange, report: &CollisionReport) -> Self {
        let stats = report.stats();
        Self {
            algo: candidate.to_string(),
            range: range.name().to_owned(),
            start: range.range().start,
            end: range.range().end,
            result: CollisionResult {
                num_keys: stats.num_keys,
                num_distinct: stats.num_distinct,
                num_colliding_pairs: stats.num_colliding_pairs,
                max_bucket_len: stats.max_bucket_len,
                collision_fraction: stats.collision_fraction(),
                c_hat: stats.pairwise_collision_rate(),
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct CollisionResult {
    num_keys: u64,
    num_distinct: u64,
    num_colliding_pairs: u64,
    max_bucket_len: u64,
    collision_fraction: f64,
    c_hat: f64,
}

fn parse_named_range(arg: &str) -> Result<NamedRange, String> {
    let (name, bounds) = arg
        .rsplit_once('=')
        .ok_or_else(|| format!("expected `name=start..end`, got `{arg}`"))?;
    let (start, end) = bounds
        .split_once("..")
        .ok_or_else(|| format!("expected `start..end`, got `{bounds}`"))?;
    let start = start
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid range start `{start}`: {e}"))?;
    let end = end
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid range end `{end}`: {e}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing range name in `{arg}`"));
    }
    Ok(NamedRange::new(name.to_owned(), start..end))
}
