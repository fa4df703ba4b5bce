use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use num::BigUint;
use rayon::prelude::*;

pub mod count;
pub mod record;

pub use count::{count, count_without_memo, CountCache};
pub use record::{unfold, Pattern, Record, RunSpec, Symbol, DEFAULT_UNFOLD_FACTOR};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidRecordText(String),
    InvalidSymbolChar(char),
    InvalidRunLength(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRecordText(s) => write!(
                f,
                "Invalid text({}) for record, expect springs and run lengths separated by one space.",
                s
            ),
            Error::InvalidSymbolChar(c) => {
                write!(f, "Invalid character({}) for spring, expect one of '.#?'.", c)
            }
            Error::InvalidRunLength(s) => write!(
                f,
                "Invalid text({}) for damaged run length, expect a positive integer.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct Part1CLIArgs {
    #[arg(required = true)]
    pub input_paths: Vec<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct Part2CLIArgs {
    #[arg(required = true)]
    pub input_paths: Vec<PathBuf>,
    /// How many copies of each record are joined together before counting.
    #[arg(short, long, default_value_t = DEFAULT_UNFOLD_FACTOR)]
    pub factor: usize,
}

/// Sum of possible arrangement counts of all given records.
pub fn sum_counts(records: &[Record]) -> BigUint {
    let cache = CountCache::new();
    let sum = records
        .par_iter()
        .map(|r| {
            let n = cache.count(r);
            debug!("{} has {} arrangement(s).", r, n);
            n
        })
        .sum::<BigUint>();
    info!(
        "Counted {} record(s), {} distinct, sum is {}.",
        records.len(),
        cache.len(),
        sum
    );

    sum
}

/// Same as [`sum_counts`], but every record is unfolded by `factor` first.
pub fn sum_unfolded_counts(records: &[Record], factor: usize) -> BigUint {
    let unfolded = records
        .par_iter()
        .map(|r| r.unfold(factor))
        .collect::<Vec<_>>();
    sum_counts(&unfolded)
}

pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let records = reader
        .lines()
        .enumerate()
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} of given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
            .map(|s| (ind, s))
        })
        .filter(|res| res.as_ref().map_or(true, |(_, s)| !s.trim().is_empty()))
        .map(|res| {
            res.and_then(|(ind, s)| {
                Record::try_from(s.trim()).with_context(|| {
                    format!(
                        "Failed to parse record from line {} of given file({}).",
                        ind + 1,
                        path.as_ref().display()
                    )
                })
            })
        })
        .collect::<Result<Vec<_>>>()?;
    info!(
        "Read {} record(s) from given file({}).",
        records.len(),
        path.as_ref().display()
    );

    Ok(records)
}
