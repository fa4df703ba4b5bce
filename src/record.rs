use std::fmt::Display;

use num::BigUint;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{count, Error};

pub const DEFAULT_UNFOLD_FACTOR: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Operational,
    Damaged,
    Unknown,
}

impl TryFrom<char> for Symbol {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Symbol::Operational),
            '#' => Ok(Symbol::Damaged),
            '?' => Ok(Symbol::Unknown),
            other => Err(Error::InvalidSymbolChar(other)),
        }
    }
}

impl From<Symbol> for char {
    fn from(value: Symbol) -> Self {
        match value {
            Symbol::Operational => '.',
            Symbol::Damaged => '#',
            Symbol::Unknown => '?',
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Row of springs, some of them in unknown condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    symbols: Vec<Symbol>,
}

impl From<Vec<Symbol>> for Pattern {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl TryFrom<&str> for Pattern {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value
            .chars()
            .map(Symbol::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.symbols.iter().try_for_each(|s| write!(f, "{}", s))
    }
}

impl Pattern {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Lengths of contiguous damaged runs, in order from left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RunSpec {
    lens: Vec<usize>,
}

impl TryFrom<&str> for RunSpec {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value
            .split(',')
            .map(|s| {
                s.parse::<usize>()
                    .map_err(|_| Error::InvalidRunLength(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::new)
    }
}

impl Display for RunSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (ind, len) in self.lens.iter().enumerate() {
            if ind > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", len)?;
        }

        Ok(())
    }
}

impl RunSpec {
    pub fn new(lens: Vec<usize>) -> Result<Self, Error> {
        if lens.contains(&0) {
            return Err(Error::InvalidRunLength("0".to_string()));
        }

        Ok(Self { lens })
    }

    pub fn lens(&self) -> &[usize] {
        &self.lens
    }

    pub fn len(&self) -> usize {
        self.lens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lens.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pattern: Pattern,
    runs: RunSpec,
}

impl TryFrom<&str> for Record {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static RECORD_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\S+) (\S+)$").unwrap());

        let caps = RECORD_PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidRecordText(value.to_string()))?;
        let pattern = Pattern::try_from(&caps[1])?;
        let runs = RunSpec::try_from(&caps[2])?;

        Ok(Self::new(pattern, runs))
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.pattern, self.runs)
    }
}

impl Record {
    pub fn new(pattern: Pattern, runs: RunSpec) -> Self {
        Self { pattern, runs }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn runs(&self) -> &RunSpec {
        &self.runs
    }

    pub fn count(&self) -> BigUint {
        count(&self.pattern, &self.runs)
    }

    pub fn unfold(&self, factor: usize) -> Self {
        let (pattern, runs) = unfold(&self.pattern, &self.runs, factor);
        Self::new(pattern, runs)
    }
}

/// Repeat `pattern` `factor` times joined by one unknown spring, and `runs` `factor` times.
pub fn unfold(pattern: &Pattern, runs: &RunSpec, factor: usize) -> (Pattern, RunSpec) {
    let capacity = (pattern.len() + 1).checked_mul(factor).unwrap_or(0);
    let mut symbols = Vec::with_capacity(capacity);
    for ind in 0..factor {
        if ind > 0 {
            symbols.push(Symbol::Unknown);
        }
        symbols.extend_from_slice(pattern.symbols());
    }
    let lens = runs.lens().repeat(factor);

    (Pattern::from(symbols), RunSpec { lens })
}
