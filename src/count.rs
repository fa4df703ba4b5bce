use std::collections::HashMap;

use dashmap::DashMap;
use log::trace;
use num::{BigUint, One, Zero};

use crate::{Pattern, Record, RunSpec, Symbol};

/// Number of ways to resolve every unknown spring in `pattern` so that its damaged runs are exactly `runs`.
pub fn count(pattern: &Pattern, runs: &RunSpec) -> BigUint {
    ArrangementCounter::new(pattern.symbols(), runs.lens(), true).count()
}

pub fn count_without_memo(pattern: &Pattern, runs: &RunSpec) -> BigUint {
    ArrangementCounter::new(pattern.symbols(), runs.lens(), false).count()
}

struct ArrangementCounter<'a> {
    symbols: &'a [Symbol],
    runs: &'a [usize],
    // (symbol index, run index) -> count of that suffix pair.
    memo: Option<HashMap<(usize, usize), BigUint>>,
}

impl<'a> ArrangementCounter<'a> {
    fn new(symbols: &'a [Symbol], runs: &'a [usize], use_memo: bool) -> Self {
        Self {
            symbols,
            runs,
            memo: use_memo.then(HashMap::new),
        }
    }

    fn count(&mut self) -> BigUint {
        self.count_from(0, 0)
    }

    fn count_from(&mut self, sym_ind: usize, run_ind: usize) -> BigUint {
        if sym_ind >= self.symbols.len() {
            return if run_ind >= self.runs.len() {
                BigUint::one()
            } else {
                BigUint::zero()
            };
        }

        if let Some(n) = self
            .memo
            .as_ref()
            .and_then(|memo| memo.get(&(sym_ind, run_ind)).cloned())
        {
            return n;
        }

        let n = match self.symbols[sym_ind] {
            Symbol::Operational => self.count_from(sym_ind + 1, run_ind),
            Symbol::Damaged => self.count_run_from(sym_ind, run_ind),
            Symbol::Unknown => {
                self.count_from(sym_ind + 1, run_ind) + self.count_run_from(sym_ind, run_ind)
            }
        };
        if let Some(memo) = self.memo.as_mut() {
            memo.insert((sym_ind, run_ind), n.clone());
        }

        n
    }

    // Damaged run of length runs[run_ind] starts at sym_ind.
    fn count_run_from(&mut self, sym_ind: usize, run_ind: usize) -> BigUint {
        let Some(&run_len) = self.runs.get(run_ind) else {
            return BigUint::zero();
        };
        // sym_ind is always inside symbols here.
        if run_len > self.symbols.len() - sym_ind {
            return BigUint::zero();
        }
        let run_end = sym_ind + run_len;
        if self.symbols[sym_ind..run_end].contains(&Symbol::Operational) {
            return BigUint::zero();
        }

        match self.symbols.get(run_end) {
            None => self.count_from(run_end, run_ind + 1),
            Some(Symbol::Damaged) => BigUint::zero(),
            // The spring right after a run works as a separator.
            Some(_) => self.count_from(run_end + 1, run_ind + 1),
        }
    }
}

/// Counts shared between records, keyed by the whole record.
#[derive(Debug, Default)]
pub struct CountCache {
    counts: DashMap<Record, BigUint>,
}

impl CountCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, record: &Record) -> BigUint {
        if let Some(n) = self.counts.get(record) {
            trace!("Found count of {} in cache.", record);
            return n.value().clone();
        }

        let n = record.count();
        // Another thread may have inserted the same record meanwhile, both values are equal.
        self.counts.entry(record.clone()).or_insert(n).value().clone()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
