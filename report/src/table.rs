//! Aggregation of raw result rows into a normalized case table
//!
//! Harness reporters emit the three aggregate rows of one case (mean,
//! median, stddev) consecutively and in that order. Aggregation walks the
//! rows in non-overlapping windows of three, decodes each window into its
//! `(method, size)` key, and derives the lookup indices charting needs.

use crate::error::{ReportError, Result};
use crate::identifier::{CaseKey, decode};
use crate::input::RawRecord;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Rows the harness emits per case: mean, median, stddev.
const ROWS_PER_CASE: usize = 3;

/// Aggregated throughput statistics for one `(method, size)` case.
///
/// All three samples are in bytes per second, as reported by the harness.
#[derive(Debug, Clone)]
pub struct BenchmarkCase {
    pub method: String,
    pub size: u64,
    pub mean: f64,
    pub median: f64,
    pub stddev: f64,
}

/// Normalized table of benchmark cases with derived lookup indices.
///
/// `sizes` are distinct and sorted ascending; `methods` are distinct in
/// first-seen order. Every `(method, size)` key maps to exactly one case.
#[derive(Debug, Clone)]
pub struct ResultTable {
    cases: Vec<BenchmarkCase>,
    sizes: Vec<u64>,
    methods: Vec<String>,
    index: FxHashMap<CaseKey, usize>,
}

impl ResultTable {
    /// Aggregate ordered raw rows into a case table.
    ///
    /// Fails on a row count that is not a multiple of three, on any name
    /// the decoder rejects, on windows whose rows decode to different
    /// keys, and on a key that appears twice.
    pub fn from_records(records: &[RawRecord]) -> Result<Self> {
        if records.len() % ROWS_PER_CASE != 0 {
            return Err(ReportError::TruncatedInput(records.len()));
        }

        let mut cases = Vec::with_capacity(records.len() / ROWS_PER_CASE);
        let mut index = FxHashMap::default();

        for (case_idx, window) in records.chunks_exact(ROWS_PER_CASE).enumerate() {
            let key = decode(&window[0].name)?;
            for (offset, row) in window.iter().enumerate().skip(1) {
                let row_key = decode(&row.name)?;
                if row_key != key {
                    return Err(ReportError::MismatchedCase {
                        row: case_idx * ROWS_PER_CASE + offset,
                        expected: key,
                        found: row_key,
                    });
                }
            }

            if index.contains_key(&key) {
                return Err(ReportError::DuplicateCase(key));
            }
            index.insert(key.clone(), cases.len());
            cases.push(BenchmarkCase {
                method: key.method,
                size: key.size,
                mean: window[0].bytes_per_second,
                median: window[1].bytes_per_second,
                stddev: window[2].bytes_per_second,
            });
        }

        let sizes: Vec<u64> = cases.iter().map(|c| c.size).unique().sorted().collect();
        let methods: Vec<String> = cases.iter().map(|c| c.method.clone()).unique().collect();
        debug!(
            "aggregated {} cases across {} methods and {} sizes",
            cases.len(),
            methods.len(),
            sizes.len()
        );

        Ok(Self {
            cases,
            sizes,
            methods,
            index,
        })
    }

    /// All cases, in input order.
    pub fn cases(&self) -> &[BenchmarkCase] {
        &self.cases
    }

    /// Distinct input sizes, sorted ascending.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Distinct methods, in first-seen order.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Look up the unique case for a `(method, size)` pair.
    pub fn get(&self, method: &str, size: u64) -> Option<&BenchmarkCase> {
        let key = CaseKey {
            method: method.to_string(),
            size,
        };
        self.index.get(&key).map(|&i| &self.cases[i])
    }
}
