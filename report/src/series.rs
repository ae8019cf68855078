//! Per-method chart series with human-readable size labels

use crate::error::{ReportError, Result};
use crate::table::ResultTable;
use tracing::debug;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

/// One renderable series per method.
///
/// Positions correspond across the three vectors and follow the table's
/// ascending size order. Values and errors are in GiB/s.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub method: String,
    pub x_labels: Vec<String>,
    pub y_values: Vec<f64>,
    pub y_errors: Vec<f64>,
}

/// Render a byte count as a short axis label: `512B`, `4.0kB`, `3.0MB`.
///
/// Sizes of 1 GiB and above have no label tier and are rejected.
pub fn size_label(size: u64) -> Result<String> {
    if size < KIB {
        Ok(format!("{size}B"))
    } else if size < MIB {
        Ok(format!("{}kB", quotient(size, KIB)))
    } else if size < GIB {
        Ok(format!("{}MB", quotient(size, MIB)))
    } else {
        Err(ReportError::SizeOutOfRange(size))
    }
}

// Whole quotients keep one decimal so scaled labels always read as
// fractional ("2.0kB"), matching the harness report convention.
fn quotient(size: u64, unit: u64) -> String {
    let value = size as f64 / unit as f64;
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Convert a throughput sample from bytes/s to GiB/s.
pub fn to_gibibytes_per_sec(bytes_per_sec: f64) -> f64 {
    bytes_per_sec / GIB as f64
}

/// Build one series per method over the table's full size range.
///
/// The table must cover the complete method x size cross product; a gap
/// would otherwise render as a silently absent bar, so it is an error.
pub fn build_series(table: &ResultTable) -> Result<Vec<Series>> {
    let x_labels: Vec<String> = table
        .sizes()
        .iter()
        .map(|&size| size_label(size))
        .collect::<Result<_>>()?;

    let mut series = Vec::with_capacity(table.methods().len());
    for method in table.methods() {
        let mut y_values = Vec::with_capacity(table.sizes().len());
        let mut y_errors = Vec::with_capacity(table.sizes().len());
        for &size in table.sizes() {
            let case = table
                .get(method, size)
                .ok_or_else(|| ReportError::MissingDataPoint {
                    method: method.clone(),
                    size,
                })?;
            y_values.push(to_gibibytes_per_sec(case.mean));
            y_errors.push(to_gibibytes_per_sec(case.stddev));
        }
        series.push(Series {
            method: method.clone(),
            x_labels: x_labels.clone(),
            y_values,
            y_errors,
        });
    }

    debug!(
        "built {} series over {} sizes",
        series.len(),
        table.sizes().len()
    );
    Ok(series)
}
