//! Benchmark throughput report aggregation
//!
//! Takes the CSV a benchmark harness writes (one row per aggregate:
//! mean, median, stddev), reconstructs the `(method, size)` grouping
//! hidden in each case name, and aggregates everything into a table
//! ready for charting.
//!
//! # Quick Start
//!
//! ```no_run
//! use benchgraph_report::{ResultTable, build_series, read_records};
//!
//! let records = read_records("results.csv")?;
//! let table = ResultTable::from_records(&records)?;
//! let series = build_series(&table)?;
//!
//! for s in &series {
//!     let peak = s.y_values.iter().fold(0.0_f64, |a, &b| a.max(b));
//!     println!("{}: peak {:.1} GiB/s", s.method, peak);
//! }
//! # Ok::<(), benchgraph_report::ReportError>(())
//! ```

pub mod error;
pub mod identifier;
pub mod input;
pub mod series;
pub mod table;

pub use error::{ReportError, Result};
pub use identifier::{CaseKey, decode};
pub use input::{RawRecord, read_records};
pub use series::{Series, build_series, size_label, to_gibibytes_per_sec};
pub use table::{BenchmarkCase, ResultTable};
