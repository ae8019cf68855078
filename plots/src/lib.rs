//! # benchgraph-plots
//!
//! Grouped bar charts for benchmark throughput comparisons, rendered as
//! embeddable SVG markup.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use benchgraph_plots::{GroupedBarChart, GroupedBarOptions, Plot};
//! use benchgraph_report::Series;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = GroupedBarOptions::new()
//!     .y_desc("Speed")
//!     .y_tick_suffix("GB/s")
//!     .build()?;
//! let series = vec![Series {
//!     method: "memcpy_rust".to_string(),
//!     x_labels: vec!["4.0kB".to_string()],
//!     y_values: vec![12.5],
//!     y_errors: vec![0.4],
//! }];
//! let svg = GroupedBarChart::new().render(series, &options)?;
//! println!("{svg}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `options`: chart configuration types using the builder pattern
//! - `plots`: plot implementations (currently `GroupedBarChart`)

pub mod options;
pub mod plots;

// Re-export commonly used types
pub use options::{BasePlotOptions, GroupedBarOptions, PlotOptions};
pub use plots::{GroupedBarChart, Plot};

// Type aliases
pub type SvgMarkup = String;
