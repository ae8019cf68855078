use crate::options::{BasePlotOptions, PlotOptions};
use derive_builder::Builder;

/// Options for grouped bar charts
///
/// Configuration for comparing one value per (series, slot) pair side by
/// side: base layout options plus axis titles and the y tick suffix.
///
/// # Example
///
/// ```rust,no_run
/// use benchgraph_plots::options::GroupedBarOptions;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = GroupedBarOptions::new()
///     .x_desc("Data sizes")
///     .y_desc("Speed")
///     .y_tick_suffix("GB/s")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(setter(into, strip_option), default)]
pub struct GroupedBarOptions {
    /// Base plot options (layout, dimensions, etc.)
    #[builder(default)]
    pub base: BasePlotOptions,

    /// X-axis title
    #[builder(default = "\"Data sizes\".to_string()")]
    pub x_desc: String,

    /// Y-axis title
    #[builder(default = "\"Speed\".to_string()")]
    pub y_desc: String,

    /// Suffix appended to every y tick label
    #[builder(default = "\"GB/s\".to_string()")]
    pub y_tick_suffix: String,
}

impl Default for GroupedBarOptions {
    fn default() -> Self {
        Self {
            base: BasePlotOptions::default(),
            x_desc: "Data sizes".to_string(),
            y_desc: "Speed".to_string(),
            y_tick_suffix: "GB/s".to_string(),
        }
    }
}

impl PlotOptions for GroupedBarOptions {
    fn base(&self) -> &BasePlotOptions {
        &self.base
    }
}

impl GroupedBarOptions {
    /// Create a new builder for GroupedBarOptions
    pub fn new() -> GroupedBarOptionsBuilder {
        GroupedBarOptionsBuilder::default()
    }
}
