use derive_builder::Builder;

/// Base plot options containing layout and display settings
///
/// These options are common to all plot types and control the overall
/// appearance and layout of the plot.
///
/// # Example
///
/// ```rust,no_run
/// use benchgraph_plots::options::BasePlotOptions;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let base = BasePlotOptions::new()
///     .width(800u32)
///     .height(500u32)
///     .title("Copy throughput")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(setter(into, strip_option), default)]
pub struct BasePlotOptions {
    /// Plot width in pixels
    #[builder(default = "1000")]
    pub width: u32,

    /// Plot height in pixels
    #[builder(default = "600")]
    pub height: u32,

    /// Margin around the plot area in pixels
    #[builder(default = "20")]
    pub margin: u32,

    /// Size of the x-axis label area in pixels
    #[builder(default = "60")]
    pub x_label_area_size: u32,

    /// Size of the y-axis label area in pixels
    #[builder(default = "90")]
    pub y_label_area_size: u32,

    /// Plot title; empty draws no caption
    #[builder(default = "String::new()")]
    pub title: String,
}

impl Default for BasePlotOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            margin: 20,
            x_label_area_size: 60,
            y_label_area_size: 90,
            title: String::new(),
        }
    }
}

impl BasePlotOptions {
    /// Create a new builder for BasePlotOptions
    pub fn new() -> BasePlotOptionsBuilder {
        BasePlotOptionsBuilder::default()
    }
}
