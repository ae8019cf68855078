use crate::SvgMarkup;
use crate::options::PlotOptions;
use anyhow::Result;

/// Trait for plot types
///
/// This trait defines the interface that all plot types must implement.
/// Each plot type specifies its own options type and data type.
///
/// # Example
///
/// ```rust,no_run
/// use benchgraph_plots::SvgMarkup;
/// use benchgraph_plots::options::{BasePlotOptions, PlotOptions};
/// use benchgraph_plots::plots::traits::Plot;
/// use anyhow::Result;
///
/// struct MyPlotOptions {
///     base: BasePlotOptions,
/// }
///
/// impl PlotOptions for MyPlotOptions {
///     fn base(&self) -> &BasePlotOptions { &self.base }
/// }
///
/// struct MyPlot;
///
/// impl Plot for MyPlot {
///     type Options = MyPlotOptions;
///     type Data = Vec<(f64, f64)>;
///
///     fn render(&self, _data: Self::Data, _options: &Self::Options) -> Result<SvgMarkup> {
///         Ok(String::new())
///     }
/// }
/// ```
pub trait Plot {
    /// The options type for this plot
    type Options: PlotOptions;

    /// The data type this plot accepts
    type Data;

    /// Render the plot with the given data and options
    ///
    /// # Returns
    ///
    /// An SVG markup fragment, suitable for embedding in a larger document
    fn render(&self, data: Self::Data, options: &Self::Options) -> Result<SvgMarkup>;
}
