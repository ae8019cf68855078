pub mod base;
pub mod grouped_bar;

pub use base::{BasePlotOptions, BasePlotOptionsBuilder};
pub use grouped_bar::{GroupedBarOptions, GroupedBarOptionsBuilder};

/// Trait for plot options types
///
/// All plot-specific options structs should implement this trait to provide
/// access to the base options.
pub trait PlotOptions {
    /// Get a reference to the base plot options
    fn base(&self) -> &BasePlotOptions;
}
