pub mod grouped_bar;
pub mod traits;

pub use grouped_bar::GroupedBarChart;
pub use traits::Plot;
