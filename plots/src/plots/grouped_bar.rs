use crate::SvgMarkup;
use crate::options::{GroupedBarOptions, PlotOptions};
use crate::plots::traits::Plot;
use anyhow::{Result, bail};
use benchgraph_report::Series;
use plotters::prelude::*;

// Font sizes
const TITLE_FONT_SIZE: u32 = 32;
const AXIS_LABEL_FONT_SIZE: u32 = 22;
const TICK_LABEL_FONT_SIZE: u32 = 16;
const LEGEND_FONT_SIZE: u32 = 16;

// Each size slot is 1.0 wide; bars fill this fraction of it, split evenly
// across the series. The rest is inter-group gap.
const GROUP_WIDTH: f64 = 0.8;
const BAR_GAP: f64 = 0.02;
const ERROR_BAR_PIXEL_WIDTH: u32 = 6;

/// Color palette cycled across series
const COLORS: &[RGBColor] = &[
    RGBColor(66, 133, 244),  // Blue
    RGBColor(219, 68, 55),   // Red
    RGBColor(244, 180, 0),   // Yellow
    RGBColor(15, 157, 88),   // Green
    RGBColor(171, 71, 188),  // Purple
    RGBColor(0, 172, 193),   // Cyan
];

/// Grouped bar chart implementation
///
/// Draws one bar per (series, slot) pair, grouped by slot, with vertical
/// error whiskers, and returns the chart as an SVG string.
///
/// # Example
///
/// ```rust,no_run
/// use benchgraph_plots::options::GroupedBarOptions;
/// use benchgraph_plots::plots::grouped_bar::GroupedBarChart;
/// use benchgraph_plots::plots::traits::Plot;
/// use benchgraph_report::Series;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let chart = GroupedBarChart::new();
/// let options = GroupedBarOptions::new().build()?;
/// let series = vec![Series {
///     method: "memcpy_rust".to_string(),
///     x_labels: vec!["4.0kB".to_string(), "8.0kB".to_string()],
///     y_values: vec![12.5, 13.1],
///     y_errors: vec![0.4, 0.3],
/// }];
/// let svg = chart.render(series, &options)?;
/// println!("{svg}");
/// # Ok(())
/// # }
/// ```
pub struct GroupedBarChart;

impl GroupedBarChart {
    /// Create a new GroupedBarChart instance
    pub fn new() -> Self {
        Self
    }
}

impl Plot for GroupedBarChart {
    type Options = GroupedBarOptions;
    type Data = Vec<Series>;

    fn render(&self, data: Self::Data, options: &Self::Options) -> Result<SvgMarkup> {
        let Some(first) = data.first() else {
            bail!("no series to draw");
        };
        let x_labels = first.x_labels.clone();
        let num_slots = x_labels.len();
        if num_slots == 0 {
            bail!("series '{}' carries no data points", first.method);
        }
        for series in &data {
            if series.x_labels != x_labels {
                bail!(
                    "series '{}' does not span the same slots as '{}'",
                    series.method,
                    first.method
                );
            }
            if series.y_values.len() != num_slots || series.y_errors.len() != num_slots {
                bail!(
                    "series '{}' carries {} values and {} errors for {} slots",
                    series.method,
                    series.y_values.len(),
                    series.y_errors.len(),
                    num_slots
                );
            }
            if series
                .y_values
                .iter()
                .chain(&series.y_errors)
                .any(|v| !v.is_finite() || *v < 0.0)
            {
                bail!(
                    "series '{}' contains non-finite or negative values",
                    series.method
                );
            }
        }

        let peak = data
            .iter()
            .flat_map(|s| s.y_values.iter().zip(&s.y_errors).map(|(y, e)| y + e))
            .fold(0.0_f64, f64::max);
        if peak <= 0.0 {
            bail!("series values must be positive");
        }
        let y_max = peak * 1.15;

        let num_series = data.len();
        let bar_width = GROUP_WIDTH / num_series as f64;
        let base = options.base();

        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (base.width, base.height)).into_drawing_area();
            root.fill(&WHITE)?;

            let mut builder = ChartBuilder::on(&root);
            builder
                .margin(base.margin)
                .x_label_area_size(base.x_label_area_size)
                .y_label_area_size(base.y_label_area_size);
            if !base.title.is_empty() {
                builder.caption(&base.title, ("sans-serif", TITLE_FONT_SIZE));
            }
            let mut chart =
                builder.build_cartesian_2d(-0.5..(num_slots as f64 - 0.5), 0.0..y_max)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(num_slots)
                .x_label_formatter(&|x| {
                    let idx = x.round() as usize;
                    if idx < num_slots && (x - idx as f64).abs() < 0.3 {
                        x_labels.get(idx).cloned().unwrap_or_default()
                    } else {
                        String::new()
                    }
                })
                .y_label_formatter(&|y| format!("{:.1}{}", y, options.y_tick_suffix))
                .y_desc(options.y_desc.as_str())
                .x_desc(options.x_desc.as_str())
                .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
                .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
                .draw()?;

            for (series_idx, series) in data.iter().enumerate() {
                let color = COLORS[series_idx % COLORS.len()];
                let offset = (series_idx as f64 - (num_series as f64 - 1.0) / 2.0) * bar_width;

                let bars = series.y_values.iter().enumerate().map(|(slot, &value)| {
                    let x_center = slot as f64 + offset;
                    Rectangle::new(
                        [
                            (x_center - bar_width / 2.0 + BAR_GAP, 0.0),
                            (x_center + bar_width / 2.0 - BAR_GAP, value),
                        ],
                        color.filled(),
                    )
                });
                chart
                    .draw_series(bars)?
                    .label(series.method.as_str())
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled())
                    });

                let whiskers =
                    series
                        .y_values
                        .iter()
                        .zip(&series.y_errors)
                        .enumerate()
                        .map(|(slot, (&value, &err))| {
                            let x_center = slot as f64 + offset;
                            ErrorBar::new_vertical(
                                x_center,
                                (value - err).max(0.0),
                                value,
                                value + err,
                                BLACK.filled(),
                                ERROR_BAR_PIXEL_WIDTH,
                            )
                        });
                chart.draw_series(whiskers)?;
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font(("sans-serif", LEGEND_FONT_SIZE))
                .draw()?;

            root.present()?;
        }

        Ok(svg)
    }
}
