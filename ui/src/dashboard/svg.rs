//! Grouped bar chart laid out for inline SVG.

use tracing::debug;

use super::chart::{ChartInstance, ChartSpec, Metric};

pub const VIEW_WIDTH: f64 = 720.0;
pub const VIEW_HEIGHT: f64 = 360.0;

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 56.0;
/// Share of each category slot covered by bars.
const GROUP_FILL: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub metric: Metric,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgChart {
    pub bars: Vec<Bar>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub legend: Vec<Metric>,
    pub categories: usize,
}

impl SvgChart {
    pub fn plot_left() -> f64 {
        MARGIN_LEFT
    }

    pub fn plot_right() -> f64 {
        VIEW_WIDTH - MARGIN_RIGHT
    }

    pub fn plot_top() -> f64 {
        MARGIN_TOP
    }

    pub fn plot_bottom() -> f64 {
        VIEW_HEIGHT - MARGIN_BOTTOM
    }

    pub fn new(spec: &ChartSpec) -> Self {
        let plot_w = Self::plot_right() - Self::plot_left();
        let plot_h = Self::plot_bottom() - Self::plot_top();
        let categories = spec.labels.len();
        let series_count = spec.series.len().max(1);

        let y_ticks = spec
            .value_axis
            .ticks()
            .into_iter()
            .map(|tick| Tick {
                position: Self::plot_bottom() - spec.value_axis.fraction(tick) * plot_h,
                label: format!("{tick:.0}"),
            })
            .collect();

        if categories == 0 {
            return Self {
                y_ticks,
                legend: spec.series.iter().map(|s| s.metric).collect(),
                ..Self::default()
            };
        }

        let slot = plot_w / categories as f64;
        let bar_w = slot * GROUP_FILL / series_count as f64;
        let group_offset = slot * (1.0 - GROUP_FILL) / 2.0;

        let x_ticks = spec
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| Tick {
                position: Self::plot_left() + slot * (i as f64 + 0.5),
                label: label.clone(),
            })
            .collect();

        let mut bars = Vec::with_capacity(categories * series_count);
        for (s, series) in spec.series.iter().enumerate() {
            for (i, &value) in series.values.iter().enumerate().take(categories) {
                let height = spec.value_axis.fraction(value) * plot_h;
                bars.push(Bar {
                    metric: series.metric,
                    x: Self::plot_left() + slot * i as f64 + group_offset + bar_w * s as f64,
                    y: Self::plot_bottom() - height,
                    width: bar_w,
                    height,
                    value,
                });
            }
        }

        Self {
            bars,
            x_ticks,
            y_ticks,
            legend: spec.series.iter().map(|s| s.metric).collect(),
            categories,
        }
    }

    /// Skip labels so long windows stay readable.
    pub fn x_label_stride(&self) -> usize {
        const MAX_LABELS: usize = 10;
        self.categories.div_ceil(MAX_LABELS).max(1)
    }
}

impl ChartInstance for SvgChart {
    fn destroy(&mut self) {
        debug!(categories = self.categories, "tearing down chart");
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::chart::tests::point;

    #[test]
    fn bars_are_grouped_per_category() {
        let spec = ChartSpec::from_points(&[point("a", 3.0), point("b", 5.0)]);
        let chart = SvgChart::new(&spec);
        assert_eq!(chart.categories, 2);
        assert_eq!(chart.bars.len(), 8);
        assert_eq!(chart.x_ticks.len(), 2);
        assert_eq!(chart.y_ticks.len(), 5);

        let first = &chart.bars[0];
        assert_eq!(first.metric, Metric::Positive);
        assert!(first.x >= SvgChart::plot_left());
        let plot_h = SvgChart::plot_bottom() - SvgChart::plot_top();
        assert!((first.height - plot_h * 0.5).abs() < 1e-9);
        assert!(chart
            .bars
            .iter()
            .all(|b| b.x + b.width <= SvgChart::plot_right() + 1e-9));
    }

    #[test]
    fn values_below_axis_draw_flat() {
        let mut row = point("d", 0.0);
        row.social_avg = 0.0;
        let chart = SvgChart::new(&ChartSpec::from_points(&[row]));
        assert!(chart.bars.iter().all(|b| b.height == 0.0));
    }

    #[test]
    fn empty_spec_keeps_axis_and_legend() {
        let chart = SvgChart::new(&ChartSpec::from_points(&[]));
        assert!(chart.bars.is_empty());
        assert_eq!(chart.legend.len(), 4);
        assert_eq!(chart.y_ticks.len(), 5);
    }

    #[test]
    fn destroy_releases_geometry() {
        let mut chart = SvgChart::new(&ChartSpec::from_points(&[point("a", 2.0)]));
        chart.destroy();
        assert!(chart.bars.is_empty());
        assert_eq!(chart.categories, 0);
    }

    #[test]
    fn label_stride_thins_long_windows() {
        let points: Vec<_> = (0..31).map(|d| point(&format!("d{d}"), 3.0)).collect();
        let chart = SvgChart::new(&ChartSpec::from_points(&points));
        assert_eq!(chart.x_label_stride(), 4);
    }
}
