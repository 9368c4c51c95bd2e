//! Dashboard: trailing-window averages rendered as a grouped bar chart.

pub mod chart;
pub mod controller;
pub mod svg;

mod view;
pub use view::DashboardView;

pub use chart::{ChartHandle, ChartInstance, ChartSpec, Metric};
pub use controller::{DashboardController, DashboardWindow, LoadOutcome};
pub use svg::SvgChart;
