//! Chart model built from dashboard rows, and the single-owner handle for
//! the rendered instance.

use api::DashboardPoint;

use crate::t;

/// The four averaged metrics, in legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Positive,
    Negative,
    Social,
    SelfEsteem,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Positive,
        Metric::Negative,
        Metric::Social,
        Metric::SelfEsteem,
    ];

    pub fn value(self, point: &DashboardPoint) -> f64 {
        match self {
            Metric::Positive => point.positive_avg,
            Metric::Negative => point.negative_avg,
            Metric::Social => point.social_avg,
            Metric::SelfEsteem => point.self_esteem_avg,
        }
    }

    pub fn label(self) -> String {
        match self {
            Metric::Positive => t!("series-positive"),
            Metric::Negative => t!("series-negative"),
            Metric::Social => t!("series-social"),
            Metric::SelfEsteem => t!("series-self-esteem"),
        }
    }

    pub fn stroke(self) -> &'static str {
        match self {
            Metric::Positive => "rgba(75, 192, 192, 1)",
            Metric::Negative => "rgba(255, 99, 132, 1)",
            Metric::Social => "rgba(54, 162, 235, 1)",
            Metric::SelfEsteem => "rgba(255, 206, 86, 1)",
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            Metric::Positive => "rgba(75, 192, 192, 0.45)",
            Metric::Negative => "rgba(255, 99, 132, 0.45)",
            Metric::Social => "rgba(54, 162, 235, 0.7)",
            Metric::SelfEsteem => "rgba(255, 206, 86, 0.45)",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Metric::Positive => "positive",
            Metric::Negative => "negative",
            Metric::Social => "social",
            Metric::SelfEsteem => "self-esteem",
        }
    }
}

/// Fixed value axis. Ratings are bounded, so the axis never auto-scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
}

pub const RATING_AXIS: ValueAxis = ValueAxis { min: 1.0, max: 5.0 };

impl ValueAxis {
    /// Position of `value` within the axis as `0.0..=1.0`, clamped.
    pub fn fraction(&self, value: f64) -> f64 {
        if !value.is_finite() || self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Whole-number ticks from min to max.
    pub fn ticks(&self) -> Vec<f64> {
        let mut ticks = Vec::new();
        let mut tick = self.min.ceil();
        while tick <= self.max {
            ticks.push(tick);
            tick += 1.0;
        }
        ticks
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub metric: Metric,
    pub values: Vec<f64>,
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub value_axis: ValueAxis,
}

impl ChartSpec {
    /// One category per row, in server order; one series per metric.
    pub fn from_points(points: &[DashboardPoint]) -> Self {
        let labels = points.iter().map(|p| p.date.clone()).collect();
        let series = Metric::ALL
            .iter()
            .map(|&metric| Series {
                metric,
                values: points.iter().map(|p| metric.value(p)).collect(),
            })
            .collect();
        Self {
            labels,
            series,
            value_axis: RATING_AXIS,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A rendered chart that holds on to rendering resources until destroyed.
pub trait ChartInstance {
    fn destroy(&mut self);
}

/// Owner of the one chart on screen.
#[derive(Debug)]
pub struct ChartHandle<C: ChartInstance> {
    current: Option<C>,
}

impl<C: ChartInstance> Default for ChartHandle<C> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<C: ChartInstance> ChartHandle<C> {
    pub fn current(&self) -> Option<&C> {
        self.current.as_ref()
    }

    /// Tear down the previous instance, then build and install the next one.
    /// At no point do two instances exist.
    pub fn replace<F>(&mut self, build: F)
    where
        F: FnOnce() -> C,
    {
        if let Some(mut previous) = self.current.take() {
            previous.destroy();
        }
        self.current = Some(build());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    pub(crate) fn point(date: &str, base: f64) -> DashboardPoint {
        DashboardPoint {
            date: date.to_string(),
            positive_avg: base,
            negative_avg: base - 0.5,
            social_avg: base + 0.25,
            self_esteem_avg: base + 0.5,
        }
    }

    /// Logs lifecycle events into a shared journal.
    pub(crate) struct JournalChart {
        pub(crate) name: &'static str,
        pub(crate) journal: Rc<RefCell<Vec<String>>>,
    }

    impl ChartInstance for JournalChart {
        fn destroy(&mut self) {
            self.journal.borrow_mut().push(format!("destroy {}", self.name));
        }
    }

    #[test]
    fn spec_has_one_category_per_point_and_four_series() {
        let points = [
            point("2025-05-01", 3.0),
            point("2025-05-02", 3.5),
            point("2025-05-03", 4.0),
        ];
        let spec = ChartSpec::from_points(&points);
        assert_eq!(spec.labels, ["2025-05-01", "2025-05-02", "2025-05-03"]);
        assert_eq!(spec.series.len(), 4);
        assert!(spec.series.iter().all(|s| s.values.len() == 3));
        assert_eq!(spec.series[2].metric, Metric::Social);
        assert_eq!(spec.series[2].values, vec![3.25, 3.75, 4.25]);
        assert_eq!(spec.value_axis, ValueAxis { min: 1.0, max: 5.0 });
    }

    #[test]
    fn axis_clamps_and_ticks_each_integer() {
        assert_eq!(RATING_AXIS.ticks(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(RATING_AXIS.fraction(0.0), 0.0);
        assert_eq!(RATING_AXIS.fraction(3.0), 0.5);
        assert_eq!(RATING_AXIS.fraction(9.0), 1.0);
        assert_eq!(RATING_AXIS.fraction(f64::NAN), 0.0);
    }

    #[test]
    fn replace_destroys_previous_before_building_next() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut handle = ChartHandle::default();
        let build = |name: &'static str| {
            let journal = journal.clone();
            move || {
                journal.borrow_mut().push(format!("build {name}"));
                JournalChart { name, journal }
            }
        };

        handle.replace(build("first"));
        handle.replace(build("second"));

        assert_eq!(
            *journal.borrow(),
            vec![
                "build first".to_string(),
                "destroy first".to_string(),
                "build second".to_string(),
            ]
        );
        assert_eq!(handle.current().map(|c| c.name), Some("second"));
    }
}
