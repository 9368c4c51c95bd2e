//! Dashboard window loading with stale-response protection.
//!
//! Every load takes a fresh token; a completion is applied only when its
//! token is still the newest, so a slow 7-day response cannot overwrite a
//! 30-day chart requested after it. Failures leave the current chart alone.

use api::{ApiError, DashboardPoint, DateRange};
use time::Date;
use tracing::{debug, error};

use super::chart::{ChartHandle, ChartInstance, ChartSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardWindow {
    Week,
    #[default]
    Month,
}

impl DashboardWindow {
    pub fn days(self) -> u32 {
        match self {
            DashboardWindow::Week => 7,
            DashboardWindow::Month => 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// A load that has been issued but not completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingLoad {
    pub token: RequestToken,
    pub window: DashboardWindow,
    pub range: DateRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { categories: usize },
    Stale,
    Failed,
}

#[derive(Debug)]
pub struct DashboardController<C: ChartInstance> {
    chart: ChartHandle<C>,
    latest: u64,
    settled: u64,
    shown: Option<DashboardWindow>,
}

impl<C: ChartInstance> Default for DashboardController<C> {
    fn default() -> Self {
        Self {
            chart: ChartHandle::default(),
            latest: 0,
            settled: 0,
            shown: None,
        }
    }
}

impl<C: ChartInstance> DashboardController<C> {
    pub fn chart(&self) -> Option<&C> {
        self.chart.current()
    }

    /// Window of the chart currently on screen.
    pub fn shown_window(&self) -> Option<DashboardWindow> {
        self.shown
    }

    /// Start loading `window`, superseding any load still in flight.
    pub fn begin(&mut self, window: DashboardWindow, today: Date) -> PendingLoad {
        self.latest += 1;
        PendingLoad {
            token: RequestToken(self.latest),
            window,
            range: DateRange::trailing(today, window.days()),
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// True while the newest load has not completed, either way.
    pub fn is_loading(&self) -> bool {
        self.settled < self.latest
    }

    /// Apply a finished request. The old chart is destroyed only once valid
    /// data for the newest request is in hand.
    pub fn complete<F>(
        &mut self,
        pending: PendingLoad,
        result: Result<Vec<DashboardPoint>, ApiError>,
        build: F,
    ) -> LoadOutcome
    where
        F: FnOnce(&ChartSpec) -> C,
    {
        if !self.is_current(pending.token) {
            debug!(days = pending.window.days(), "dropping stale dashboard response");
            return LoadOutcome::Stale;
        }
        self.settled = pending.token.0;

        match result {
            Ok(points) => {
                let spec = ChartSpec::from_points(&points);
                if spec.is_empty() {
                    debug!(days = pending.window.days(), "no check-ins in window");
                }
                let categories = spec.labels.len();
                self.chart.replace(|| build(&spec));
                self.shown = Some(pending.window);
                LoadOutcome::Rendered { categories }
            }
            Err(err) => {
                error!(%err, days = pending.window.days(), "failed to load dashboard data");
                LoadOutcome::Failed
            }
        }
    }
}
