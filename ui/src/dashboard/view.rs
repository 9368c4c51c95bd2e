use api::{ApiClient, SurveyBackend};
use dioxus::prelude::*;

use crate::core::{format, timing};
use crate::t;

use super::{
    controller::{DashboardController, DashboardWindow},
    svg::{SvgChart, VIEW_HEIGHT, VIEW_WIDTH},
};

#[component]
pub fn DashboardView() -> Element {
    let client = use_context::<ApiClient>();
    let controller = use_signal(DashboardController::<SvgChart>::default);

    // Initial 30-day load.
    use_hook({
        let client = client.clone();
        move || start_load(controller, client, DashboardWindow::Month)
    });

    let (chart, loading, active) = {
        let ctrl = controller.read();
        (
            ctrl.chart().cloned(),
            ctrl.is_loading(),
            ctrl.shown_window().unwrap_or_default(),
        )
    };

    rsx! {
        article { class: "dashboard",
            div { class: "dashboard__controls",
                for window in [DashboardWindow::Week, DashboardWindow::Month] {
                    button {
                        key: "{window.days()}",
                        id: if window == DashboardWindow::Week { "btn-7-days" } else { "btn-30-days" },
                        r#type: "button",
                        class: if window == active { "button button--primary" } else { "button button--ghost" },
                        onclick: {
                            let client = client.clone();
                            move |_| start_load(controller, client.clone(), window)
                        },
                        {window_label(window)}
                    }
                }
            }

            {match chart {
                Some(chart) if chart.categories > 0 => render_chart(&chart),
                Some(_) => rsx! {
                    p { class: "dashboard__placeholder", {t!("dashboard-empty")} }
                },
                None if loading => rsx! {
                    p { class: "dashboard__placeholder", {t!("dashboard-loading")} }
                },
                None => rsx! {
                    p { class: "dashboard__placeholder", {t!("dashboard-unavailable")} }
                },
            }}
        }
    }
}

/// Issue a load for `window`; the controller discards it if a newer load
/// finishes first or supersedes it.
fn start_load(
    mut controller: Signal<DashboardController<SvgChart>>,
    client: ApiClient,
    window: DashboardWindow,
) {
    let pending = controller.write().begin(window, timing::today_utc());
    spawn(async move {
        let result = client.dashboard_data(&pending.range).await;
        controller.write().complete(pending, result, SvgChart::new);
    });
}

fn window_label(window: DashboardWindow) -> String {
    match window {
        DashboardWindow::Week => t!("dashboard-last-7"),
        DashboardWindow::Month => t!("dashboard-last-30"),
    }
}

struct BarView {
    key: String,
    x: String,
    y: String,
    width: String,
    height: String,
    fill: &'static str,
    stroke: &'static str,
    title: String,
}

struct TickView {
    key: String,
    position: String,
    label: String,
}

fn render_chart(chart: &SvgChart) -> Element {
    let left = format!("{:.1}", SvgChart::plot_left());
    let right = format!("{:.1}", SvgChart::plot_right());
    let bottom = format!("{:.1}", SvgChart::plot_bottom());
    let label_y = format!("{:.1}", SvgChart::plot_bottom() + 18.0);
    let y_label_x = format!("{:.1}", SvgChart::plot_left() - 8.0);
    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");
    let stride = chart.x_label_stride();

    let bars: Vec<BarView> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| BarView {
            key: format!("bar-{i}"),
            x: format!("{:.1}", bar.x),
            y: format!("{:.1}", bar.y),
            width: format!("{:.1}", bar.width),
            height: format!("{:.1}", bar.height),
            fill: bar.metric.fill(),
            stroke: bar.metric.stroke(),
            title: format!("{}: {}", bar.metric.label(), format::format_average(bar.value)),
        })
        .collect();

    let y_ticks: Vec<TickView> = chart
        .y_ticks
        .iter()
        .map(|tick| TickView {
            key: format!("y-{}", tick.label),
            position: format!("{:.1}", tick.position),
            label: tick.label.clone(),
        })
        .collect();

    let x_ticks: Vec<TickView> = chart
        .x_ticks
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(i, tick)| TickView {
            key: format!("x-{i}"),
            position: format!("{:.1}", tick.position),
            label: tick.label.clone(),
        })
        .collect();

    let axis_value = t!("chart-axis-value");
    let axis_date = t!("chart-axis-date");

    rsx! {
        figure { class: "dashboard__chart",
            svg {
                id: "emotionChart",
                class: "emotion-chart",
                "viewBox": "{view_box}",
                "role": "img",
                "aria-label": "{axis_value}",

                for tick in y_ticks {
                    g { key: "{tick.key}",
                        line {
                            class: "emotion-chart__grid",
                            x1: "{left}",
                            x2: "{right}",
                            y1: "{tick.position}",
                            y2: "{tick.position}",
                        }
                        text {
                            class: "emotion-chart__tick",
                            x: "{y_label_x}",
                            y: "{tick.position}",
                            "text-anchor": "end",
                            "dominant-baseline": "middle",
                            "{tick.label}"
                        }
                    }
                }

                for bar in bars {
                    rect {
                        key: "{bar.key}",
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        fill: bar.fill,
                        stroke: bar.stroke,
                        "stroke-width": "1",
                        title { "{bar.title}" }
                    }
                }

                for tick in x_ticks {
                    text {
                        key: "{tick.key}",
                        class: "emotion-chart__tick",
                        x: "{tick.position}",
                        y: "{label_y}",
                        "text-anchor": "middle",
                        "{tick.label}"
                    }
                }

                line {
                    class: "emotion-chart__axis",
                    x1: "{left}",
                    x2: "{right}",
                    y1: "{bottom}",
                    y2: "{bottom}",
                }
            }
            figcaption { class: "dashboard__legend",
                for metric in chart.legend.iter().copied() {
                    span { key: "{metric.css_modifier()}", class: "dashboard__legend-item",
                        span {
                            class: "dashboard__legend-swatch dashboard__legend-swatch--{metric.css_modifier()}",
                            style: "background: {metric.fill()}; border-color: {metric.stroke()}",
                        }
                        "{metric.label()}"
                    }
                }
                span { class: "dashboard__axis-note", "{axis_value} · {axis_date}" }
            }
        }
    }
}
