//! Formatting helpers for presenting survey metrics.

pub fn format_average(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "—".to_string()
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}
