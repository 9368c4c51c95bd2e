//! Wire types exchanged with the backend.

use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date, Duration};

use crate::error::ApiError;

/// Fixed full-name value sent for anonymous submissions.
pub const ANONYMOUS_NAME: &str = "Ẩn danh";

/// Value the backend expects in `anonymous` when the box is ticked.
pub const ANONYMOUS_FLAG: &str = "on";

/// One completed survey, as posted to `/submit-survey`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRecord {
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<String>,
    pub class_name: String,
    pub gender: String,
    pub q1: u8,
    pub q2: u8,
    pub q3: u8,
    pub q4: u8,
    pub q5: u8,
    pub q6: u8,
    pub q7: u8,
    pub q8: u8,
    #[serde(default)]
    pub open_ended: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub feedback: String,
}

/// Daily averages for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPoint {
    pub date: String,
    pub positive_avg: f64,
    pub negative_avg: f64,
    pub social_avg: f64,
    pub self_esteem_avg: f64,
}

/// Inclusive calendar-date range for `/dashboard-data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    /// Range ending on `today` and starting `days` calendar days earlier.
    pub fn trailing(today: Date, days: u32) -> Self {
        Self {
            start: today.saturating_sub(Duration::days(i64::from(days))),
            end: today,
        }
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).whole_days()
    }

    pub fn query_pairs(&self) -> Result<[(&'static str, String); 2], ApiError> {
        Ok([
            ("start_date", format_date(self.start)?),
            ("end_date", format_date(self.end)?),
        ])
    }
}

fn format_date(date: Date) -> Result<String, ApiError> {
    Ok(date.format(&format_description!("[year]-[month]-[day]"))?)
}

/// Pull a human readable `detail` string out of an error body. FastAPI
/// validation errors carry a list there; only plain strings count.
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|detail| detail.as_str())
        .map(str::trim)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::date;

    fn record() -> SurveyRecord {
        SurveyRecord {
            full_name: "Minh".into(),
            anonymous: None,
            class_name: "10A1".into(),
            gender: "Nam".into(),
            q1: 4,
            q2: 3,
            q3: 1,
            q4: 2,
            q5: 5,
            q6: 3,
            q7: 4,
            q8: 2,
            open_ended: String::new(),
        }
    }

    #[test]
    fn record_uses_backend_field_names() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["fullName"], json!("Minh"));
        assert_eq!(value["className"], json!("10A1"));
        assert_eq!(value["q5"], json!(5));
        assert_eq!(value["openEnded"], json!(""));
        assert!(value.get("anonymous").is_none());
    }

    #[test]
    fn anonymous_flag_serialises_as_on() {
        let mut rec = record();
        rec.anonymous = Some(ANONYMOUS_FLAG.into());
        rec.full_name = ANONYMOUS_NAME.into();
        let value = serde_json::to_value(rec).unwrap();
        assert_eq!(value["anonymous"], json!("on"));
        assert_eq!(value["fullName"], json!("Ẩn danh"));
    }

    #[test]
    fn trailing_week_spans_seven_days() {
        let range = DateRange::trailing(date!(2025 - 03 - 05), 7);
        assert_eq!(range.start, date!(2025 - 02 - 26));
        assert_eq!(range.days(), 7);

        let pairs = range.query_pairs().unwrap();
        assert_eq!(pairs[0], ("start_date", "2025-02-26".to_string()));
        assert_eq!(pairs[1], ("end_date", "2025-03-05".to_string()));
    }

    #[test]
    fn error_detail_only_accepts_strings() {
        assert_eq!(
            error_detail(r#"{"detail":"Invalid data"}"#).as_deref(),
            Some("Invalid data")
        );
        assert_eq!(error_detail(r#"{"detail":[{"loc":["body","q1"]}]}"#), None);
        assert_eq!(error_detail(r#"{"detail":"  "}"#), None);
        assert_eq!(error_detail("Internal Server Error"), None);
    }

    #[test]
    fn dashboard_points_decode() {
        let body = r#"[{"date":"2025-03-01","positive_avg":3.5,"negative_avg":2.0,"social_avg":4.25,"self_esteem_avg":3.0}]"#;
        let points: Vec<DashboardPoint> = serde_json::from_str(body).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, "2025-03-01");
        assert_eq!(points[0].social_avg, 4.25);
    }
}
