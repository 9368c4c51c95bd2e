//! Endpoint configuration for the two remote services.

/// Origin serving `POST /submit-survey`.
pub const DEFAULT_SUBMIT_ORIGIN: &str = "https://emomap-backend.onrender.com";
/// Origin serving `GET /dashboard-data`.
pub const DEFAULT_DASHBOARD_ORIGIN: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub submit_origin: String,
    pub dashboard_origin: String,
}

impl ApiConfig {
    /// Build-time overrides (`EMOMAP_SUBMIT_ORIGIN`, `EMOMAP_DASHBOARD_ORIGIN`)
    /// fall back to the hosted defaults. Read with `option_env!` so the same
    /// path works for wasm builds.
    pub fn from_build_env() -> Self {
        Self::with_origins(
            option_env!("EMOMAP_SUBMIT_ORIGIN").unwrap_or(DEFAULT_SUBMIT_ORIGIN),
            option_env!("EMOMAP_DASHBOARD_ORIGIN").unwrap_or(DEFAULT_DASHBOARD_ORIGIN),
        )
    }

    pub fn with_origins(submit_origin: impl Into<String>, dashboard_origin: impl Into<String>) -> Self {
        Self {
            submit_origin: trim_origin(submit_origin.into()),
            dashboard_origin: trim_origin(dashboard_origin.into()),
        }
    }

    pub fn submit_url(&self) -> String {
        format!("{}/submit-survey", self.submit_origin)
    }

    pub fn dashboard_url(&self) -> String {
        format!("{}/dashboard-data", self.dashboard_origin)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn trim_origin(mut origin: String) -> String {
    while origin.ends_with('/') {
        origin.pop();
    }
    origin
}
