//! Client-side access to the EmoMap backend: wire types, the HTTP client and
//! the `SurveyBackend` seam the UI controllers are written against.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{ApiClient, SurveyBackend};
pub use config::ApiConfig;
pub use error::ApiError;
pub use model::{DashboardPoint, DateRange, Feedback, SurveyRecord, ANONYMOUS_NAME};
