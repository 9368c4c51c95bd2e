use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success HTTP status. `detail` carries the server's human readable
    /// message when the body had a string `detail` field.
    #[error("server responded with status {status}")]
    Server { status: u16, detail: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not format date range: {0}")]
    DateFormat(#[from] time::error::Format),
}

impl ApiError {
    /// Server supplied message, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
