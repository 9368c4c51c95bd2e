//! Submitting a finished survey and reporting the outcome.

use api::{ApiError, SurveyBackend, SurveyRecord};
use dioxus::prelude::{Signal, Writable};
use tracing::{error, info};

use crate::core::notify::Notifier;
use crate::t;

/// Loading and feedback overlays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub loading: bool,
    pub feedback: Option<String>,
}

/// Whatever displays the overlays while a submission runs.
pub trait SubmissionView {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    fn show_feedback(&mut self, text: &str);
    fn hide_feedback(&mut self);
}

impl SubmissionView for ModalState {
    fn show_loading(&mut self) {
        self.loading = true;
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }

    fn show_feedback(&mut self, text: &str) {
        self.feedback = Some(text.to_string());
    }

    fn hide_feedback(&mut self) {
        self.feedback = None;
    }
}

impl SubmissionView for Signal<ModalState> {
    fn show_loading(&mut self) {
        self.write().show_loading();
    }

    fn hide_loading(&mut self) {
        self.write().hide_loading();
    }

    fn show_feedback(&mut self, text: &str) {
        self.write().show_feedback(text);
    }

    fn hide_feedback(&mut self) {
        self.write().hide_feedback();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server feedback text, now shown in the feedback panel.
    Delivered(String),
    /// The message shown to the user.
    Failed(String),
}

/// Send `record`. The loading overlay is shown first and hidden exactly once
/// when the request settles, whatever the outcome.
pub async fn submit<B, N, V>(
    backend: &B,
    notifier: &N,
    view: &mut V,
    record: SurveyRecord,
) -> SubmitOutcome
where
    B: SurveyBackend + ?Sized,
    N: Notifier + ?Sized,
    V: SubmissionView + ?Sized,
{
    view.show_loading();
    let result = backend.submit_survey(&record).await;
    view.hide_loading();

    match result {
        Ok(feedback) => {
            info!(class = %record.class_name, "survey submitted");
            view.show_feedback(&feedback.feedback);
            SubmitOutcome::Delivered(feedback.feedback)
        }
        Err(err) => {
            error!(%err, "survey submission failed");
            let message = t!("submit-error", message = failure_message(&err));
            notifier.notify(&message);
            SubmitOutcome::Failed(message)
        }
    }
}

fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Server { detail: Some(detail), .. } => detail.clone(),
        ApiError::Server { detail: None, .. } => t!("error-server-generic"),
        other => other.to_string(),
    }
}
