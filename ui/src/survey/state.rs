//! Survey signals that outlive the survey page.
//!
//! The shells re-key their router on a language change, which remounts every
//! page. Answers, overlays and the pending-submit flag live here instead, in
//! context provided above that keyed node.

use std::future::Future;

use dioxus::prelude::*;

use super::{session::SurveySession, submit::ModalState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveyState {
    pub session: Signal<SurveySession>,
    pub modal: Signal<ModalState>,
    pub busy: Signal<bool>,
    shared: bool,
}

impl SurveyState {
    fn new(shared: bool) -> Self {
        Self {
            session: Signal::new(SurveySession::default()),
            modal: Signal::new(ModalState::default()),
            busy: Signal::new(false),
            shared,
        }
    }

    /// Run `task` for as long as these signals live. Shared state keeps its
    /// tasks through a remount of the page; local state ends them with it.
    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        if self.shared {
            spawn_forever(task);
        } else {
            spawn(task);
        }
    }
}

/// Provide survey state to everything below the caller. Call it above any
/// node keyed on the language.
pub fn use_survey_provider() -> SurveyState {
    use_context_provider(|| SurveyState::new(true))
}

/// The provided survey state, or a page-local one when no shell provided it.
pub fn use_survey_state() -> SurveyState {
    use_hook(|| try_consume_context::<SurveyState>().unwrap_or_else(|| SurveyState::new(false)))
}
