//! What the survey buttons do, independent of the component that wires them.

use std::future::Future;

use api::SurveyRecord;
use dioxus::prelude::{Signal, Writable};

use crate::core::notify::Notifier;
use crate::t;

use super::{
    session::SurveySession,
    submit::SubmissionView,
    wizard::ValidationError,
};

/// Anything holding the survey session: the bare value in tests, a signal
/// in the view.
pub trait SessionStore {
    fn with_session<R>(&mut self, f: impl FnOnce(&mut SurveySession) -> R) -> R;
}

impl SessionStore for SurveySession {
    fn with_session<R>(&mut self, f: impl FnOnce(&mut SurveySession) -> R) -> R {
        f(self)
    }
}

impl SessionStore for Signal<SurveySession> {
    fn with_session<R>(&mut self, f: impl FnOnce(&mut SurveySession) -> R) -> R {
        self.with_mut(f)
    }
}

/// "Next": move on, or raise exactly one notification naming the missing
/// field and stay put.
pub fn advance_or_notify<S, N>(session: &mut S, notifier: &N) -> Option<ValidationError>
where
    S: SessionStore,
    N: Notifier + ?Sized,
{
    let err = session.with_session(|s| s.advance()).err()?;
    notifier.notify(&err.message());
    Some(err)
}

/// "Send": claim the busy flag and build the record. Clicks while a
/// submission is pending are ignored; a form that cannot be encoded is
/// reported and leaves the flag clear.
pub fn take_record<N>(busy: &mut bool, session: &SurveySession, notifier: &N) -> Option<SurveyRecord>
where
    N: Notifier + ?Sized,
{
    if *busy {
        tracing::debug!("submission already pending; click ignored");
        return None;
    }
    match session.form.to_record() {
        Ok(record) => {
            *busy = true;
            Some(record)
        }
        Err(err) => {
            notifier.notify(&t!("submit-error", message = err.to_string()));
            None
        }
    }
}

/// Feedback dismissed: hide the panel, let `delay` cover the close
/// animation, then rewind the wizard and clear the form.
pub async fn close_and_reset<V, S, D>(view: &mut V, session: &mut S, delay: D)
where
    V: SubmissionView + ?Sized,
    S: SessionStore,
    D: Future<Output = ()>,
{
    view.hide_feedback();
    delay.await;
    session.with_session(SurveySession::reset_after_feedback);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notify::RecordingNotifier;
    use crate::i18n;
    use crate::survey::session::MASCOT_CELEBRATION;
    use crate::survey::submit::ModalState;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn ready_session() -> SurveySession {
        let mut session = SurveySession::default();
        session.form.class_name = "11B2".into();
        session.form.gender = Some("Nữ".into());
        session
    }

    #[test]
    fn failed_advance_notifies_once_and_stays() {
        i18n::init();
        let notifier = RecordingNotifier::default();
        let mut session = SurveySession::default();

        assert_eq!(
            advance_or_notify(&mut session, &notifier),
            Some(ValidationError::MissingClassName)
        );
        assert_eq!(session.wizard.current(), 0);
        assert_eq!(notifier.messages(), vec![t!("validation-class-name")]);

        session.form.class_name = "11B2".into();
        assert_eq!(
            advance_or_notify(&mut session, &notifier),
            Some(ValidationError::MissingGender)
        );
        assert_eq!(session.wizard.current(), 0);
        assert_eq!(notifier.messages().len(), 2);
        assert_eq!(notifier.messages()[1], t!("validation-gender"));
    }

    #[test]
    fn valid_advance_is_silent() {
        let notifier = RecordingNotifier::default();
        let mut session = ready_session();

        assert_eq!(advance_or_notify(&mut session, &notifier), None);
        assert_eq!(session.wizard.current(), 1);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn second_send_while_busy_is_ignored() {
        let notifier = RecordingNotifier::default();
        let session = ready_session();
        let mut busy = false;

        let first = take_record(&mut busy, &session, &notifier);
        assert_eq!(first.map(|r| r.class_name), Some("11B2".to_string()));
        assert!(busy);

        assert_eq!(take_record(&mut busy, &session, &notifier), None);
        assert!(notifier.messages().is_empty());

        busy = false;
        assert!(take_record(&mut busy, &session, &notifier).is_some());
    }

    #[test]
    fn unencodable_form_is_reported_and_leaves_flag_clear() {
        i18n::init();
        let notifier = RecordingNotifier::default();
        let mut session = ready_session();
        session.form.gender = None;
        let mut busy = false;

        assert_eq!(take_record(&mut busy, &session, &notifier), None);
        assert!(!busy);
        assert_eq!(notifier.messages().len(), 1);
    }

    /// Session wrapper that journals when the reset lands.
    struct JournalSession<'a> {
        inner: SurveySession,
        journal: &'a RefCell<Vec<&'static str>>,
    }

    impl SessionStore for JournalSession<'_> {
        fn with_session<R>(&mut self, f: impl FnOnce(&mut SurveySession) -> R) -> R {
            self.journal.borrow_mut().push("reset");
            f(&mut self.inner)
        }
    }

    #[test]
    fn close_hides_then_waits_then_resets() {
        let journal = RefCell::new(Vec::new());
        let mut view = ModalState {
            loading: false,
            feedback: Some("Great job!".into()),
        };
        let mut session = JournalSession {
            inner: ready_session(),
            journal: &journal,
        };
        session.inner.advance().unwrap();
        session.inner.advance().unwrap();

        block_on(close_and_reset(&mut view, &mut session, async {
            journal.borrow_mut().push("delay");
        }));

        assert_eq!(view.feedback, None);
        assert_eq!(*journal.borrow(), vec!["delay", "reset"]);
        assert_eq!(session.inner.wizard.current(), 0);
        assert_eq!(session.inner.mascot(), MASCOT_CELEBRATION);
        assert_eq!(session.inner.form.class_name, "");
    }
}
