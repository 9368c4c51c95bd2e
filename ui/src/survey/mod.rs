//! Survey wizard: form state, step machine, Likert controls and submission.

pub mod actions;
pub mod form;
pub mod likert;
pub mod session;
pub mod state;
pub mod submit;
pub mod wizard;

mod view;
pub use view::SurveyView;

pub use form::{RecordError, SurveyForm, GENDER_OPTIONS};
pub use session::SurveySession;
pub use state::{use_survey_provider, use_survey_state, SurveyState};
pub use wizard::{ValidationError, Wizard, WizardEvent, STEP_COUNT};
