//! The survey page's state: wizard position, form values and mascot mood.

use super::{
    form::SurveyForm,
    wizard::{ValidationError, Wizard, WizardEvent, STEP_COUNT},
};

/// Mascot glyph shown for each step.
pub const MASCOT_MOODS: [&str; STEP_COUNT] = ["😺", "😸", "😿", "😹", "😻", "🤗"];

/// Shown after a completed submission until the user navigates again.
pub const MASCOT_CELEBRATION: &str = "🎉";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveySession {
    pub wizard: Wizard,
    pub form: SurveyForm,
    celebrating: bool,
}

impl SurveySession {
    /// Returns whether the step changed.
    pub fn advance(&mut self) -> Result<bool, ValidationError> {
        self.step(WizardEvent::Advance)
    }

    pub fn retreat(&mut self) -> bool {
        // Retreat never validates.
        self.step(WizardEvent::Retreat).unwrap_or(false)
    }

    fn step(&mut self, event: WizardEvent) -> Result<bool, ValidationError> {
        let next = self.wizard.apply(event, &self.form)?;
        let moved = next != self.wizard;
        if moved {
            self.celebrating = false;
        }
        self.wizard = next;
        Ok(moved)
    }

    /// Post-feedback reset: celebrate, rewind to the first step and clear
    /// the form (anonymity re-applied, sliders back to their default).
    pub fn reset_after_feedback(&mut self) {
        self.celebrating = true;
        self.form.reset();
        // Reset is never gated.
        self.wizard = self
            .wizard
            .apply(WizardEvent::Reset, &self.form)
            .unwrap_or_else(|_| Wizard::new(self.wizard.total()));
    }

    pub fn mascot(&self) -> &'static str {
        if self.celebrating {
            MASCOT_CELEBRATION
        } else {
            MASCOT_MOODS
                .get(self.wizard.current())
                .copied()
                .unwrap_or(MASCOT_CELEBRATION)
        }
    }
}
