//! Step machine for the survey wizard.
//!
//! States are the panel indices `0..total`; `Advance` and `Retreat` move by
//! one and clamp at both ends. Only the first step is validated before
//! advancing. Submission happens out of band from the last step.

use crate::t;

use super::form::SurveyForm;

/// Info, positive, negative, social, self-esteem, open-ended.
pub const STEP_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Advance,
    Retreat,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingClassName,
    MissingGender,
}

impl ValidationError {
    pub fn message(self) -> String {
        match self {
            ValidationError::MissingClassName => t!("validation-class-name"),
            ValidationError::MissingGender => t!("validation-gender"),
        }
    }
}

/// Heading of each panel.
pub fn step_title(step: usize) -> String {
    match step {
        0 => t!("step-info-title"),
        1 => t!("step-positive-title"),
        2 => t!("step-negative-title"),
        3 => t!("step-social-title"),
        4 => t!("step-self-title"),
        _ => t!("step-share-title"),
    }
}

/// Gate for leaving `step`. Step 0 needs a class name and a gender; every
/// other step passes.
pub fn validate_step(step: usize, form: &SurveyForm) -> Result<(), ValidationError> {
    if step != 0 {
        return Ok(());
    }
    if form.class_name.trim().is_empty() {
        return Err(ValidationError::MissingClassName);
    }
    if !form.has_gender() {
        return Err(ValidationError::MissingGender);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    current: usize,
    total: usize,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(STEP_COUNT)
    }
}

impl Wizard {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total
    }

    /// Width of the progress bar fill, `(current + 1) / total`.
    pub fn progress_percent(&self) -> f64 {
        (self.current + 1) as f64 / self.total as f64 * 100.0
    }

    /// Pure transition. A failed validation leaves the state untouched and
    /// reports why.
    pub fn apply(self, event: WizardEvent, form: &SurveyForm) -> Result<Self, ValidationError> {
        let current = match event {
            WizardEvent::Advance => {
                validate_step(self.current, form)?;
                if self.is_last() {
                    self.current
                } else {
                    self.current + 1
                }
            }
            WizardEvent::Retreat => self.current.saturating_sub(1),
            WizardEvent::Reset => 0,
        };
        Ok(Self { current, ..self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SurveyForm {
        let mut form = SurveyForm::default();
        form.class_name = "12C3".into();
        form.gender = Some("Nam".into());
        form
    }

    #[test]
    fn advance_from_first_step_needs_class_name() {
        let mut form = valid_form();
        form.class_name = "   ".into();
        let wizard = Wizard::default();
        assert_eq!(
            wizard.apply(WizardEvent::Advance, &form),
            Err(ValidationError::MissingClassName)
        );
        assert_eq!(wizard.current(), 0);
    }

    #[test]
    fn advance_from_first_step_needs_gender() {
        let mut form = valid_form();
        form.gender = None;
        assert_eq!(
            Wizard::default().apply(WizardEvent::Advance, &form),
            Err(ValidationError::MissingGender)
        );
    }

    #[test]
    fn valid_first_step_moves_to_second() {
        let next = Wizard::default()
            .apply(WizardEvent::Advance, &valid_form())
            .unwrap();
        assert_eq!(next.current(), 1);
    }

    #[test]
    fn later_steps_are_not_gated() {
        let mut wizard = Wizard::default()
            .apply(WizardEvent::Advance, &valid_form())
            .unwrap();
        let empty = SurveyForm::default();
        for expected in 2..STEP_COUNT {
            wizard = wizard.apply(WizardEvent::Advance, &empty).unwrap();
            assert_eq!(wizard.current(), expected);
        }
        assert!(wizard.is_last());
    }

    #[test]
    fn any_walk_stays_in_bounds_and_moves_by_one() {
        let form = valid_form();
        // Deterministic pseudo-random walk over advance/retreat.
        let mut seed = 0x2545_f491_u32;
        let mut wizard = Wizard::default();
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let event = if seed % 2 == 0 {
                WizardEvent::Advance
            } else {
                WizardEvent::Retreat
            };
            let before = wizard.current();
            wizard = wizard.apply(event, &form).unwrap();
            let after = wizard.current();
            assert!(after < STEP_COUNT);
            let delta = after as isize - before as isize;
            match event {
                WizardEvent::Advance if before + 1 == STEP_COUNT => assert_eq!(delta, 0),
                WizardEvent::Advance => assert_eq!(delta, 1),
                WizardEvent::Retreat if before == 0 => assert_eq!(delta, 0),
                WizardEvent::Retreat => assert_eq!(delta, -1),
                WizardEvent::Reset => unreachable!(),
            }
        }
    }

    #[test]
    fn retreat_at_start_is_a_no_op() {
        let wizard = Wizard::default();
        assert_eq!(
            wizard.apply(WizardEvent::Retreat, &SurveyForm::default()),
            Ok(wizard)
        );
    }

    #[test]
    fn progress_tracks_position() {
        let wizard = Wizard::new(4);
        assert_eq!(wizard.progress_percent(), 25.0);
        let wizard = wizard.apply(WizardEvent::Advance, &valid_form()).unwrap();
        assert_eq!(wizard.progress_percent(), 50.0);
    }
}
