//! Form values for the survey and their mapping onto the wire record.

use api::{model::ANONYMOUS_FLAG, SurveyRecord, ANONYMOUS_NAME};
use thiserror::Error;

use crate::t;

use super::likert::{parse_rating, QuestionId, LIKERT_DEFAULT, QUESTION_COUNT};

/// Values offered by the gender radio group.
pub const GENDER_OPTIONS: [&str; 3] = ["Nam", "Nữ", "Khác"];

/// Localized label for a gender option; the option itself is the wire value.
pub fn gender_label(option: &str) -> String {
    match option {
        "Nam" => t!("gender-male"),
        "Nữ" => t!("gender-female"),
        _ => t!("gender-other"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{field} has an invalid rating {raw:?}")]
    InvalidRating { field: String, raw: String },
    #[error("no gender selected")]
    MissingGender,
}

/// Raw control values, as the inputs hold them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyForm {
    pub class_name: String,
    pub gender: Option<String>,
    full_name: String,
    anonymous: bool,
    ratings: [String; QUESTION_COUNT],
    pub open_ended: String,
}

impl Default for SurveyForm {
    fn default() -> Self {
        let mut form = Self {
            class_name: String::new(),
            gender: None,
            full_name: String::new(),
            anonymous: false,
            ratings: std::array::from_fn(|_| LIKERT_DEFAULT.to_string()),
            open_ended: String::new(),
        };
        form.set_anonymous(false);
        form
    }
}

impl SurveyForm {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Edits are ignored while the name is locked to the anonymous value.
    pub fn set_full_name(&mut self, value: impl Into<String>) {
        if !self.anonymous {
            self.full_name = value.into();
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    /// Locked (disabled, greyed) while anonymous.
    pub fn full_name_locked(&self) -> bool {
        self.anonymous
    }

    /// Project the anonymity checkbox onto the full-name field.
    pub fn set_anonymous(&mut self, flag: bool) {
        self.anonymous = flag;
        if flag {
            self.full_name = ANONYMOUS_NAME.to_string();
        } else {
            self.full_name.clear();
        }
    }

    pub fn rating_raw(&self, question: QuestionId) -> &str {
        &self.ratings[question.index()]
    }

    pub fn set_rating(&mut self, question: QuestionId, raw: impl Into<String>) {
        self.ratings[question.index()] = raw.into();
    }

    pub fn has_gender(&self) -> bool {
        self.gender
            .as_deref()
            .map(|g| !g.trim().is_empty())
            .unwrap_or(false)
    }

    /// Back to defaults: empty text, no gender, not anonymous, every slider at 3.
    pub fn reset(&mut self) {
        *self = Self::default();
        self.set_anonymous(self.anonymous);
    }

    /// Build the record sent to the backend. Ratings are parsed here; text
    /// passes through unchanged.
    pub fn to_record(&self) -> Result<SurveyRecord, RecordError> {
        let gender = self
            .gender
            .clone()
            .filter(|g| !g.trim().is_empty())
            .ok_or(RecordError::MissingGender)?;

        let mut scores = [0u8; QUESTION_COUNT];
        for question in QuestionId::all() {
            let raw = self.rating_raw(question);
            scores[question.index()] =
                parse_rating(raw).ok_or_else(|| RecordError::InvalidRating {
                    field: question.field(),
                    raw: raw.to_string(),
                })?;
        }
        let [q1, q2, q3, q4, q5, q6, q7, q8] = scores;

        Ok(SurveyRecord {
            full_name: self.full_name.clone(),
            anonymous: self.anonymous.then(|| ANONYMOUS_FLAG.to_string()),
            class_name: self.class_name.clone(),
            gender,
            q1,
            q2,
            q3,
            q4,
            q5,
            q6,
            q7,
            q8,
            open_ended: self.open_ended.clone(),
        })
    }
}
