//! Likert rating controls: question table, parsing, and icon state.

use crate::t;

pub const QUESTION_COUNT: usize = 8;
pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;
pub const LIKERT_DEFAULT: u8 = 3;

/// Icon glyph per rating value, lowest first.
pub const LIKERT_ICONS: [&str; 5] = ["😣", "😟", "😐", "🙂", "😄"];

/// A survey question `q1..q8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(u8);

impl QuestionId {
    pub fn all() -> impl Iterator<Item = QuestionId> {
        (1..=QUESTION_COUNT as u8).map(QuestionId)
    }

    /// 1-based question number. Returns `None` outside `1..=8`.
    pub fn new(number: u8) -> Option<Self> {
        (1..=QUESTION_COUNT as u8).contains(&number).then_some(Self(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Form/wire field name, e.g. `q3`.
    pub fn field(self) -> String {
        format!("q{}", self.number())
    }

    pub fn prompt(self) -> String {
        match self.number() {
            1 => t!("question-1"),
            2 => t!("question-2"),
            3 => t!("question-3"),
            4 => t!("question-4"),
            5 => t!("question-5"),
            6 => t!("question-6"),
            7 => t!("question-7"),
            _ => t!("question-8"),
        }
    }
}

/// Questions shown on each wizard step; the first and last steps have none.
pub fn step_questions(step: usize) -> &'static [u8] {
    match step {
        1 => &[1, 2],
        2 => &[3, 4],
        3 => &[5, 6],
        4 => &[7, 8],
        _ => &[],
    }
}

/// Parse a slider's raw value. Only whole numbers within the scale count.
pub fn parse_rating(raw: &str) -> Option<u8> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|value| (LIKERT_MIN..=LIKERT_MAX).contains(value))
}

/// Which icon of a single Likert control is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikertVisual {
    active: Option<u8>,
}

impl LikertVisual {
    /// Project the slider's current raw value onto its icons. Call on mount
    /// and on every input event.
    pub fn sync(raw: &str) -> Self {
        Self {
            active: parse_rating(raw),
        }
    }

    pub fn active(&self) -> Option<u8> {
        self.active
    }

    pub fn is_active(&self, icon_value: u8) -> bool {
        self.active == Some(icon_value)
    }

    /// `(value, glyph, active)` for every icon on the scale.
    pub fn icons(&self) -> impl Iterator<Item = (u8, &'static str, bool)> + '_ {
        (LIKERT_MIN..=LIKERT_MAX)
            .zip(LIKERT_ICONS)
            .map(move |(value, glyph)| (value, glyph, self.is_active(value)))
    }
}
