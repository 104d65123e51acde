//! The canonical question record
//!
//!     Every parsing path produces [Question]. Field names are part of the public schema that
//!     downstream renderers consume, so they serialize exactly as written here. Rich text fields
//!     may carry inline markup; multi-line source text is joined with a break marker.
//!
//!     Options and option images occupy five fixed slots. Unused slots are empty strings, never
//!     absent. Scores are decimal strings whose defaults depend on the dialect the question came
//!     from, see [ScoreDefaults].

use serde::{Deserialize, Serialize};

/// Number of option slots in the canonical schema.
pub const OPTION_SLOTS: usize = 5;

/// Correct/negative score pair applied when a dialect does not supply its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDefaults {
    pub correct: String,
    pub negative: String,
}

impl ScoreDefaults {
    pub fn new(correct: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            correct: correct.into(),
            negative: negative.into(),
        }
    }

    /// Plain text dialect.
    pub fn plain_text() -> Self {
        Self::new("3", "1")
    }

    /// `const questions = [...]` embeds, used when the element carries no marks.
    pub fn array_embed() -> Self {
        Self::new("2.00", "0.50")
    }

    /// `const quizData = {...}` embeds. Fixed, the source has no notion of marks.
    pub fn quiz_data_embed() -> Self {
        Self::new("1", "0.25")
    }
}

impl Default for ScoreDefaults {
    fn default() -> Self {
        Self::plain_text()
    }
}

/// A normalized question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    pub question: String,
    pub option_1: String,
    pub option_2: String,
    pub option_3: String,
    pub option_4: String,
    pub option_5: String,
    /// 1-based option index as a decimal string, empty when undetermined.
    pub answer: String,
    pub solution_text: String,
    pub question_image: String,
    pub option_image_1: String,
    pub option_image_2: String,
    pub option_image_3: String,
    pub option_image_4: String,
    pub option_image_5: String,
    pub solution_image: String,
    pub correct_score: String,
    pub negative_score: String,
    pub section: String,
}

impl Question {
    /// An empty record carrying the given score defaults.
    pub fn with_scores(scores: &ScoreDefaults) -> Self {
        Self {
            correct_score: scores.correct.clone(),
            negative_score: scores.negative.clone(),
            ..Self::default()
        }
    }

    /// Option texts in slot order.
    pub fn options(&self) -> [&str; OPTION_SLOTS] {
        [
            &self.option_1,
            &self.option_2,
            &self.option_3,
            &self.option_4,
            &self.option_5,
        ]
    }

    /// Mutable access to a 1-based option slot. `None` outside `1..=5`.
    pub fn option_mut(&mut self, slot: usize) -> Option<&mut String> {
        match slot {
            1 => Some(&mut self.option_1),
            2 => Some(&mut self.option_2),
            3 => Some(&mut self.option_3),
            4 => Some(&mut self.option_4),
            5 => Some(&mut self.option_5),
            _ => None,
        }
    }

    /// Mutable access to a 1-based option image slot. `None` outside `1..=5`.
    pub fn option_image_mut(&mut self, slot: usize) -> Option<&mut String> {
        match slot {
            1 => Some(&mut self.option_image_1),
            2 => Some(&mut self.option_image_2),
            3 => Some(&mut self.option_image_3),
            4 => Some(&mut self.option_image_4),
            5 => Some(&mut self.option_image_5),
            _ => None,
        }
    }

    /// The 1-based answer index, if the stored answer is one of `"1"..="5"`.
    pub fn answer_index(&self) -> Option<usize> {
        parse_answer_index(&self.answer)
    }

    /// Retention predicate shared by every parsing path: a question body and at least one of
    /// the first two options.
    pub fn is_retainable(&self) -> bool {
        !self.question.is_empty() && !(self.option_1.is_empty() && self.option_2.is_empty())
    }
}

/// Parses a 1-based answer index, accepting only a single digit in `1..=5`.
pub fn parse_answer_index(answer: &str) -> Option<usize> {
    match answer.as_bytes() {
        [digit @ b'1'..=b'5'] => Some((digit - b'0') as usize),
        _ => None,
    }
}
