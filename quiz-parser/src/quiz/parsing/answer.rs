//! Answer letters
//!
//! Maps option letters to option indices and decides which of several answer lines counts.
use log::warn;
use serde::{Deserialize, Serialize};

/// Option letters in slot order.
pub const OPTION_LETTERS: [char; 5] = ['a', 'b', 'c', 'd', 'e'];

/// Translate an answer letter (any case) to its 1-based option index.
///
/// Letters outside `a..=e` fall back to `"1"`.
pub fn answer_for_letter(letter: char) -> &'static str {
    match letter.to_ascii_lowercase() {
        'a' => "1",
        'b' => "2",
        'c' => "3",
        'd' => "4",
        'e' => "5",
        other => {
            warn!("[Answer] Unrecognized answer letter {:?}, using option 1", other);
            "1"
        }
    }
}

/// The letter for a 1-based option index, if it is in `1..=5`.
pub fn letter_for_index(index: usize) -> Option<char> {
    index
        .checked_sub(1)
        .and_then(|i| OPTION_LETTERS.get(i))
        .copied()
}

/// Which answer line wins when a block declares more than one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerPrecedence {
    /// Every answer line overrides the previous one.
    #[default]
    LastMatch,
    /// The first answer line sticks.
    FirstMatch,
}

impl AnswerPrecedence {
    /// Combine the answer found so far with a newly scanned one.
    pub fn resolve(self, current: Option<&'static str>, candidate: &'static str) -> &'static str {
        match (self, current) {
            (AnswerPrecedence::FirstMatch, Some(kept)) => kept,
            _ => candidate,
        }
    }
}
