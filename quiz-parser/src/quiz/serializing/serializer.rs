//! Canonical text writer
//!
//! Renders questions in the one plain text dialect every quiz source is normalized to:
//!
//!     <n>. question
//!     a) option
//!     ...
//!     Correct option:-<letter>
//!     ex: explanation
//!
//! Questions are renumbered from 1 in emitted order and separated by one blank line. All text
//! goes through [strip_markup], so the output is lossy on formatting but not on content. Markup
//! that only appears after entity decoding (`&lt;b&gt;`) is escaped again on the way out, so
//! reading the output back strips to the same text.
use super::markup::{escape_markup, strip_markup};
use crate::quiz::parsing::{letter_for_index, OPTION_LETTERS};
use crate::quiz::question::{parse_answer_index, Question};

/// Written in place of an empty explanation.
pub const DEFAULT_EMPTY_EXPLANATION: &str = "No explanation provided.";

/// Options for the canonical text writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    pub empty_explanation: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            empty_explanation: DEFAULT_EMPTY_EXPLANATION.to_string(),
        }
    }
}

/// Serialize with the default options.
pub fn serialize_questions(questions: &[Question]) -> String {
    serialize_questions_with(questions, &SerializeOptions::default())
}

/// Serialize questions into canonical text. Every question ends with a newline.
pub fn serialize_questions_with(questions: &[Question], options: &SerializeOptions) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(i, question)| serialize_question(i + 1, question, options))
        .collect::<Vec<_>>()
        .join("\n")
}

fn serialize_question(number: usize, question: &Question, options: &SerializeOptions) -> String {
    let mut lines = vec![format!("{}. {}", number, plain(&question.question))];

    for (letter, option) in OPTION_LETTERS.iter().zip(question.options()) {
        if !option.is_empty() {
            lines.push(format!("{}) {}", letter, plain(option)));
        }
    }

    if !question.answer.is_empty() {
        lines.push(format!("Correct option:-{}", answer_letter(&question.answer)));
    }

    let explanation = plain(&question.solution_text);
    if explanation.is_empty() {
        lines.push(format!("ex: {}", options.empty_explanation));
    } else {
        lines.push(format!("ex: {}", explanation));
    }

    let mut block = lines.join("\n");
    block.push('\n');
    block
}

fn plain(text: &str) -> String {
    escape_markup(&strip_markup(text))
}

/// The letter for a stored answer; anything that is not an index in `1..=5` passes through.
fn answer_letter(answer: &str) -> String {
    parse_answer_index(answer)
        .and_then(letter_for_index)
        .map(String::from)
        .unwrap_or_else(|| answer.to_string())
}
