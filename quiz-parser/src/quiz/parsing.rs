//! Parsing
//!
//!     Turns plain text quiz sources into questions. Segmentation and line classification come
//!     from [lexing](crate::quiz::lexing); this module runs the per-block state machine in
//!     [engine] and owns the knobs that control it.
//!
//!     Parsing never fails. Blocks that do not produce a question with text and at least one of
//!     the first two options are dropped, and an input with no such block yields an empty list.

pub mod answer;
pub mod engine;

pub use answer::{answer_for_letter, letter_for_index, AnswerPrecedence, OPTION_LETTERS};
pub use engine::parse_block;

use crate::quiz::lexing::segment_blocks;
use crate::quiz::question::{Question, ScoreDefaults};
use log::debug;

/// Inline line break used when several source lines merge into one field.
pub const DEFAULT_BREAK_MARKER: &str = "<br>";

/// Blocks with fewer non-blank lines than this are noise.
pub const DEFAULT_MIN_BLOCK_LINES: usize = 3;

/// Options for the plain text parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub answer_precedence: AnswerPrecedence,
    pub break_marker: String,
    pub min_block_lines: usize,
    pub scores: ScoreDefaults,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            answer_precedence: AnswerPrecedence::default(),
            break_marker: DEFAULT_BREAK_MARKER.to_string(),
            min_block_lines: DEFAULT_MIN_BLOCK_LINES,
            scores: ScoreDefaults::plain_text(),
        }
    }
}

/// Parse a plain text document with the default options.
pub fn parse_text(source: &str) -> Vec<Question> {
    parse_text_with(source, &ParseOptions::default())
}

/// Parse a plain text document.
pub fn parse_text_with(source: &str, options: &ParseOptions) -> Vec<Question> {
    let questions: Vec<Question> = segment_blocks(source, options.min_block_lines)
        .filter_map(|block| parse_block(&block, options))
        .collect();
    debug!("[Parse] Retained {} questions", questions.len());
    questions
}
