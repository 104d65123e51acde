//! Plain text format
//!
//! The one format that goes both ways. Parsing runs the block segmenter and the block state
//! machine from quiz-parser; serializing writes the canonical dialect. Both are tuned through
//! the option structs quiz-config produces.

use crate::error::FormatError;
use crate::format::Format;
use quiz_parser::quiz::{
    parse_text_with, serialize_questions_with, ParseOptions, Question, SerializeOptions,
};

/// Format implementation for plain text quizzes
#[derive(Debug, Clone, Default)]
pub struct TextFormat {
    parse_options: ParseOptions,
    serialize_options: SerializeOptions,
}

impl TextFormat {
    pub fn new(parse_options: ParseOptions, serialize_options: SerializeOptions) -> Self {
        Self {
            parse_options,
            serialize_options,
        }
    }
}

impl Format for TextFormat {
    fn name(&self) -> &str {
        "txt"
    }

    fn description(&self) -> &str {
        "Plain text quiz (numbered questions, lettered options)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Question>, FormatError> {
        Ok(parse_text_with(source, &self.parse_options))
    }

    fn serialize(&self, questions: &[Question]) -> Result<String, FormatError> {
        Ok(serialize_questions_with(questions, &self.serialize_options))
    }
}
