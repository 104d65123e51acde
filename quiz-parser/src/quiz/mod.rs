//! Quiz normalization pipeline
//!
//!     raw text ─▶ lexing::segment_blocks ─▶ parsing::parse_block ─▶ Vec<Question>
//!     html     ─▶ embedded::extract_questions ───────────────────▶ Vec<Question>
//!     Vec<Question> ─▶ serializing::serialize_questions ─▶ canonical text
//!
//! The plain text dialect accepted on input, and the one written on output:
//!
//!     1. Question text
//!     [optional continuation line]
//!     a) Option A
//!     b) Option B
//!     Correct option:-b
//!     ex: Explanation text

pub mod embedded;
pub mod lexing;
pub mod parsing;
pub mod question;
pub mod serializing;

pub use embedded::extract_questions;
pub use parsing::{parse_text, parse_text_with, AnswerPrecedence, ParseOptions};
pub use question::{Question, ScoreDefaults};
pub use serializing::{serialize_questions, serialize_questions_with, strip_markup, SerializeOptions};
