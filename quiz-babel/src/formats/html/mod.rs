//! HTML format
//!
//! Quiz pages exported by other tools. Only the embedded quiz data is read; the visible markup
//! of the page is ignored. Serializing back to HTML is not supported.

use crate::error::FormatError;
use crate::format::Format;
use quiz_parser::quiz::{extract_questions, Question};

/// Format implementation for HTML pages with embedded quiz data
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML page with embedded quiz data (questions / quizData)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Question>, FormatError> {
        Ok(extract_questions(source))
    }
}
