//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for reading quiz sources into questions and writing
//! questions back out.

use crate::error::FormatError;
use quiz_parser::quiz::Question;

/// Trait for quiz source formats
///
/// Implementors convert between a string representation and normalized questions. Formats can
/// support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct CsvFormat;
///
/// impl Format for CsvFormat {
///     fn name(&self) -> &str {
///         "csv"
///     }
///
///     fn file_extensions(&self) -> &[&str] {
///         &["csv"]
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<Vec<Question>, FormatError> {
///         // Read rows into questions
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "txt", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions claimed by this format, lowercase and without the dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → questions)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (questions → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into questions
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<Vec<Question>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize questions into source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _questions: &[Question]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
