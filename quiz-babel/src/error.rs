//! Errors surfaced by format dispatch and composition

use thiserror::Error;

/// Everything that can go wrong between a file name and a list of questions.
///
/// Malformed blocks and undecodable embedded data never show up here: the parsers recover from
/// those locally and the damage surfaces, if at all, as an [FormatError::EmptyResult].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No registered format claims the file's extension.
    #[error("unsupported file format '{0}'")]
    UnsupportedFormat(String),

    /// The source parsed, but no question survived.
    #[error("no questions found in {0}")]
    EmptyResult(String),

    /// A file in a multi-section quiz came without a section name.
    #[error("section name missing for {0}")]
    MissingSection(String),

    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),
}
