//! Format registry for format discovery and dispatch
//!
//! This module provides a centralized registry for all available formats. Formats are
//! registered and retrieved by name, or looked up by the extension of the file being read.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{HtmlFormat, TextFormat};
use log::debug;
use quiz_parser::quiz::{ParseOptions, Question, SerializeOptions};
use std::collections::HashMap;
use std::path::Path;

/// Registry of quiz formats
///
/// Provides a centralized registry for all available formats.
/// Formats can be registered and retrieved by name or by file extension.
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
///
/// let questions = registry.parse_file("week1.txt", &contents)?;
/// let text = registry.serialize(&questions, "txt")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Find the format claiming an extension (without the dot, any case)
    pub fn for_extension(&self, extension: &str) -> Result<&dyn Format, FormatError> {
        let wanted = extension.to_ascii_lowercase();
        self.formats
            .values()
            .map(|f| f.as_ref())
            .find(|f| f.file_extensions().contains(&wanted.as_str()))
            .ok_or(FormatError::UnsupportedFormat(wanted))
    }

    /// Find the format for a file name or path by its extension
    pub fn for_path(&self, path: &str) -> Result<&dyn Format, FormatError> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        self.for_extension(extension)
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Vec<Question>, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support parsing",
                format
            )));
        }
        fmt.parse(source)
    }

    /// Serialize questions using the specified format
    pub fn serialize(&self, questions: &[Question], format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(questions)
    }

    /// Parse a file's contents with the format its name selects
    ///
    /// Fails with UnsupportedFormat before anything is parsed, and with EmptyResult when no
    /// question survives.
    pub fn parse_file(&self, name: &str, content: &str) -> Result<Vec<Question>, FormatError> {
        let fmt = self.for_path(name)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support parsing",
                fmt.name()
            )));
        }
        let questions = fmt.parse(content)?;
        debug!(
            "[Dispatch] {} read as {}: {} questions",
            name,
            fmt.name(),
            questions.len()
        );
        if questions.is_empty() {
            return Err(FormatError::EmptyResult(name.to_string()));
        }
        Ok(questions)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        Self::with_options(ParseOptions::default(), SerializeOptions::default())
    }

    /// Create a registry with default formats, tuning the text format
    pub fn with_options(parse_options: ParseOptions, serialize_options: SerializeOptions) -> Self {
        let mut registry = Self::new();

        registry.register(TextFormat::new(parse_options, serialize_options));
        registry.register(HtmlFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
