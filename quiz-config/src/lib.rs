//! Shared configuration loader for the quiz toolchain.
//!
//! `defaults/quiz.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`QuizConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use quiz_parser::quiz::{AnswerPrecedence, ParseOptions, ScoreDefaults, SerializeOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/quiz.default.toml");

/// Top-level configuration consumed by quiz applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    pub parsing: ParsingConfig,
    pub serializing: SerializingConfig,
}

/// Mirrors the knobs exposed by the plain text parser.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    pub answer_precedence: AnswerPrecedence,
    pub break_marker: String,
    pub min_block_lines: usize,
    pub text_scores: ScoresConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoresConfig {
    pub correct: String,
    pub negative: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SerializingConfig {
    pub empty_explanation: String,
}

impl QuizConfig {
    /// Options for the plain text parser.
    pub fn parse_options(&self) -> ParseOptions {
        let parsing = &self.parsing;
        ParseOptions {
            answer_precedence: parsing.answer_precedence,
            break_marker: parsing.break_marker.clone(),
            min_block_lines: parsing.min_block_lines,
            scores: ScoreDefaults::new(
                parsing.text_scores.correct.clone(),
                parsing.text_scores.negative.clone(),
            ),
        }
    }

    /// Options for the canonical text writer.
    pub fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            empty_explanation: self.serializing.empty_explanation.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<QuizConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QuizConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parsing.answer_precedence, AnswerPrecedence::LastMatch);
        assert_eq!(config.parsing.min_block_lines, 3);
        assert_eq!(config.parsing.text_scores.correct, "3");
        assert_eq!(config.serializing.empty_explanation, "No explanation provided.");
    }

    #[test]
    fn defaults_match_the_built_in_options() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parse_options(), ParseOptions::default());
        assert_eq!(config.serialize_options(), SerializeOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parsing.answer_precedence", "first-match")
            .expect("override to apply")
            .set_override("parsing.text_scores.negative", "0")
            .expect("override to apply")
            .build()
            .expect("config to build");
        let options = config.parse_options();
        assert_eq!(options.answer_precedence, AnswerPrecedence::FirstMatch);
        assert_eq!(options.scores, ScoreDefaults::new("3", "0"));
    }

    #[test]
    fn rejects_unknown_precedence() {
        let result = Loader::new()
            .set_override("parsing.answer_precedence", "random")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn layers_user_files() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[serializing]\nempty_explanation = \"-\"").expect("write temp file");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.serialize_options().empty_explanation, "-");
        assert_eq!(config.parsing.break_marker, "<br>");
    }

    #[test]
    fn optional_files_may_be_absent() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.toml");
        assert!(Loader::new().with_optional_file(&missing).build().is_ok());
        assert!(Loader::new().with_file(&missing).build().is_err());
    }
}
