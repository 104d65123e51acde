//! Embedded quiz data
//!
//!     HTML quiz pages built by other tools carry their questions as a JSON literal assigned to
//!     a script variable. Two shapes are recognized, each by its own grammar:
//!
//!         ArrayForm    const questions = [ {question, option_1..5, answer, ...}, ... ];
//!         ObjectForm   const quizData  = { questions: [ {text, options, correctIndex, explanation} ] };
//!
//!     The grammars are tried in that order and the first one that finds its variable and
//!     decodes it wins. A grammar that cannot find its variable, or finds it but cannot decode
//!     the literal, reports an [ExtractError] and the next grammar gets its turn. When every
//!     grammar fails the result is an empty list: a page without questions is not an error
//!     here, the caller decides what an empty quiz means.
//!
//!     The literal is decoded with a streaming JSON reader that stops at the end of the first
//!     complete value, so whatever script follows the assignment is never looked at. Literals
//!     that are valid JavaScript but not valid JSON (single quotes, trailing commas, bare keys)
//!     are reported as malformed.

pub mod array_form;
pub mod object_form;

pub use array_form::ArrayForm;
pub use object_form::ObjectForm;

use crate::quiz::question::Question;
use log::debug;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Why a grammar did not produce questions.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no `{0}` assignment found")]
    VariableNotFound(&'static str),
    #[error("malformed embedded data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One way of finding questions inside an HTML page.
pub trait EmbeddedGrammar: Send + Sync {
    /// The script variable this grammar looks for.
    fn variable(&self) -> &'static str;

    /// Extract every question the literal declares, retained or not.
    fn extract(&self, html: &str) -> Result<Vec<Question>, ExtractError>;
}

/// The grammars in the order they are tried.
pub fn default_grammars() -> [&'static dyn EmbeddedGrammar; 2] {
    [&ArrayForm, &ObjectForm]
}

/// Extract questions from an HTML page with the default grammars.
pub fn extract_questions(html: &str) -> Vec<Question> {
    extract_with(html, &default_grammars())
}

/// Try `grammars` in order; the first success wins.
///
/// Records that fail the retention predicate are dropped, the same as for plain text.
pub fn extract_with(html: &str, grammars: &[&dyn EmbeddedGrammar]) -> Vec<Question> {
    for grammar in grammars {
        match grammar.extract(html) {
            Ok(questions) => {
                let total = questions.len();
                let retained: Vec<Question> =
                    questions.into_iter().filter(Question::is_retainable).collect();
                debug!(
                    "[Embedded] `{}` yielded {} of {} questions",
                    grammar.variable(),
                    retained.len(),
                    total
                );
                return retained;
            }
            Err(err) => debug!("[Embedded] `{}` did not match: {}", grammar.variable(), err),
        }
    }
    Vec::new()
}

/// Decode the JSON literal introduced by the first match of `assignment`.
///
/// `assignment` must end with the literal's opening bracket; decoding restarts at that bracket.
pub(crate) fn decode_assignment<T: DeserializeOwned>(
    html: &str,
    assignment: &Regex,
    variable: &'static str,
) -> Result<T, ExtractError> {
    let found = assignment
        .find(html)
        .ok_or(ExtractError::VariableNotFound(variable))?;
    let literal = &html[found.end() - 1..];
    let mut stream = serde_json::Deserializer::from_str(literal).into_iter::<T>();
    match stream.next() {
        Some(decoded) => Ok(decoded?),
        None => Err(ExtractError::VariableNotFound(variable)),
    }
}

/// Render a JSON scalar the way it would print in the page: strings as is, numbers without a
/// trailing `.0`, null as empty.
pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) => f.to_string(),
            (None, None) => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// JavaScript truthiness, for deciding whether a source field counts as present.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
