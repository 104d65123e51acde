//! `const quizData = { questions: [...] }`
use super::{decode_assignment, EmbeddedGrammar, ExtractError};
use crate::quiz::question::{Question, ScoreDefaults, OPTION_SLOTS};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:const|let|var)\s+quizData\s*=\s*\{").unwrap());

#[derive(Debug, Deserialize)]
struct QuizData {
    #[serde(default)]
    questions: Vec<QuizDataQuestion>,
}

#[derive(Debug, Deserialize)]
struct QuizDataQuestion {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    options: Vec<String>,
    /// Zero-based.
    #[serde(default, rename = "correctIndex")]
    correct_index: Option<i64>,
    #[serde(default)]
    explanation: Option<String>,
}

/// Grammar for the object form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectForm;

impl EmbeddedGrammar for ObjectForm {
    fn variable(&self) -> &'static str {
        "quizData"
    }

    fn extract(&self, html: &str) -> Result<Vec<Question>, ExtractError> {
        let data: QuizData = decode_assignment(html, &ASSIGNMENT, self.variable())?;
        let scores = ScoreDefaults::quiz_data_embed();
        Ok(data
            .questions
            .into_iter()
            .map(|source| to_question(source, &scores))
            .collect())
    }
}

fn to_question(source: QuizDataQuestion, scores: &ScoreDefaults) -> Question {
    let mut question = Question::with_scores(scores);
    question.question = source.text.unwrap_or_default();
    question.solution_text = source.explanation.unwrap_or_default();
    if source.options.len() > OPTION_SLOTS {
        warn!(
            "[Embedded] Ignoring {} options beyond the fifth for {:?}",
            source.options.len() - OPTION_SLOTS,
            question.question
        );
    }
    for (slot, text) in source.options.into_iter().take(OPTION_SLOTS).enumerate() {
        if let Some(option) = question.option_mut(slot + 1) {
            *option = text;
        }
    }
    question.answer = match source.correct_index {
        Some(index @ 0..=4) => (index + 1).to_string(),
        Some(index) => {
            warn!(
                "[Embedded] Dropping out-of-range correctIndex {} for {:?}",
                index, question.question
            );
            String::new()
        }
        None => String::new(),
    };
    question
}
