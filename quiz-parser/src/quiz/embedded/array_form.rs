//! `const questions = [...]`
//!
//! Elements already use the canonical field names, so they map field for field. Scores come
//! from `correct_score`/`negative_score`, or from `positive_marks`/`negative_marks`, and default
//! to the array-embed scores when every candidate is falsy.
use super::{decode_assignment, is_truthy, value_to_text, EmbeddedGrammar, ExtractError};
use crate::quiz::question::{parse_answer_index, Question, ScoreDefaults, OPTION_SLOTS};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:const|let|var)\s+questions\s*=\s*\[").unwrap());

type Element = Map<String, Value>;

/// Grammar for the array form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayForm;

impl EmbeddedGrammar for ArrayForm {
    fn variable(&self) -> &'static str {
        "questions"
    }

    fn extract(&self, html: &str) -> Result<Vec<Question>, ExtractError> {
        let elements: Vec<Element> = decode_assignment(html, &ASSIGNMENT, self.variable())?;
        let defaults = ScoreDefaults::array_embed();
        Ok(elements
            .iter()
            .map(|element| to_question(element, &defaults))
            .collect())
    }
}

fn text(element: &Element, field: &str) -> String {
    element.get(field).map(value_to_text).unwrap_or_default()
}

/// The first truthy field among `fields`, stringified, or `fallback`.
fn score(element: &Element, fields: &[&str], fallback: &str) -> String {
    fields
        .iter()
        .filter_map(|field| element.get(*field))
        .find(|value| is_truthy(value))
        .map(value_to_text)
        .unwrap_or_else(|| fallback.to_string())
}

fn to_question(element: &Element, defaults: &ScoreDefaults) -> Question {
    let mut question = Question {
        question: text(element, "question"),
        answer: text(element, "answer"),
        solution_text: text(element, "solution_text"),
        question_image: text(element, "question_image"),
        solution_image: text(element, "solution_image"),
        correct_score: score(element, &["correct_score", "positive_marks"], &defaults.correct),
        negative_score: score(element, &["negative_score", "negative_marks"], &defaults.negative),
        section: text(element, "section"),
        ..Question::default()
    };
    for slot in 1..=OPTION_SLOTS {
        if let Some(option) = question.option_mut(slot) {
            *option = text(element, &format!("option_{slot}"));
        }
        if let Some(image) = question.option_image_mut(slot) {
            *image = text(element, &format!("option_image_{slot}"));
        }
    }
    if !question.answer.is_empty() && parse_answer_index(&question.answer).is_none() {
        warn!(
            "[Embedded] Dropping out-of-range answer {:?} for {:?}",
            question.answer, question.question
        );
        question.answer.clear();
    }
    question
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<Question> {
        ArrayForm.extract(html).unwrap()
    }

    #[test]
    fn test_maps_fields_directly() {
        let html = r#"<script>var questions = [{
            "question": "Capital?", "option_1": "Paris", "option_2": "Rome", "option_3": "Oslo",
            "answer": "1", "solution_text": "It is Paris", "question_image": "data:image/png;x",
            "option_image_2": "img2", "section": "GK"
        }];</script>"#;
        let q = &extract(html)[0];
        assert_eq!(q.question, "Capital?");
        assert_eq!(q.options(), ["Paris", "Rome", "Oslo", "", ""]);
        assert_eq!(q.answer, "1");
        assert_eq!(q.solution_text, "It is Paris");
        assert_eq!(q.question_image, "data:image/png;x");
        assert_eq!(q.option_image_2, "img2");
        assert_eq!(q.section, "GK");
    }

    #[test]
    fn test_numeric_answer_is_stringified() {
        let q = &extract(r#"let questions=[{"question":"Q","option_1":"a","answer":3}]"#)[0];
        assert_eq!(q.answer, "3");
    }

    #[test]
    fn test_out_of_range_answer_is_dropped() {
        let q = &extract(r#"const questions = [{"question":"Q","option_1":"a","answer":9}]"#)[0];
        assert_eq!(q.answer, "");
    }

    #[test]
    fn test_scores_default_when_absent_or_falsy() {
        let html = r#"const questions = [
            {"question": "A", "option_1": "x"},
            {"question": "B", "option_1": "x", "correct_score": "", "negative_score": 0}
        ];"#;
        for q in extract(html) {
            assert_eq!(q.correct_score, "2.00");
            assert_eq!(q.negative_score, "0.50");
        }
    }

    #[test]
    fn test_scores_inherit_marks() {
        let html = r#"const questions = [
            {"question": "A", "option_1": "x", "positive_marks": 4, "negative_marks": "1.5"},
            {"question": "B", "option_1": "x", "correct_score": "5", "positive_marks": 4}
        ];"#;
        let questions = extract(html);
        assert_eq!(questions[0].correct_score, "4");
        assert_eq!(questions[0].negative_score, "1.5");
        assert_eq!(questions[1].correct_score, "5");
        assert_eq!(questions[1].negative_score, "0.50");
    }

    #[test]
    fn test_missing_variable() {
        let err = ArrayForm.extract("const quizData = {}").unwrap_err();
        assert!(matches!(err, ExtractError::VariableNotFound("questions")));
    }

    #[test]
    fn test_other_assignments_do_not_match() {
        let err = ArrayForm
            .extract("const questions = quizData.questions;")
            .unwrap_err();
        assert!(matches!(err, ExtractError::VariableNotFound(_)));
    }

    #[test]
    fn test_malformed_literal() {
        let err = ArrayForm
            .extract("const questions = [{'question': 'x'}];")
            .unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }
}
