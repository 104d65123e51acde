//! Quiz composition
//!
//!     A topic quiz is one file. A full quiz is several files, each standing for one section,
//!     concatenated in the order given. Both end up as a [QuizPayload], the record handed to
//!     whatever stores quizzes.
//!
//!     Composition is where a section label gets stamped on questions, so it is also where a
//!     missing label is caught. Labels are checked for every file before any file is parsed.

use crate::error::FormatError;
use crate::registry::FormatRegistry;
use log::debug;
use quiz_parser::quiz::Question;
use serde::{Deserialize, Serialize};

/// Which kind of quiz a payload holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizKind {
    Topic,
    Full,
}

/// Normalized questions ready for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizPayload {
    pub questions: Vec<Question>,
    pub quiz_type: QuizKind,
    /// Section labels in file order. Empty, and left out of the JSON, for topic quizzes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<String>,
}

/// One file of a full quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
    pub section: String,
}

impl SourceFile {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            section: section.into(),
        }
    }
}

/// Build a topic quiz from a single file.
pub fn compose_topic(
    registry: &FormatRegistry,
    name: &str,
    content: &str,
) -> Result<QuizPayload, FormatError> {
    let questions = registry.parse_file(name, content)?;
    Ok(QuizPayload {
        questions,
        quiz_type: QuizKind::Topic,
        sections: Vec::new(),
    })
}

/// Build a full quiz, one section per file.
///
/// Section labels are trimmed. A file that yields no questions contributes nothing; only a quiz
/// with no questions at all is an EmptyResult.
pub fn compose_full(
    registry: &FormatRegistry,
    files: &[SourceFile],
) -> Result<QuizPayload, FormatError> {
    if let Some(unlabelled) = files.iter().find(|file| file.section.trim().is_empty()) {
        return Err(FormatError::MissingSection(unlabelled.name.clone()));
    }

    let mut questions = Vec::new();
    let mut sections = Vec::with_capacity(files.len());
    for file in files {
        let section = file.section.trim();
        let parsed = match registry.parse_file(&file.name, &file.content) {
            Ok(parsed) => parsed,
            Err(FormatError::EmptyResult(_)) => Vec::new(),
            Err(err) => return Err(err),
        };
        debug!(
            "[Compose] section {:?} from {}: {} questions",
            section,
            file.name,
            parsed.len()
        );
        questions.extend(assign_section(parsed, section));
        sections.push(section.to_string());
    }

    if questions.is_empty() {
        let names: Vec<&str> = files.iter().map(|file| file.name.as_str()).collect();
        return Err(FormatError::EmptyResult(names.join(", ")));
    }
    Ok(QuizPayload {
        questions,
        quiz_type: QuizKind::Full,
        sections,
    })
}

/// Stamp `section` on every question.
pub fn assign_section(questions: Vec<Question>, section: &str) -> Vec<Question> {
    questions
        .into_iter()
        .map(|mut question| {
            question.section = section.to_string();
            question
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATHS: &str = "1. 2+2?\na) 3\nb) 4\nCorrect option:-b\n\n2. 3+3?\na) 6\nb) 7\nCorrect option:-a";
    const SCIENCE: &str = r#"<script>const quizData = {"questions": [
        {"text": "H2O?", "options": ["Water", "Salt"], "correctIndex": 0}
    ]};</script>"#;

    #[test]
    fn test_topic_quiz() {
        let payload = compose_topic(&FormatRegistry::default(), "maths.txt", MATHS).unwrap();
        assert_eq!(payload.quiz_type, QuizKind::Topic);
        assert_eq!(payload.questions.len(), 2);
        assert!(payload.sections.is_empty());
        assert!(payload.questions.iter().all(|q| q.section.is_empty()));
    }

    #[test]
    fn test_topic_quiz_empty() {
        assert_eq!(
            compose_topic(&FormatRegistry::default(), "notes.txt", "just some notes").unwrap_err(),
            FormatError::EmptyResult("notes.txt".to_string())
        );
    }

    #[test]
    fn test_full_quiz_assigns_sections_in_file_order() {
        let files = vec![
            SourceFile::new("maths.txt", MATHS, "Maths"),
            SourceFile::new("science.html", SCIENCE, " Science "),
        ];
        let payload = compose_full(&FormatRegistry::default(), &files).unwrap();

        assert_eq!(payload.quiz_type, QuizKind::Full);
        assert_eq!(payload.sections, vec!["Maths", "Science"]);
        let labelled: Vec<(&str, &str)> = payload
            .questions
            .iter()
            .map(|q| (q.question.as_str(), q.section.as_str()))
            .collect();
        assert_eq!(
            labelled,
            vec![("2+2?", "Maths"), ("3+3?", "Maths"), ("H2O?", "Science")]
        );
    }

    #[test]
    fn test_full_quiz_missing_section() {
        let files = vec![
            SourceFile::new("maths.txt", MATHS, "Maths"),
            SourceFile::new("science.html", SCIENCE, "  "),
        ];
        assert_eq!(
            compose_full(&FormatRegistry::default(), &files).unwrap_err(),
            FormatError::MissingSection("science.html".to_string())
        );
    }

    #[test]
    fn test_full_quiz_unsupported_file() {
        let files = vec![
            SourceFile::new("maths.txt", MATHS, "Maths"),
            SourceFile::new("science.pdf", "", "Science"),
        ];
        assert_eq!(
            compose_full(&FormatRegistry::default(), &files).unwrap_err(),
            FormatError::UnsupportedFormat("pdf".to_string())
        );
    }

    #[test]
    fn test_full_quiz_tolerates_an_empty_section() {
        let files = vec![
            SourceFile::new("maths.txt", MATHS, "Maths"),
            SourceFile::new("blank.txt", "", "Blank"),
        ];
        let payload = compose_full(&FormatRegistry::default(), &files).unwrap();
        assert_eq!(payload.questions.len(), 2);
        assert_eq!(payload.sections, vec!["Maths", "Blank"]);
    }

    #[test]
    fn test_full_quiz_empty() {
        let files = vec![
            SourceFile::new("a.txt", "", "A"),
            SourceFile::new("b.html", "<p></p>", "B"),
        ];
        assert_eq!(
            compose_full(&FormatRegistry::default(), &files).unwrap_err(),
            FormatError::EmptyResult("a.txt, b.html".to_string())
        );
        assert!(matches!(
            compose_full(&FormatRegistry::default(), &[]),
            Err(FormatError::EmptyResult(_))
        ));
    }
}
