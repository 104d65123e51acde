//! Extension dispatch tests

use quiz_babel::{FormatError, FormatRegistry};
use rstest::rstest;

const TEXT_QUIZ: &str = "1. Q\na) x\nb) y\nCorrect option:-a";
const HTML_QUIZ: &str =
    r#"<script>var quizData = {"questions": [{"text": "Q", "options": ["x", "y"], "correctIndex": 0}]};</script>"#;

#[rstest]
#[case::txt("quiz.txt", TEXT_QUIZ)]
#[case::txt_upper("QUIZ.TXT", TEXT_QUIZ)]
#[case::html("quiz.html", HTML_QUIZ)]
#[case::htm("quiz.htm", HTML_QUIZ)]
#[case::nested("exports/2024/quiz.Html", HTML_QUIZ)]
fn test_supported_extensions(#[case] name: &str, #[case] content: &str) {
    let questions = FormatRegistry::default().parse_file(name, content).unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].answer, "1");
}

#[rstest]
#[case::pdf("quiz.pdf", "pdf")]
#[case::docx("quiz.docx", "docx")]
#[case::none("quiz", "")]
#[case::dotfile(".txt", "")]
fn test_unsupported_extensions(#[case] name: &str, #[case] extension: &str) {
    assert_eq!(
        FormatRegistry::default().parse_file(name, TEXT_QUIZ).unwrap_err(),
        FormatError::UnsupportedFormat(extension.to_string())
    );
}

#[test]
fn test_extension_decides_not_content() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.parse_file("page.txt", HTML_QUIZ).unwrap_err(),
        FormatError::EmptyResult("page.txt".to_string())
    );
    assert_eq!(
        registry.parse_file("notes.html", TEXT_QUIZ).unwrap_err(),
        FormatError::EmptyResult("notes.html".to_string())
    );
}

#[test]
fn test_html_normalizes_to_text() {
    let registry = FormatRegistry::default();
    let questions = registry.parse_file("quiz.html", HTML_QUIZ).unwrap();
    assert_eq!(
        registry.serialize(&questions, "txt").unwrap(),
        "1. Q\na) x\nb) y\nCorrect option:-a\nex: No explanation provided.\n"
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        FormatError::UnsupportedFormat("pdf".to_string()).to_string(),
        "unsupported file format 'pdf'"
    );
    assert_eq!(
        FormatError::MissingSection("a.txt".to_string()).to_string(),
        "section name missing for a.txt"
    );
    assert_eq!(
        FormatError::EmptyResult("a.txt".to_string()).to_string(),
        "no questions found in a.txt"
    );
}
