//! Line Classification
//!
//! Determines what a single trimmed line of a block is. The parser state machine decides what
//! to do with the line; this module only says what it looks like.
//!
//! Classification order matters. A line is checked as an explanation marker first, then as an
//! answer marker, then as an option marker. `ex:`, `Answer` and `Correct` can never look like an
//! option marker, so the order only guards against future patterns overlapping.
use once_cell::sync::Lazy;
use regex::Regex;

/// `1. ` or `Q.1 ` numbering in front of a question.
static QUESTION_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d+\.\s*|Q\.\d+\s+)").unwrap());

/// `a)`, `(a)` or `a.` in front of an option, any case.
static OPTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:\(([a-e])\)|([a-e])[).])\s*(.*)$").unwrap());

static EXPLANATION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^ex:\s*(.*)$").unwrap());

/// Any line that opens with `Correct` (glued or not, as in `CorrectOption:-b`) or the word
/// `Answer`.
static ANSWER_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:correct|answer\b)").unwrap());

/// `Correct:`, `Correct-`, `Correct option:-` ...
static CORRECT_DIALECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^correct\s*(?:option)?\s*[:-]").unwrap());

/// `Answer:` or `Answer-` ...
static ANSWER_DIALECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^answer\s*[:-]").unwrap());

static SEPARATED_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[:-]\s*([a-e])").unwrap());

static PARENTHESIZED_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\(([a-e])\)").unwrap());

/// What a line looks like.
///
/// There is no separate kind for question headers, question continuations or noise: those are
/// all [LineKind::Text], and which of them a text line is depends on where the parser is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// An option marker. `letter` is lowercase, `text` is the rest of the line.
    Option { letter: char, text: &'a str },
    /// A line opening with `Correct` or `Answer`. `letter` is set only when the line matches
    /// one of the accepted answer dialects and a letter could be captured from it.
    Answer { letter: Option<char> },
    /// An `ex:` line, `text` is what follows the marker.
    Explanation { text: &'a str },
    Text,
}

impl LineKind<'_> {
    /// Answer and explanation lines end the option list and are never continuations.
    pub fn is_terminator(&self) -> bool {
        matches!(self, LineKind::Answer { .. } | LineKind::Explanation { .. })
    }
}

/// A line together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub source: &'a str,
    pub kind: LineKind<'a>,
}

/// Classify a single trimmed line.
pub fn classify_line(line: &str) -> ClassifiedLine<'_> {
    ClassifiedLine {
        source: line,
        kind: line_kind(line),
    }
}

fn line_kind(line: &str) -> LineKind<'_> {
    if let Some(caps) = EXPLANATION_MARKER.captures(line) {
        let text = caps.get(1).map_or("", |m| m.as_str());
        return LineKind::Explanation { text };
    }
    if ANSWER_WORD.is_match(line) {
        return LineKind::Answer {
            letter: answer_letter(line),
        };
    }
    if let Some(caps) = OPTION_MARKER.captures(line) {
        let letter = caps
            .get(1)
            .or_else(|| caps.get(2))
            .and_then(|m| m.as_str().chars().next())
            .map(|c| c.to_ascii_lowercase());
        if let Some(letter) = letter {
            let text = caps.get(3).map_or("", |m| m.as_str());
            return LineKind::Option { letter, text };
        }
    }
    LineKind::Text
}

/// Capture the answer letter from a line in one of the accepted dialects.
///
/// - `Correct[ option][:-]` followed somewhere by a separator and a letter.
/// - `Answer[:-]` followed by a parenthesized letter, or failing that, a separator and a letter.
pub fn answer_letter(line: &str) -> Option<char> {
    let caps = if CORRECT_DIALECT.is_match(line) {
        SEPARATED_LETTER.captures(line)
    } else if ANSWER_DIALECT.is_match(line) {
        PARENTHESIZED_LETTER
            .captures(line)
            .or_else(|| SEPARATED_LETTER.captures(line))
    } else {
        None
    }?;
    caps.get(1)
        .and_then(|m| m.as_str().chars().next())
        .map(|c| c.to_ascii_lowercase())
}

/// Strip `1. ` / `Q.1 ` numbering from a question header line.
///
/// Returns `None` when the line carries no numbering.
pub fn strip_question_number(line: &str) -> Option<&str> {
    QUESTION_NUMBER.find(line).map(|m| &line[m.end()..])
}
