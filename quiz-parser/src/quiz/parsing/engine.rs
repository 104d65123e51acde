//! Block state machine
//!
//!     A block is parsed front to back in four states:
//!
//!         Header        strip `1.` / `Q.1` numbering from the first line, if any
//!         QuestionText  every line up to the first option marker joins the question body
//!         Options       up to five option lines, each taking at most one continuation line;
//!                       stray text between options is skipped
//!         AnswerScan    every remaining answer line, resolved by the answer precedence
//!
//!     Explanations are collected separately over the whole block, so an `ex:` line counts no
//!     matter which state it was reached in.
//!
//!     Lines are classified once up front, see [classify_line]. The states only look at the
//!     resulting [LineKind].
use super::answer::answer_for_letter;
use super::ParseOptions;
use crate::quiz::lexing::{classify_line, strip_question_number, ClassifiedLine, LineKind};
use crate::quiz::question::{Question, OPTION_SLOTS};
use log::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Header,
    QuestionText,
    Options,
    AnswerScan,
    Done,
}

struct BlockMachine<'a, 'o> {
    lines: Vec<ClassifiedLine<'a>>,
    options: &'o ParseOptions,
    cursor: usize,
    state: State,
    question_lines: Vec<&'a str>,
    option_texts: Vec<String>,
    answer: Option<&'static str>,
}

impl<'a, 'o> BlockMachine<'a, 'o> {
    fn new(block: &[&'a str], options: &'o ParseOptions) -> Self {
        let lines = block
            .iter()
            .copied()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(classify_line)
            .collect();
        Self {
            lines,
            options,
            cursor: 0,
            state: State::Header,
            question_lines: Vec::new(),
            option_texts: Vec::with_capacity(OPTION_SLOTS),
            answer: None,
        }
    }

    fn current(&self) -> Option<&ClassifiedLine<'a>> {
        self.lines.get(self.cursor)
    }

    fn run(&mut self) {
        while self.state != State::Done {
            self.state = match self.state {
                State::Header => self.header(),
                State::QuestionText => self.question_text(),
                State::Options => self.option_list(),
                State::AnswerScan => self.answer_scan(),
                State::Done => State::Done,
            };
        }
    }

    fn header(&mut self) -> State {
        if let Some(line) = self.current() {
            if let Some(rest) = strip_question_number(line.source) {
                self.question_lines.push(rest);
                self.cursor += 1;
            }
        }
        State::QuestionText
    }

    fn question_text(&mut self) -> State {
        while let Some(line) = self.current() {
            if matches!(line.kind, LineKind::Option { .. }) {
                break;
            }
            self.question_lines.push(line.source);
            self.cursor += 1;
        }
        State::Options
    }

    fn option_list(&mut self) -> State {
        while self.option_texts.len() < OPTION_SLOTS {
            let Some(line) = self.current().copied() else {
                break;
            };
            match line.kind {
                LineKind::Option { text, .. } => {
                    self.cursor += 1;
                    let mut option = text.to_string();
                    if let Some(next) = self.current() {
                        if next.kind == LineKind::Text {
                            option.push_str(&self.options.break_marker);
                            option.push_str(next.source);
                            self.cursor += 1;
                        }
                    }
                    self.option_texts.push(option);
                }
                kind if kind.is_terminator() => break,
                _ => {
                    trace!("[Parse] Skipping stray line {:?}", line.source);
                    self.cursor += 1;
                }
            }
        }
        State::AnswerScan
    }

    fn answer_scan(&mut self) -> State {
        let precedence = self.options.answer_precedence;
        for line in &self.lines[self.cursor.min(self.lines.len())..] {
            if let LineKind::Answer {
                letter: Some(letter),
            } = line.kind
            {
                self.answer = Some(precedence.resolve(self.answer, answer_for_letter(letter)));
            }
        }
        self.cursor = self.lines.len();
        State::Done
    }

    fn explanation(&self) -> Vec<&'a str> {
        self.lines
            .iter()
            .filter_map(|line| match line.kind {
                LineKind::Explanation { text } => Some(text),
                _ => None,
            })
            .collect()
    }

    fn finish(self) -> Option<Question> {
        let marker = self.options.break_marker.as_str();
        let mut question = Question::with_scores(&self.options.scores);
        question.question = self.question_lines.join(marker);
        question.solution_text = self.explanation().join(marker);
        question.answer = self.answer.unwrap_or_default().to_string();
        for (slot, text) in self.option_texts.into_iter().enumerate() {
            if let Some(option) = question.option_mut(slot + 1) {
                *option = text;
            }
        }

        if question.is_retainable() {
            Some(question)
        } else {
            debug!(
                "[Parse] Discarding block without question or leading options: {:?}",
                question.question
            );
            None
        }
    }
}

/// Parse one block of lines into a question.
///
/// Returns `None` when the block has no question text or neither of the first two options.
pub fn parse_block(block: &[&str], options: &ParseOptions) -> Option<Question> {
    let mut machine = BlockMachine::new(block, options);
    machine.run();
    machine.finish()
}
