//! Block Segmentation
//!
//! Splits a raw document into candidate question blocks.
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::iter::Peekable;
use std::str::Lines;

/// A line that opens a new question: `Q.<digits>` or `<digits>.` followed by an uppercase letter.
static QUESTION_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:Q\.\d+|\d+\.[ \t]*[A-Z])").unwrap());

/// Lazy iterator over the blocks of a document.
///
/// Each item holds the block's non-blank lines, trimmed. Blocks shorter than the configured
/// minimum are skipped. The iterator borrows the source and is cheap to clone, so a cloned
/// iterator restarts from the same position.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    lines: Peekable<Lines<'a>>,
    min_lines: usize,
}

impl<'a> Blocks<'a> {
    /// Collects the next block regardless of its length.
    fn next_raw(&mut self) -> Option<Vec<&'a str>> {
        let mut block = Vec::new();
        while let Some(line) = self.lines.peek() {
            let line = line.trim();
            if line.is_empty() {
                self.lines.next();
                if !block.is_empty() {
                    return Some(block);
                }
                continue;
            }
            if !block.is_empty() && starts_question(line) {
                return Some(block);
            }
            block.push(line);
            self.lines.next();
        }
        if block.is_empty() {
            None
        } else {
            Some(block)
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let block = self.next_raw()?;
            if block.len() >= self.min_lines {
                return Some(block);
            }
            debug!(
                "[Segment] Skipping {}-line block starting {:?}",
                block.len(),
                block[0]
            );
        }
    }
}

/// Splits `source` into blocks of at least `min_lines` non-blank lines.
pub fn segment_blocks(source: &str, min_lines: usize) -> Blocks<'_> {
    Blocks {
        lines: source.trim().lines().peekable(),
        min_lines,
    }
}

/// Whether a trimmed line opens a new numbered question.
pub fn starts_question(line: &str) -> bool {
    QUESTION_START.is_match(line)
}
