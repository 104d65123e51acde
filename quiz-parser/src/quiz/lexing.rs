//! Lexing
//!
//!     Plain text quiz sources have no fixed grammar, so lexing stays shallow and works on whole
//!     lines. It happens in two steps:
//!
//!         1. Segmentation. See [segmentation](segmentation).
//!            The document is cut into candidate blocks, one per question. A block ends at a run
//!            of blank lines or right before a line that opens a new numbered question, which
//!            lets numbered questions run together without blank-line separation.
//!
//!         2. Line classification. See [line_classification](line_classification).
//!            Each line of a block is classified once into a [LineKind]. The parser dispatches on
//!            that kind from its current state instead of re-matching patterns in every state.
//!
//!     Neither step fails. Text that does not look like a question ends up in blocks that the
//!     parser later rejects.

pub mod line_classification;
pub mod segmentation;

pub use line_classification::{classify_line, strip_question_number, ClassifiedLine, LineKind};
pub use segmentation::{segment_blocks, Blocks};
