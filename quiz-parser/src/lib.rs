//! # quiz-parser
//!
//! Normalization engine for human-authored quiz documents.
//!
//! File Layout
//!
//!     Quiz sources come in two families: loosely formatted plain text with no fixed grammar,
//!     and HTML pages that carry the questions as a script-declared JSON literal. Both are
//!     normalized into the same [Question](quiz::question::Question) record.
//!
//!     src/quiz
//!       ├── question       The canonical record and its per-dialect score defaults
//!       ├── lexing         Block segmentation and per-line classification
//!       ├── parsing        The block state machine and the answer letter mapper
//!       ├── embedded       Extraction of the JSON-in-HTML shapes
//!       └── serializing    Markup stripping and the canonical text writer
//!
//!     Everything here is pure and synchronous: the crate never touches the filesystem, and no
//!     state survives between calls.

pub mod quiz;
