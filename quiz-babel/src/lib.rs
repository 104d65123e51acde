//! Format interoperability for quiz sources
//!
//!     This crate puts a uniform interface over the ways a quiz can arrive (plain text, HTML pages
//!     with embedded quiz data) and the one way it leaves (canonical text). It also owns the only
//!     piece of logic that knows about more than one file at a time: composing a multi-section
//!     quiz.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: discovery by name or file extension, and dispatch
//!     - payload: topic and full quiz composition into a [QuizPayload]
//!
//!     This is a pure lib: it powers quiz-cli but is shell agnostic. Nothing here reads files,
//!     prints, or looks at the environment. Callers hand in file names and decoded contents.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and dispatch
//!     ├── payload.rs              # Topic / full quiz composition
//!     ├── formats
//!     │   ├── text                # .txt, parse and serialize
//!     │   └── html                # .html / .htm, parse only
//!     └── lib.rs
//!
//! Dispatch
//!
//!     The extension decides the parsing path and nothing else does: a `.txt` file that happens to
//!     contain a `<script>` tag is still read as text. An extension no format claims is an
//!     [FormatError::UnsupportedFormat] and no parsing is attempted.
//!
//!     A file that parses to zero questions is an [FormatError::EmptyResult] at this level, even
//!     though the parsers themselves treat it as a normal outcome.

pub mod error;
pub mod format;
pub mod formats;
pub mod payload;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use payload::{compose_full, compose_topic, QuizKind, QuizPayload, SourceFile};
pub use registry::FormatRegistry;
