//! Format implementations
//!
//! This module contains all format implementations that convert between quiz sources and
//! normalized questions.

pub mod html;
pub mod text;

pub use html::HtmlFormat;
pub use text::TextFormat;
