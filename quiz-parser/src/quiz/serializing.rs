//! Serializing
//!
//!     The inverse of parsing: questions back to the canonical plain text dialect. Reading the
//!     output again with [parse_text](crate::quiz::parsing::parse_text) gives back the same
//!     answers and the same stripped option texts. Formatting (markup, line breaks inside a
//!     field) does not survive the trip.

pub mod markup;
pub mod serializer;

pub use markup::{decode_entities, escape_markup, strip_markup};
pub use serializer::{
    serialize_questions, serialize_questions_with, SerializeOptions, DEFAULT_EMPTY_EXPLANATION,
};
