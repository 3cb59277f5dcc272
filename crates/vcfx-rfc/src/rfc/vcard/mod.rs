//! vCard tokenizing and line indexing.
//!
//! A vCard source is read line by line into one [`Token`] per physical line.
//! From those tokens a [`PositionIndex`] maps canonical field names to the
//! lines that hold them, without decoding any value. Values folded over
//! several lines (an embedded `PHOTO`) are reassembled on request by
//! re-reading just their line range.
//!
//! ## Usage
//!
//! ```rust
//! use vcfx_rfc::rfc::vcard::{IndexedField, VcardIndex};
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:Jane Doe\r\n\
//! item1.TEL:+1-555-0100\r\n\
//! item1.X-ABLabel:Mobile\r\n\
//! END:VCARD\r\n";
//!
//! let index = VcardIndex::from_text(input).unwrap();
//! assert_eq!(index.positions().line(IndexedField::FullName), Some(2));
//!
//! let tel = index.find_by_key("TEL")[0].as_field().unwrap();
//! assert_eq!(tel.label.as_deref(), Some("Mobile"));
//! ```
//!
//! ## Limitations
//!
//! Folded ranges are found by type continuity: a range ends at the first
//! line that tokenizes as a different registered field. The leading
//! whitespace continuation rule is not applied.
//!
//! ## Submodules
//!
//! - [`core`] - Token, field kind and registry types
//! - [`parse`] - Line splitting, sources and the tokenizer
//! - [`index`] - Position index, folded ranges, labels and [`VcardIndex`]

pub mod core;
pub mod index;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use self::core::{
    Attribute, FieldKind, FieldRegistry, FieldToken, Organization, StandardRegistry, Token,
    UnknownToken,
};
pub use self::index::{FoldedRange, IndexedField, Position, PositionIndex, VcardIndex};
pub use self::parse::{FileSource, LineSource, ReaderSource, tokenize};
