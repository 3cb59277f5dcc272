//! vCard line tokenizing.
//!
//! ## Usage
//!
//! ```rust
//! use vcfx_rfc::rfc::vcard::core::{FieldKind, StandardRegistry};
//! use vcfx_rfc::rfc::vcard::parse::{ReaderSource, tokenize};
//!
//! let mut source = ReaderSource::from_text("BEGIN:VCARD\r\nFN:Jane Doe\r\nEND:VCARD\r\n");
//! let tokens = tokenize(&mut source, &StandardRegistry)
//!     .unwrap()
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! assert_eq!(tokens[1].kind(), Some(FieldKind::FormattedName));
//! assert_eq!(tokens[1].raw_value(), "Jane Doe\r\n");
//! ```
//!
//! ## Features
//!
//! - Splits on the first colon only; later colons stay in the value
//! - Parses subkey groups (uid1.TEL) and `name=value` attributes
//! - Keeps line terminators in raw values
//! - Restartable passes over any `BufRead + Seek` source

mod lexer;
mod source;
mod tokenizer;
mod values;

pub use lexer::{SplitLine, split_line};
pub use source::{FileSource, LineSource, ReaderSource, SourceLines, lines};
pub use tokenizer::{Tokenizer, tokenize, tokenize_line};
pub use values::{parse_organization, split_structured, unescape_text};
