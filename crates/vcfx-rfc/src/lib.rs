//! Line-addressable vCard tokenizer and position index.
//!
//! See [`rfc::vcard`] for the entry points.

pub mod error;
pub mod rfc;


pub use error::{RfcError, RfcResult};
