//! Core token types.

pub mod attribute;
pub mod kind;
pub mod structured;
pub mod token;

pub use attribute::Attribute;
pub use kind::{FieldKind, FieldRegistry, StandardRegistry};
pub use structured::Organization;
pub use token::{FieldToken, Token, UnknownToken};
