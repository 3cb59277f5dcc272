//! The virtual index: positions of fields by line, folded ranges and labels.

mod folded;
mod label;
mod position;
mod reader;

pub use folded::{FoldedRange, reconstruct_range, resolve_folded_range};
pub use label::bind_labels;
pub use position::{Cardinality, IndexedField, Position, PositionIndex};
pub use reader::VcardIndex;
