//! Multi-line (folded) value detection and reconstruction.
//!
//! A folded range starts at a field line and runs while the following lines
//! tokenize as the same field kind or as unknown tokens. This is a type
//! continuity heuristic, not the leading-whitespace unfolding rule: a
//! continuation line that happens to look like another registered field
//! ends the range early.

use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::core::token::strip_fragment;
use crate::rfc::vcard::core::{FieldRegistry, FieldToken, Token};
use crate::rfc::vcard::parse::{LineSource, tokenize};

/// Inclusive line range holding one logical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoldedRange {
    pub start: usize,
    pub end: usize,
}

impl FoldedRange {
    /// Number of physical lines in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A range always covers at least its start line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn contains(&self, line: usize) -> bool {
        (self.start..=self.end).contains(&line)
    }
}

/// Finds the lines of the first field keyed `key` and its continuation.
///
/// Returns `None` when no field token has that key.
#[must_use]
pub fn resolve_folded_range(tokens: &[Token], key: &str) -> Option<FoldedRange> {
    let start_idx = tokens.iter().position(|t| t.key() == Some(key))?;
    let first = &tokens[start_idx];
    let kind = first.kind();

    let last = tokens[start_idx..]
        .iter()
        .take_while(|t| t.is_unknown() || t.kind() == kind)
        .last()
        .unwrap_or(first);

    Some(FoldedRange {
        start: first.line(),
        end: last.line(),
    })
}

/// Re-reads lines `start..=end` and joins their values into one field token.
///
/// Each line is tokenized on its own; every fragment is stripped of edge
/// spaces and CR/LF and the fragments are concatenated with no separator.
/// The first line's token carries the joined value.
///
/// ## Errors
/// - `RfcError::InvalidRange` if `start > end` or the source ends before `end`
/// - `RfcError::NotAField` if line `start` is not a registered field
/// - `RfcError::InvalidSource` if the source cannot be rewound or read
#[tracing::instrument(skip(source, registry))]
pub fn reconstruct_range<S, R>(
    source: &mut S,
    registry: &R,
    start: usize,
    end: usize,
) -> RfcResult<FieldToken>
where
    S: LineSource + ?Sized,
    R: FieldRegistry + ?Sized,
{
    if start > end {
        return Err(RfcError::InvalidRange { start, end });
    }

    let mut fragments = Vec::new();
    for token in tokenize(source, registry)? {
        let token = token?;
        let line = token.line();
        if line > end {
            break;
        }
        if line >= start {
            fragments.push(token);
        }
    }

    if fragments.last().map(Token::line) != Some(end) {
        tracing::debug!(read = fragments.len(), "Source ended inside range");
        return Err(RfcError::InvalidRange { start, end });
    }

    let value: String = fragments
        .iter()
        .map(|t| strip_fragment(t.raw_value()))
        .collect();

    let mut field = fragments
        .into_iter()
        .next()
        .and_then(Token::into_field)
        .ok_or(RfcError::NotAField { line: start })?;

    tracing::trace!(key = %field.key, len = value.len(), "Reconstructed folded value");

    field.raw_value = value;
    Ok(field)
}
