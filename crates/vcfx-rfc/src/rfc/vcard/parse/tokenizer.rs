//! Tokenizer: one token per physical line.

use super::lexer::split_line;
use super::source::{LineSource, SourceLines, lines};
use crate::error::RfcResult;
use crate::rfc::vcard::core::{FieldRegistry, Token, UnknownToken};

/// Tokenizes a single physical line.
///
/// Lines without a descriptor and lines whose key the registry does not know
/// both become [`Token::Unknown`] carrying the untouched line text.
///
/// A grouped key is read as `subkey.KEY` first. When only the left side is
/// registered (`TEL.uid1`) the reading is swapped, so the line is a `TEL`
/// field with subkey `uid1`.
#[must_use]
pub fn tokenize_line<R: FieldRegistry + ?Sized>(line: &str, line_no: usize, registry: &R) -> Token {
    let unknown = || {
        Token::Unknown(UnknownToken {
            line: line_no,
            raw: line.to_string(),
        })
    };

    let Some(split) = split_line(line) else {
        return unknown();
    };

    let (kind, subkey) = match registry.lookup(split.key) {
        Some(kind) => (kind, split.subkey),
        None => match split.subkey.and_then(|left| registry.lookup(left)) {
            Some(kind) => (kind, Some(split.key)),
            None => {
                tracing::trace!(line = line_no, key = split.key, "Unregistered key");
                return unknown();
            }
        },
    };

    Token::Field(kind.construct(
        subkey.map(String::from),
        split.attributes,
        split.value.to_string(),
        line_no,
    ))
}

/// Lazy token stream over one pass of a [`LineSource`].
pub struct Tokenizer<'a, S: ?Sized, R: ?Sized> {
    lines: SourceLines<'a, S>,
    registry: &'a R,
}

/// Starts a tokenizing pass. The source is rewound first, so calling this
/// again regenerates the same sequence.
///
/// ## Errors
/// Returns an error if the source cannot be rewound.
pub fn tokenize<'a, S, R>(source: &'a mut S, registry: &'a R) -> RfcResult<Tokenizer<'a, S, R>>
where
    S: LineSource + ?Sized,
    R: FieldRegistry + ?Sized,
{
    Ok(Tokenizer {
        lines: lines(source)?,
        registry,
    })
}

impl<S, R> Iterator for Tokenizer<'_, S, R>
where
    S: LineSource + ?Sized,
    R: FieldRegistry + ?Sized,
{
    type Item = RfcResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.lines.next()?;
        Some(item.map(|(line_no, text)| tokenize_line(&text, line_no, self.registry)))
    }
}
