//! Line-addressable index over one vCard source.

use std::io::Cursor;
use std::path::Path;

use vcfx_core::config::ReaderConfig;

use super::folded::reconstruct_range;
use super::label::bind_labels;
use super::position::{IndexedField, PositionIndex};
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::core::{FieldRegistry, FieldToken, Organization, StandardRegistry, Token};
use crate::rfc::vcard::parse::{
    FileSource, LineSource, ReaderSource, lines, parse_organization, tokenize,
};

/// Owns a line source and the virtual index built from it.
///
/// Tokens carry structure only. Values spanning several lines are read back
/// on demand with [`VcardIndex::reconstruct_range`], which makes a fresh pass
/// over the source.
#[derive(Debug)]
pub struct VcardIndex<S, R = StandardRegistry> {
    source: S,
    registry: R,
    tokens: Vec<Token>,
    positions: PositionIndex,
    scanned: bool,
}

impl<S: LineSource> VcardIndex<S> {
    /// Wraps `source` with the standard registry. Nothing is read until
    /// [`discover`](Self::discover).
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_registry(source, StandardRegistry)
    }
}

impl VcardIndex<FileSource> {
    /// Opens the file at `path`, scanning it when `config.scan_on_open` is set.
    ///
    /// ## Errors
    /// - `RfcError::InvalidSource` if the file cannot be opened or read
    /// - `RfcError::MissingField` if the scan finds no `BEGIN` or `END`
    pub fn open(path: impl AsRef<Path>, config: &ReaderConfig) -> RfcResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), scan = config.scan_on_open, "Opening vCard source");

        let mut index = Self::new(FileSource::open(path)?);
        if config.scan_on_open {
            index.discover()?;
        }

        Ok(index)
    }
}

impl VcardIndex<ReaderSource<Cursor<String>>> {
    /// Indexes already decoded text.
    ///
    /// ## Errors
    /// Returns `RfcError::MissingField` if `BEGIN` or `END` is absent.
    pub fn from_text(text: impl Into<String>) -> RfcResult<Self> {
        let mut index = Self::new(ReaderSource::from_text(text));
        index.discover()?;
        Ok(index)
    }
}

impl<S: LineSource, R: FieldRegistry> VcardIndex<S, R> {
    #[must_use]
    pub fn with_registry(source: S, registry: R) -> Self {
        Self {
            source,
            registry,
            tokens: Vec::new(),
            positions: PositionIndex::default(),
            scanned: false,
        }
    }

    /// Tokenizes the whole source, builds the position index and binds labels.
    ///
    /// Running it again rebuilds everything from a fresh pass.
    ///
    /// ## Errors
    /// - `RfcError::InvalidSource` if the source cannot be rewound or read
    /// - `RfcError::MissingField` if `BEGIN` or `END` is absent; the previous
    ///   index is left untouched
    #[tracing::instrument(skip(self))]
    pub fn discover(&mut self) -> RfcResult<()> {
        let mut tokens =
            tokenize(&mut self.source, &self.registry)?.collect::<RfcResult<Vec<_>>>()?;

        tracing::trace!(count = tokens.len(), "Tokenized source");

        let positions = PositionIndex::build(&tokens)?;
        if let Some(label_lines) = positions.lines(IndexedField::Label) {
            bind_labels(&mut tokens, label_lines);
        }

        self.tokens = tokens;
        self.positions = positions;
        self.scanned = true;

        Ok(())
    }

    /// Whether [`discover`](Self::discover) has completed.
    #[must_use]
    pub fn is_scanned(&self) -> bool {
        self.scanned
    }

    /// One token per physical line, in line order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn positions(&self) -> &PositionIndex {
        &self.positions
    }

    /// Field tokens whose key equals `key`, in line order.
    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Vec<&Token> {
        self.tokens.iter().filter(|t| t.key() == Some(key)).collect()
    }

    /// Field tokens whose subkey equals `subkey`, in line order.
    #[must_use]
    pub fn find_by_subkey(&self, subkey: &str) -> Vec<&Token> {
        self.tokens
            .iter()
            .filter(|t| t.subkey() == Some(subkey))
            .collect()
    }

    /// Token at `line`, if the source has that many lines.
    #[must_use]
    pub fn token_at(&self, line: usize) -> Option<&Token> {
        self.tokens.get(line).filter(|t| t.line() == line)
    }

    /// Joins the values of lines `start..=end` into one field token.
    ///
    /// ## Errors
    /// See [`reconstruct_range`](super::folded::reconstruct_range).
    pub fn reconstruct_range(&mut self, start: usize, end: usize) -> RfcResult<FieldToken> {
        reconstruct_range(&mut self.source, &self.registry, start, end)
    }

    /// Reconstructs the full `PHOTO` value from its indexed range.
    ///
    /// The indexed photo token takes the joined value (its label is kept)
    /// and a copy is returned. Returns `None` if there is no photo.
    ///
    /// ## Errors
    /// Returns an error if the source cannot be re-read.
    pub fn compile_photo(&mut self) -> RfcResult<Option<FieldToken>> {
        let Some(range) = self.positions.range(IndexedField::Photo) else {
            return Ok(None);
        };

        let mut photo = self.reconstruct_range(range.start, range.end)?;

        if let Some(indexed) = self
            .tokens
            .get_mut(range.start)
            .and_then(Token::as_field_mut)
        {
            photo.label.clone_from(&indexed.label);
            indexed.raw_value.clone_from(&photo.raw_value);
        }

        Ok(Some(photo))
    }

    /// Decodes the indexed `ORG` line.
    #[must_use]
    pub fn organization(&self) -> Option<Organization> {
        let line = self.positions.line(IndexedField::Organization)?;
        let token = self.token_at(line)?.as_field()?;
        Some(parse_organization(&token.raw_value))
    }

    /// Tokenizes lines `start..=end` in a fresh pass. Lines past the end of
    /// the source are simply missing from the result.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidRange` if `start > end`, or a source error.
    pub fn tokenize_slice(&mut self, start: usize, end: usize) -> RfcResult<Vec<Token>> {
        if start > end {
            return Err(RfcError::InvalidRange { start, end });
        }

        let mut slice = Vec::new();
        for token in tokenize(&mut self.source, &self.registry)? {
            let token = token?;
            if token.line() > end {
                break;
            }
            if token.line() >= start {
                slice.push(token);
            }
        }

        Ok(slice)
    }

    /// Tokenizes a single line in a fresh pass.
    ///
    /// ## Errors
    /// Returns an error if the source cannot be re-read.
    pub fn tokenize_row(&mut self, row: usize) -> RfcResult<Option<Token>> {
        Ok(self.tokenize_slice(row, row)?.pop())
    }

    /// Raw text of lines `start..=end`, terminators included.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidRange` if `start > end`, or a source error.
    pub fn read_slice(&mut self, start: usize, end: usize) -> RfcResult<Vec<String>> {
        if start > end {
            return Err(RfcError::InvalidRange { start, end });
        }

        let mut slice = Vec::new();
        for item in lines(&mut self.source)? {
            let (line, text) = item?;
            if line > end {
                break;
            }
            if line >= start {
                slice.push(text);
            }
        }

        Ok(slice)
    }

    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }
}
