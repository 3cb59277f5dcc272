//! Position index: canonical field names mapped to line numbers.

use std::collections::BTreeMap;

use super::folded::{FoldedRange, resolve_folded_range};
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::core::Token;
use crate::rfc::vcard::core::kind::names;

/// Fields tracked by the position index, by canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndexedField {
    Address,
    AltBirthday,
    Begin,
    Birthday,
    Email,
    End,
    FullName,
    Label,
    Name,
    Organization,
    Photo,
    ProdId,
    Telephone,
    Url,
    Version,
}

/// How many positions a field records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// First matching line; `required` fields fail the build when absent.
    Single { required: bool },
    /// Every matching line, in order.
    Repeated,
    /// Line range of a multi-line value.
    Folded,
}

impl IndexedField {
    pub const ALL: [Self; 15] = [
        Self::Address,
        Self::AltBirthday,
        Self::Begin,
        Self::Birthday,
        Self::Email,
        Self::End,
        Self::FullName,
        Self::Label,
        Self::Name,
        Self::Organization,
        Self::Photo,
        Self::ProdId,
        Self::Telephone,
        Self::Url,
        Self::Version,
    ];

    /// Canonical name (e.g. `"telephone"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::AltBirthday => "altbirthday",
            Self::Begin => "begin",
            Self::Birthday => "birthday",
            Self::Email => "email",
            Self::End => "end",
            Self::FullName => "fullname",
            Self::Label => "label",
            Self::Name => "name",
            Self::Organization => "organization",
            Self::Photo => "photo",
            Self::ProdId => "prodid",
            Self::Telephone => "telephone",
            Self::Url => "url",
            Self::Version => "version",
        }
    }

    /// Descriptor key matched against tokens.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Address => names::ADR,
            Self::AltBirthday => names::X_ALTBDAY,
            Self::Begin => names::BEGIN,
            Self::Birthday => names::BDAY,
            Self::Email => names::EMAIL,
            Self::End => names::END,
            Self::FullName => names::FN,
            Self::Label => names::X_ABLABEL,
            Self::Name => names::N,
            Self::Organization => names::ORG,
            Self::Photo => names::PHOTO,
            Self::ProdId => names::PRODID,
            Self::Telephone => names::TEL,
            Self::Url => names::URL,
            Self::Version => names::VERSION,
        }
    }

    #[must_use]
    pub const fn cardinality(self) -> Cardinality {
        match self {
            Self::Begin | Self::End => Cardinality::Single { required: true },
            Self::Address | Self::Email | Self::Label | Self::Telephone | Self::Url => {
                Cardinality::Repeated
            }
            Self::Photo => Cardinality::Folded,
            Self::AltBirthday
            | Self::Birthday
            | Self::FullName
            | Self::Name
            | Self::Organization
            | Self::ProdId
            | Self::Version => Cardinality::Single { required: false },
        }
    }

    /// Looks up a field by canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl std::fmt::Display for IndexedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a present field lives in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Line(usize),
    /// Never empty.
    Lines(Vec<usize>),
    Range(FoldedRange),
}

/// Canonical field name → position, for every field present in the source.
///
/// Absent fields have no entry; a repeated field is never recorded as an
/// empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionIndex {
    positions: BTreeMap<IndexedField, Position>,
}

impl PositionIndex {
    /// Builds the index with one linear scan of `tokens` per field.
    ///
    /// ## Errors
    /// Returns `RfcError::MissingField` naming the key of the first required
    /// field (`BEGIN`, then `END`) that has no token.
    #[tracing::instrument(skip(tokens), fields(tokens = tokens.len()))]
    pub fn build(tokens: &[Token]) -> RfcResult<Self> {
        let mut positions = BTreeMap::new();

        for field in IndexedField::ALL {
            let key = field.key();
            let position = match field.cardinality() {
                Cardinality::Single { required } => {
                    let line = find_line(tokens, key);
                    if line.is_none() && required {
                        tracing::debug!(key, "Required field not found");
                        return Err(RfcError::MissingField(key));
                    }
                    line.map(Position::Line)
                }
                Cardinality::Repeated => {
                    let lines = find_lines(tokens, key);
                    (!lines.is_empty()).then_some(Position::Lines(lines))
                }
                Cardinality::Folded => resolve_folded_range(tokens, key).map(Position::Range),
            };

            if let Some(position) = position {
                positions.insert(field, position);
            }
        }

        tracing::debug!(present = positions.len(), "Built position index");

        Ok(Self { positions })
    }

    #[must_use]
    pub fn get(&self, field: IndexedField) -> Option<&Position> {
        self.positions.get(&field)
    }

    #[must_use]
    pub fn contains(&self, field: IndexedField) -> bool {
        self.positions.contains_key(&field)
    }

    /// Line of a single-position field.
    #[must_use]
    pub fn line(&self, field: IndexedField) -> Option<usize> {
        match self.get(field)? {
            Position::Line(line) => Some(*line),
            Position::Lines(_) | Position::Range(_) => None,
        }
    }

    /// Lines of a repeated field.
    #[must_use]
    pub fn lines(&self, field: IndexedField) -> Option<&[usize]> {
        match self.get(field)? {
            Position::Lines(lines) => Some(lines),
            Position::Line(_) | Position::Range(_) => None,
        }
    }

    /// Range of a folded field.
    #[must_use]
    pub fn range(&self, field: IndexedField) -> Option<FoldedRange> {
        match self.get(field)? {
            Position::Range(range) => Some(*range),
            Position::Line(_) | Position::Lines(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (IndexedField, &Position)> {
        self.positions.iter().map(|(field, position)| (*field, position))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

fn find_line(tokens: &[Token], key: &str) -> Option<usize> {
    tokens
        .iter()
        .find(|t| t.key() == Some(key))
        .map(Token::line)
}

fn find_lines(tokens: &[Token], key: &str) -> Vec<usize> {
    tokens
        .iter()
        .filter(|t| t.key() == Some(key))
        .map(Token::line)
        .collect()
}
