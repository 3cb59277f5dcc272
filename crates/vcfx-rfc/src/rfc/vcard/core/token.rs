//! Tokens produced for each physical line.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::attribute::Attribute;
use super::kind::FieldKind;
use crate::error::RfcResult;

/// One token per physical line of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A line whose key is registered.
    Field(FieldToken),
    /// A continuation line, a malformed line, or an unregistered key.
    Unknown(UnknownToken),
}

impl Token {
    /// 0-based line number of the source line.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Field(field) => field.line,
            Self::Unknown(unknown) => unknown.line,
        }
    }

    /// Descriptor key, for field tokens.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.as_field().map(|field| field.key.as_str())
    }

    /// Subkey (the `uid1` of `TEL.uid1`), for field tokens that carry one.
    #[must_use]
    pub fn subkey(&self) -> Option<&str> {
        self.as_field().and_then(|field| field.subkey.as_deref())
    }

    /// Field kind, or `None` for unknown tokens.
    #[must_use]
    pub fn kind(&self) -> Option<FieldKind> {
        self.as_field().map(|field| field.kind)
    }

    /// The value text this line contributes: the raw value of a field, or
    /// the whole line of an unknown token.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        match self {
            Self::Field(field) => &field.raw_value,
            Self::Unknown(unknown) => &unknown.raw,
        }
    }

    #[must_use]
    pub fn as_field(&self) -> Option<&FieldToken> {
        match self {
            Self::Field(field) => Some(field),
            Self::Unknown(_) => None,
        }
    }

    pub fn as_field_mut(&mut self) -> Option<&mut FieldToken> {
        match self {
            Self::Field(field) => Some(field),
            Self::Unknown(_) => None,
        }
    }

    #[must_use]
    pub fn into_field(self) -> Option<FieldToken> {
        match self {
            Self::Field(field) => Some(field),
            Self::Unknown(_) => None,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

/// A line tokenized as a registered field.
///
/// Holds structure only; `raw_value` is the text of this one line unless
/// the token was produced by range reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldToken {
    pub kind: FieldKind,
    /// Descriptor key (e.g. `ORG`).
    pub key: String,
    /// Group prefix before the `.` of the key, used to bind labels.
    pub subkey: Option<String>,
    /// `name=value` attributes in order of appearance.
    pub attributes: Vec<Attribute>,
    /// Everything after the first `:`, line terminator included.
    pub raw_value: String,
    /// 0-based line number.
    pub line: usize,
    /// Label text attached by label binding.
    pub label: Option<String>,
}

impl FieldToken {
    /// Returns the first attribute with the given name (case-insensitive).
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.is_named(name))
    }

    /// Returns the value of the first attribute with the given name.
    #[must_use]
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attribute(name).map(|attr| attr.value.as_str())
    }

    /// Returns the raw value without its surrounding spaces and line terminator.
    #[must_use]
    pub fn value(&self) -> &str {
        strip_fragment(&self.raw_value)
    }

    /// Decodes a base64 value such as a reconstructed `PHOTO`.
    ///
    /// A `data:<mediatype>;base64,` prefix is skipped when present.
    ///
    /// ## Errors
    /// Returns `RfcError::Decode` if the value is not valid base64.
    pub fn decode_binary(&self) -> RfcResult<Vec<u8>> {
        let value = self.value();
        let payload = match value.strip_prefix("data:") {
            Some(uri) => uri.split_once(',').map_or(uri, |(_, data)| data),
            None => value,
        };

        Ok(STANDARD.decode(payload)?)
    }
}

/// A line that does not tokenize as a registered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken {
    /// 0-based line number.
    pub line: usize,
    /// The line exactly as read.
    pub raw: String,
}

/// Strips spaces and CR/LF from the edges of a value fragment.
#[must_use]
pub fn strip_fragment(fragment: &str) -> &str {
    fragment.trim_matches([' ', '\r', '\n'])
}
