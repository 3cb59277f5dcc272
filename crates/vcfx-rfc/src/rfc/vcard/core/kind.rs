//! Field kinds and the key registry used by the tokenizer.

use super::attribute::Attribute;
use super::token::FieldToken;

/// The concrete type of a known field line.
///
/// Two tokens are "the same field type" exactly when their kinds are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Begin,
    End,
    Version,
    ProdId,
    Name,
    FormattedName,
    Nickname,
    Photo,
    Birthday,
    AltBirthday,
    Address,
    Label,
    Telephone,
    Email,
    Url,
    Organization,
    Title,
    Role,
    Logo,
    Member,
    Related,
    Note,
    Categories,
    Uid,
    Rev,
}

impl FieldKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 25] = [
        Self::Begin,
        Self::End,
        Self::Version,
        Self::ProdId,
        Self::Name,
        Self::FormattedName,
        Self::Nickname,
        Self::Photo,
        Self::Birthday,
        Self::AltBirthday,
        Self::Address,
        Self::Label,
        Self::Telephone,
        Self::Email,
        Self::Url,
        Self::Organization,
        Self::Title,
        Self::Role,
        Self::Logo,
        Self::Member,
        Self::Related,
        Self::Note,
        Self::Categories,
        Self::Uid,
        Self::Rev,
    ];

    /// The descriptor key this kind is registered under.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Begin => names::BEGIN,
            Self::End => names::END,
            Self::Version => names::VERSION,
            Self::ProdId => names::PRODID,
            Self::Name => names::N,
            Self::FormattedName => names::FN,
            Self::Nickname => names::NICKNAME,
            Self::Photo => names::PHOTO,
            Self::Birthday => names::BDAY,
            Self::AltBirthday => names::X_ALTBDAY,
            Self::Address => names::ADR,
            Self::Label => names::X_ABLABEL,
            Self::Telephone => names::TEL,
            Self::Email => names::EMAIL,
            Self::Url => names::URL,
            Self::Organization => names::ORG,
            Self::Title => names::TITLE,
            Self::Role => names::ROLE,
            Self::Logo => names::LOGO,
            Self::Member => names::MEMBER,
            Self::Related => names::RELATED,
            Self::Note => names::NOTE,
            Self::Categories => names::CATEGORIES,
            Self::Uid => names::UID,
            Self::Rev => names::REV,
        }
    }

    /// Looks up the kind for a descriptor key. Matching is exact.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Builds the field token for one line of this kind.
    #[must_use]
    pub fn construct(
        self,
        subkey: Option<String>,
        attributes: Vec<Attribute>,
        raw_value: String,
        line: usize,
    ) -> FieldToken {
        FieldToken {
            kind: self,
            key: self.key().to_string(),
            subkey,
            attributes,
            raw_value,
            line,
            label: None,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Maps a descriptor key to the kind that should tokenize it.
///
/// The tokenizer only ever queries by key; a `None` makes the line an
/// unknown token.
pub trait FieldRegistry {
    fn lookup(&self, key: &str) -> Option<FieldKind>;
}

/// Registry of every [`FieldKind`], matched on its exact key.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRegistry;

impl FieldRegistry for StandardRegistry {
    fn lookup(&self, key: &str) -> Option<FieldKind> {
        FieldKind::from_key(key)
    }
}

impl<F> FieldRegistry for F
where
    F: Fn(&str) -> Option<FieldKind>,
{
    fn lookup(&self, key: &str) -> Option<FieldKind> {
        self(key)
    }
}

/// Field keys as constants.
pub mod names {
    // Structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
    pub const PRODID: &str = "PRODID";

    // Identification
    pub const N: &str = "N";
    pub const FN: &str = "FN";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";
    pub const BDAY: &str = "BDAY";
    pub const X_ALTBDAY: &str = "X-ALTBDAY";

    // Delivery addressing and communications
    pub const ADR: &str = "ADR";
    pub const X_ABLABEL: &str = "X-ABLabel";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const URL: &str = "URL";

    // Organizational
    pub const ORG: &str = "ORG";
    pub const TITLE: &str = "TITLE";
    pub const ROLE: &str = "ROLE";
    pub const LOGO: &str = "LOGO";
    pub const MEMBER: &str = "MEMBER";
    pub const RELATED: &str = "RELATED";

    // Explanatory
    pub const NOTE: &str = "NOTE";
    pub const CATEGORIES: &str = "CATEGORIES";
    pub const UID: &str = "UID";
    pub const REV: &str = "REV";
}
