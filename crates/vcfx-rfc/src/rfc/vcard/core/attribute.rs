//! Field attribute types.

/// A `name=value` attribute from a line descriptor (e.g. `TYPE=work`).
///
/// Names and values are kept exactly as written. A malformed segment is
/// represented by the empty attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value, unparsed.
    pub value: String,
}

impl Attribute {
    /// Creates a new attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns whether this is the placeholder for a malformed segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.value.is_empty()
    }

    /// Returns whether the attribute name matches (case-insensitive).
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_keeps_case() {
        let attr = Attribute::new("type", "HOME");
        assert_eq!(attr.name, "type");
        assert_eq!(attr.value, "HOME");
        assert!(attr.is_named("TYPE"));
    }

    #[test]
    fn empty_attribute() {
        assert!(Attribute::default().is_empty());
        assert!(!Attribute::new("", "x").is_empty());
    }
}
