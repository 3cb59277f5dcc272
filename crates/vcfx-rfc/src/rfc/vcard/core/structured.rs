//! Decoded values for the few fields the index reads back.

/// Organization (`ORG` field).
///
/// First component is the organizational name, the rest are units in order
/// of decreasing specificity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    /// Organization name.
    pub name: String,
    /// Organizational units (department, division, etc.).
    pub units: Vec<String>,
}

impl Organization {
    /// Creates an organization with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
        }
    }

    /// First organizational unit.
    #[must_use]
    pub fn unit1(&self) -> Option<&str> {
        self.units.first().map(String::as_str)
    }

    /// Second organizational unit.
    #[must_use]
    pub fn unit2(&self) -> Option<&str> {
        self.units.get(1).map(String::as_str)
    }

    /// Returns whether the organization is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.units.is_empty()
    }
}
