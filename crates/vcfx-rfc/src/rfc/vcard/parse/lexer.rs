//! Line splitter: one physical line into descriptor parts and raw value.
//!
//! Lines are split on the first colon only. No unfolding happens here;
//! a folded continuation line simply has no descriptor.

use crate::rfc::vcard::core::Attribute;

/// A physical line split into its descriptor parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine<'a> {
    /// Group prefix (e.g. "item1" in "item1.TEL").
    pub subkey: Option<&'a str>,
    /// Field key, exactly as written.
    pub key: &'a str,
    /// `name=value` segments in order of appearance.
    pub attributes: Vec<Attribute>,
    /// Everything after the first colon, line terminator included.
    pub value: &'a str,
}

/// Splits a line into `[subkey.]key[;name=value]*` and its raw value.
///
/// Returns `None` when the line has no colon, or when every descriptor
/// segment is an attribute so there is no key to dispatch on.
#[must_use]
pub fn split_line(line: &str) -> Option<SplitLine<'_>> {
    let (descriptor, value) = line.split_once(':')?;

    let (attribute_segments, key_segments): (Vec<&str>, Vec<&str>) =
        descriptor.split(';').partition(|segment| segment.contains('='));

    let mut key_segments = key_segments.into_iter();
    let key_segment = key_segments.next()?;

    let extra = key_segments.len();
    if extra > 0 {
        tracing::trace!(key = key_segment, extra, "Dropping bare descriptor segments");
    }

    let (subkey, key) = match key_segment.split_once('.') {
        Some((subkey, key)) => (Some(subkey), key),
        None => (None, key_segment),
    };

    let attributes = attribute_segments
        .into_iter()
        .map(parse_attribute)
        .collect();

    Some(SplitLine {
        subkey,
        key,
        attributes,
        value,
    })
}

/// Parses one `name=value` segment, splitting on the first `=`.
///
/// A segment without a name is malformed and yields the empty attribute
/// rather than failing the line.
fn parse_attribute(segment: &str) -> Attribute {
    match segment.split_once('=') {
        Some((name, value)) if !name.is_empty() => Attribute::new(name, value),
        _ => {
            tracing::trace!(segment, "Malformed attribute segment");
            Attribute::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_simple_line() {
        let line = split_line("FN:Jane Doe\r\n").unwrap();
        assert!(line.subkey.is_none());
        assert_eq!(line.key, "FN");
        assert!(line.attributes.is_empty());
        assert_eq!(line.value, "Jane Doe\r\n");
    }

    #[test]
    fn split_grouped_line_left_is_subkey() {
        // Which side names the field is decided at dispatch, not here.
        let line = split_line("TEL.uid1:+1-555-0100\r\n").unwrap();
        assert_eq!(line.subkey, Some("TEL"));
        assert_eq!(line.key, "uid1");
        assert_eq!(line.value, "+1-555-0100\r\n");
    }

    #[test]
    fn split_group_prefix_before_attributes() {
        let line = split_line("item2.ADR;TYPE=HOME:;;1 Main St\r\n").unwrap();
        assert_eq!(line.subkey, Some("item2"));
        assert_eq!(line.key, "ADR");
        assert_eq!(line.attributes, vec![Attribute::new("TYPE", "HOME")]);
    }

    #[test]
    fn split_with_attributes() {
        let line = split_line("PHOTO;ENCODING=b;TYPE=JPEG:/9j/4AAQ\r\n").unwrap();
        assert_eq!(line.key, "PHOTO");
        assert_eq!(
            line.attributes,
            vec![Attribute::new("ENCODING", "b"), Attribute::new("TYPE", "JPEG")]
        );
        assert_eq!(line.value, "/9j/4AAQ\r\n");
    }

    #[test]
    fn key_is_found_after_attributes() {
        let line = split_line("TYPE=work;EMAIL:a@b.c").unwrap();
        assert_eq!(line.key, "EMAIL");
        assert_eq!(line.attributes.len(), 1);
    }

    #[test]
    fn attribute_splits_on_first_equals() {
        let line = split_line("URL;X-Q=a=b:http://x").unwrap();
        assert_eq!(line.attributes, vec![Attribute::new("X-Q", "a=b")]);
    }

    #[test]
    fn nameless_attribute_is_empty() {
        let line = split_line("TEL;=cell;TYPE=home:+1").unwrap();
        assert_eq!(
            line.attributes,
            vec![Attribute::default(), Attribute::new("TYPE", "home")]
        );
        assert_eq!(line.key, "TEL");
    }

    #[test]
    fn bare_segments_after_key_are_dropped() {
        let line = split_line("TEL;HOME;VOICE:+1").unwrap();
        assert_eq!(line.key, "TEL");
        assert!(line.attributes.is_empty());
    }

    #[test]
    fn value_keeps_later_colons() {
        let line = split_line("URL:https://example.com:8080/path\r\n").unwrap();
        assert_eq!(line.value, "https://example.com:8080/path\r\n");
    }

    #[test]
    fn no_colon_is_not_a_field_line() {
        assert!(split_line(" /9j/4AAQSkZJRgABAQAAAQABAAD\r\n").is_none());
        assert!(split_line("").is_none());
    }

    #[test]
    fn attribute_only_descriptor_has_no_key() {
        assert!(split_line("TYPE=work:value").is_none());
    }
}
