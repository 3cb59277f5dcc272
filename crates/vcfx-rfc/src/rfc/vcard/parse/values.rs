//! Value helpers for fields the index decodes on request.

use crate::rfc::vcard::core::Organization;
use crate::rfc::vcard::core::token::strip_fragment;

/// Unescapes a vCard text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash)
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(&(escaped @ (',' | ';' | '\\'))) => {
                    chars.next();
                    result.push(escaped);
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match c {
            '\\' => escaped = true,
            ';' => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Parses an `ORG` raw value into name and units.
///
/// Edge whitespace and the line terminator are ignored; empty trailing
/// units are dropped.
#[must_use]
pub fn parse_organization(raw: &str) -> Organization {
    let mut parts = split_structured(strip_fragment(raw)).into_iter();

    let name = parts.next().map(unescape_text).unwrap_or_default();

    let mut units: Vec<String> = parts.map(unescape_text).collect();
    while units.last().is_some_and(String::is_empty) {
        units.pop();
    }

    Organization { name, units }
}
