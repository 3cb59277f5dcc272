//! Label binding: `X-ABLabel` lines name the field sharing their subkey.
//!
//! ```text
//! item1.TEL:+1-555-0100
//! item1.X-ABLabel:Mobile
//! ```
//!
//! When several other fields share the label's subkey, the first one in line
//! order receives the label. Labels without a subkey, or whose subkey no
//! other field carries, are dropped.

use crate::rfc::vcard::core::Token;
use crate::rfc::vcard::core::token::strip_fragment;

/// Attaches each label at `label_lines` to its owner, mutating the owner's
/// `label` in place. Returns how many labels were bound.
pub fn bind_labels(tokens: &mut [Token], label_lines: &[usize]) -> usize {
    let mut bindings = Vec::with_capacity(label_lines.len());

    for &label_line in label_lines {
        let Some(label) = tokens
            .iter()
            .find(|t| t.line() == label_line)
            .and_then(Token::as_field)
        else {
            continue;
        };

        let Some(subkey) = label.subkey.as_deref() else {
            tracing::trace!(line = label_line, "Label without subkey dropped");
            continue;
        };

        let owner = tokens
            .iter()
            .position(|t| t.line() != label_line && t.subkey() == Some(subkey));

        match owner {
            Some(idx) => bindings.push((idx, strip_fragment(&label.raw_value).to_string())),
            None => tracing::trace!(line = label_line, subkey, "Label without owner dropped"),
        }
    }

    let bound = bindings.len();
    for (idx, text) in bindings {
        if let Some(owner) = tokens.get_mut(idx).and_then(Token::as_field_mut) {
            owner.label = Some(text);
        }
    }

    tracing::debug!(bound, total = label_lines.len(), "Bound labels");

    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::StandardRegistry;
    use crate::rfc::vcard::parse::tokenize_line;

    fn tokens(lines: &[&str]) -> Vec<Token> {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| tokenize_line(line, i, &StandardRegistry))
            .collect()
    }

    fn label_of(tokens: &[Token], line: usize) -> Option<&str> {
        tokens[line].as_field()?.label.as_deref()
    }

    #[test]
    fn binds_label_to_owner() {
        let mut tokens = tokens(&["TEL.uid1:+1-555-0100\r\n", "X-ABLabel.uid1:Mobile\r\n"]);
        assert_eq!(bind_labels(&mut tokens, &[1]), 1);

        assert_eq!(label_of(&tokens, 0), Some("Mobile"));
        assert_eq!(tokens[0].subkey(), Some("uid1"));
        assert_eq!(tokens[1].subkey(), Some("uid1"));
        assert_eq!(label_of(&tokens, 1), None);
    }

    #[test]
    fn owner_may_follow_label() {
        let mut tokens = tokens(&["item3.X-ABLabel:_$!<HomePage>!$_\r\n", "item3.URL:http://x\r\n"]);
        bind_labels(&mut tokens, &[0]);
        assert_eq!(label_of(&tokens, 1), Some("_$!<HomePage>!$_"));
    }

    #[test]
    fn first_sharing_field_wins() {
        let mut tokens = tokens(&[
            "item1.EMAIL:a@example.com\r\n",
            "item1.TEL:+1\r\n",
            "item1.X-ABLabel:Work\r\n",
        ]);
        bind_labels(&mut tokens, &[2]);

        assert_eq!(label_of(&tokens, 0), Some("Work"));
        assert_eq!(label_of(&tokens, 1), None);
    }

    #[test]
    fn unmatched_label_is_dropped() {
        let mut tokens = tokens(&["item1.TEL:+1\r\n", "item2.X-ABLabel:Orphan\r\n"]);
        assert_eq!(bind_labels(&mut tokens, &[1]), 0);
        assert_eq!(label_of(&tokens, 0), None);
    }

    #[test]
    fn label_without_subkey_is_dropped() {
        let mut tokens = tokens(&["TEL:+1\r\n", "X-ABLabel:Loose\r\n"]);
        assert_eq!(bind_labels(&mut tokens, &[1]), 0);
    }

    #[test]
    fn unknown_tokens_never_own_labels() {
        let mut tokens = tokens(&["item1.X-CUSTOM:y\r\n", "item1.X-ABLabel:L\r\n"]);
        assert_eq!(bind_labels(&mut tokens, &[1]), 0);
    }
}
