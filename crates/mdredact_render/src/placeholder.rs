//! Lexical form of redaction placeholders.
//!
//! A placeholder is a bracketed numeric reference: `[3]`. The form is valid
//! CommonMark (a shortcut-style reference with no matching definition), so a
//! redacted copy can be edited and re-parsed by the standard parser. An
//! editor may supply replacement content by widening a placeholder to the
//! full reference form `[new content][3]`.
//!
//! Because the references have no definitions, a re-parsed redacted copy
//! carries them as literal text runs. Scanning is therefore lexical:
//! bracketed spans that do not parse back to an index stay literal text.

use markdown::mdast::{LinkReference, Node, ReferenceKind, Text};
use tracing::debug;

/// A placeholder occurrence found in a literal text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    /// The index carried by the token. Pairing with source redactions is
    /// positional; this value is informational once the copy has been
    /// edited.
    pub index: usize,
    /// Replacement content from an edited `[content][i]` form.
    pub content: Option<String>,
    /// Byte offset of the opening bracket within the scanned text run.
    pub start: usize,
    /// Byte offset one past the closing bracket.
    pub end: usize,
}

/// Builds the node emitted in place of redaction `index`.
///
/// A shortcut-style reference `[i]`: uniquely identifies which redaction
/// occupies this position and nothing else. No destination, link text, or
/// alt text survives into the output.
pub fn placeholder_node(index: usize) -> Node {
    let label = index.to_string();
    Node::LinkReference(LinkReference {
        children: vec![Node::Text(Text {
            value: label.clone(),
            position: None,
        })],
        position: None,
        reference_kind: ReferenceKind::Shortcut,
        identifier: label.clone(),
        label: Some(label),
    })
}

/// Scans a literal text run for placeholder tokens, left to right.
///
/// Recognizes `[digits]` and `[content][digits]`; the full form wins when
/// both readings apply, matching how markdown resolves reference syntax.
/// Anything else bracket-shaped degrades to literal text.
pub fn scan_placeholders(text: &str) -> Vec<PlaceholderToken> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] != b'[' {
            pos += 1;
            continue;
        }
        match parse_token(text, pos) {
            Some(token) => {
                pos = token.end;
                tokens.push(token);
            }
            None => pos += 1,
        }
    }
    tokens
}

/// Parses the token starting at the bracket at `start`, if any.
fn parse_token(text: &str, start: usize) -> Option<PlaceholderToken> {
    let first_close = find_close(text, start)?;
    let first_inner = &text[start + 1..first_close];

    // Full form: the bracketed span is content and the next span carries the
    // index.
    if text[first_close + 1..].starts_with('[') {
        if let Some(second_close) = find_close(text, first_close + 1) {
            let second_inner = &text[first_close + 2..second_close];
            if let Some(index) = parse_index(second_inner) {
                return Some(PlaceholderToken {
                    index,
                    content: Some(first_inner.to_string()),
                    start,
                    end: second_close + 1,
                });
            }
        }
    }

    let index = parse_index(first_inner)?;
    Some(PlaceholderToken {
        index,
        content: None,
        start,
        end: first_close + 1,
    })
}

/// Finds the closing bracket for the opening bracket at `open`.
///
/// Nested brackets are not placeholder syntax; hitting another opening
/// bracket abandons the candidate.
fn find_close(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = open + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b']' => return Some(pos),
            b'[' => return None,
            _ => pos += 1,
        }
    }
    None
}

fn parse_index(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match raw.parse() {
        Ok(index) => Some(index),
        Err(_) => {
            debug!(raw, "placeholder index out of range, keeping literal text");
            None
        }
    }
}
