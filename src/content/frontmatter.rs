//! Front-matter parsing
//!
//! A post header is a block of `key: value` lines between `---` delimiter
//! lines. The parser is deliberately permissive: it never fails, it degrades
//! to partial or empty values instead. Callers rely on that contract and do
//! not handle parse errors.

use indexmap::IndexMap;
use serde::Serialize;

/// Front-matter record from a post or page header.
///
/// An ordered mapping from string key to string value. Keys keep their
/// first-seen insertion order for iteration; a repeated key overwrites the
/// earlier value. Lookup of an absent key yields `None`, never an error.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Parse a front-matter block into a record.
    ///
    /// Each line is split at its first colon: key = text strictly before the
    /// colon, value = trimmed, HTML-escaped remainder. A line with no colon
    /// becomes a key with an empty value. Keys are not trimmed. Literal `---`
    /// lines are ignored rather than parsed.
    pub fn parse(block: &str) -> Self {
        let mut fields = IndexMap::new();

        for line in block.split('\n') {
            if line == "---" {
                continue;
            }
            let (key, value) = match line.find(':') {
                Some(pos) => (&line[..pos], html_escape(line[pos + 1..].trim())),
                None => (line, String::new()),
            };
            fields.insert(key.to_string(), value);
        }

        Self { fields }
    }

    /// Look up a field by key. Absent keys are unset, not an error.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The `published_at` field, or the empty string when absent.
    ///
    /// Format contract: dates are stored as `YYYY-MM-DD`, so plain string
    /// comparison orders them correctly. Any other encoding would misorder.
    /// The empty fallback makes undated posts sort to the end of a
    /// descending index.
    pub fn published_at(&self) -> &str {
        self.get("published_at").unwrap_or("")
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record holds no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in first-seen insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Split a post document on delimiter lines.
///
/// A delimiter is a line that is exactly `---`. Fragments are the raw text
/// runs between delimiters, surrounding newlines included; zero-length
/// fragments are dropped, whitespace-only ones are kept. A document with a
/// single leading delimiter and no closing one still yields its metadata
/// block as fragment zero.
pub fn split_fragments(content: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut cursor = 0;

    for line in content.split_inclusive('\n') {
        let line_start = cursor;
        cursor += line.len();

        let body = line.strip_suffix('\n').unwrap_or(line);
        if body == "---" {
            if line_start > start {
                fragments.push(&content[start..line_start]);
            }
            // The delimiter's own newline belongs to the next fragment
            start = line_start + body.len();
        }
    }

    if start < content.len() {
        fragments.push(&content[start..]);
    }

    fragments
}

/// Escape HTML special characters in a front-matter value
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
