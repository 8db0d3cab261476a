//! # Annotation Text
//!
//! Record fields carry their directives as annotation text made of
//! space-separated `key:"value"` pairs:
//!
//! ```text
//! validate:"state,len(2:2)" regex:"^[A-Za-z]*$"
//! ```
//!
//! Values are double-quoted; inside them `\\`, `\"`, `\'`, `\n`, `\t` and
//! `\r` are recognised escapes and any other backslash sequence is a syntax
//! error. Parsing runs left to right and stops at the first syntax error.
//!
//! ## Malformed Keys
//!
//! A key that was not cleanly extracted, but whose name still appears in
//! the text outside every cleanly parsed value, is reported as
//! [`TagLookup::Malformed`]. This catches `regex: "x"`, `regex,"x"`,
//! `regex:'x'` and `validate:"a",regex:"x"` while leaving a value such as
//! `validate:"regex_field"` alone. What happens next is decided by the
//! compiler's [`TagPolicy`].

use std::fmt;
use std::str::FromStr;

use crate::error::ParseTagPolicyError;

/// How the compiler treats a malformed `validate` or `regex` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagPolicy {
    /// Fail compilation with a malformed-tag error naming key and field.
    #[default]
    Strict,
    /// Treat the malformed key as absent.
    Lenient,
}

impl fmt::Display for TagPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagPolicy::Strict => write!(f, "strict"),
            TagPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for TagPolicy {
    type Err = ParseTagPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(TagPolicy::Strict),
            "lenient" => Ok(TagPolicy::Lenient),
            _ => Err(ParseTagPolicyError(s.to_string())),
        }
    }
}

/// Result of looking up one key in annotation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLookup {
    /// The key was present with a cleanly parsed (unescaped) value.
    Found(String),
    /// The key does not appear.
    Absent,
    /// The key appears but its value could not be extracted.
    Malformed,
}

/// Borrowed annotation text for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructTag<'a> {
    raw: &'a str,
}

/// Pairs extracted before the first syntax error, plus everything that was
/// not inside a cleanly parsed value.
struct ParsedTag<'a> {
    pairs: Vec<(&'a str, String)>,
    residue: String,
}

impl<'a> StructTag<'a> {
    /// Wrap raw annotation text.
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The raw text.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Look up `key`. The first occurrence wins when a key is repeated.
    pub fn lookup(&self, key: &str) -> TagLookup {
        let parsed = self.parse();
        if let Some((_, value)) = parsed.pairs.into_iter().find(|(k, _)| *k == key) {
            return TagLookup::Found(value);
        }
        if !key.is_empty() && parsed.residue.contains(key) {
            TagLookup::Malformed
        } else {
            TagLookup::Absent
        }
    }

    fn parse(&self) -> ParsedTag<'a> {
        let raw = self.raw;
        let bytes = raw.as_bytes();
        let mut pairs = Vec::new();
        let mut residue = String::new();
        let mut i = 0;

        loop {
            while i < bytes.len() && bytes[i] == b' ' {
                i += 1;
            }
            if i >= bytes.len() {
                break;
            }

            // Key: printable, stops at ':' or '"'.
            let start = i;
            while i < bytes.len()
                && bytes[i] > b' '
                && bytes[i] != b':'
                && bytes[i] != b'"'
                && bytes[i] != 0x7f
            {
                i += 1;
            }
            if i == start || i + 1 >= bytes.len() || bytes[i] != b':' || bytes[i + 1] != b'"' {
                residue.push_str(&raw[start..]);
                break;
            }
            let key = &raw[start..i];
            residue.push_str(key);
            residue.push(' ');

            // Quoted value.
            i += 1;
            let open = i;
            i += 1;
            while i < bytes.len() && bytes[i] != b'"' {
                if bytes[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            if i >= bytes.len() {
                residue.push_str(&raw[start..]);
                break;
            }
            let quoted = &raw[open + 1..i];
            i += 1;

            match unescape(quoted) {
                Some(value) => pairs.push((key, value)),
                None => {
                    residue.push_str(&raw[start..]);
                    break;
                }
            }
        }

        ParsedTag { pairs, residue }
    }
}

fn unescape(quoted: &str) -> Option<String> {
    let mut out = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            _ => return None,
        }
    }
    Some(out)
}
