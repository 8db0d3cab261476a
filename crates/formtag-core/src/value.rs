//! # Converted Values
//!
//! A parameter string after conversion to its field's native kind. This is
//! what validators inspect and what write-back slots receive.

use std::fmt;

use crate::kind::ScalarKind;

/// A converted input value.
///
/// Integers are widened to 64 bits; the declared width has already been
/// checked by conversion, so narrowing on write-back cannot fail for a
/// value produced against the same kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Textual value, passed through unchanged.
    Text(String),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Double-precision float.
    Float(f64),
    /// Single-precision float. Kept at its own width so it renders the
    /// way an `f32` prints.
    Float32(f32),
    /// Boolean.
    Bool(bool),
}

impl Value {
    /// The kind family of this value. Integer widths are reported as 64
    /// bits since the value itself no longer knows its field.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Value::Text(_) => ScalarKind::Text,
            Value::Int(_) => ScalarKind::Int { bits: 64 },
            Value::Uint(_) => ScalarKind::Uint { bits: 64 },
            Value::Float(_) => ScalarKind::Float { bits: 64 },
            Value::Float32(_) => ScalarKind::Float { bits: 32 },
            Value::Bool(_) => ScalarKind::Bool,
        }
    }

    /// Borrow the text of a `Value::Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders the value the way it would appear in a form, which is the
/// string form handed to regex and custom validators.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::Uint(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Float32(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}
