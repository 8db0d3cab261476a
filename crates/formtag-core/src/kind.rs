//! # Native Kinds
//!
//! The field types a form record may declare. A field is either a single
//! scalar or a homogeneous sequence of one scalar kind; nested records are
//! not supported.
//!
//! Integer and floating kinds carry their bit width so that conversion can
//! reject values that do not fit the declared field (`"300"` into a `u8`).

use std::fmt;

/// A single native value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// UTF-8 text.
    Text,
    /// Signed integer of the given width.
    Int {
        /// Width in bits (8, 16, 32, 64).
        bits: u32,
    },
    /// Unsigned integer of the given width.
    Uint {
        /// Width in bits (8, 16, 32, 64).
        bits: u32,
    },
    /// IEEE-754 floating point of the given width.
    Float {
        /// Width in bits (32 or 64).
        bits: u32,
    },
    /// Boolean.
    Bool,
}

impl ScalarKind {
    /// Returns true for textual kinds (the only kinds `len` applies to).
    pub const fn is_text(self) -> bool {
        matches!(self, ScalarKind::Text)
    }

    /// Returns true for integer, unsigned and floating kinds (the only
    /// kinds `range` applies to).
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            ScalarKind::Int { .. } | ScalarKind::Uint { .. } | ScalarKind::Float { .. }
        )
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Text => write!(f, "string"),
            ScalarKind::Int { bits } => write!(f, "i{bits}"),
            ScalarKind::Uint { bits } => write!(f, "u{bits}"),
            ScalarKind::Float { bits } => write!(f, "f{bits}"),
            ScalarKind::Bool => write!(f, "bool"),
        }
    }
}

/// The declared shape of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// One value; extra inputs are ignored.
    Scalar(ScalarKind),
    /// One value per input, in input order.
    List(ScalarKind),
}

impl FieldKind {
    /// The kind each individual input converts to. Directives are
    /// type-gated against this, so `len` is valid on `Vec<String>`.
    pub const fn element(self) -> ScalarKind {
        match self {
            FieldKind::Scalar(kind) | FieldKind::List(kind) => kind,
        }
    }

    /// Returns true for sequence fields.
    pub const fn is_list(self) -> bool {
        matches!(self, FieldKind::List(_))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar(kind) => write!(f, "{kind}"),
            FieldKind::List(kind) => write!(f, "Vec<{kind}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(ScalarKind::Text.to_string(), "string");
        assert_eq!(ScalarKind::Int { bits: 8 }.to_string(), "i8");
        assert_eq!(ScalarKind::Uint { bits: 64 }.to_string(), "u64");
        assert_eq!(ScalarKind::Float { bits: 32 }.to_string(), "f32");
        assert_eq!(FieldKind::List(ScalarKind::Bool).to_string(), "Vec<bool>");
    }

    #[test]
    fn test_element_unwraps_list() {
        let kind = FieldKind::List(ScalarKind::Text);
        assert!(kind.is_list());
        assert!(kind.element().is_text());
        assert!(!FieldKind::Scalar(ScalarKind::Bool).is_list());
    }

    #[test]
    fn test_numeric_classification() {
        assert!(ScalarKind::Int { bits: 32 }.is_numeric());
        assert!(ScalarKind::Uint { bits: 16 }.is_numeric());
        assert!(ScalarKind::Float { bits: 64 }.is_numeric());
        assert!(!ScalarKind::Text.is_numeric());
        assert!(!ScalarKind::Bool.is_numeric());
        assert!(!ScalarKind::Bool.is_text());
    }
}
