//! # Record Field Declarations
//!
//! A `FieldSpec` is what a record type says about one of its fields: the
//! declared name, the native kind, the raw annotation text, and whether the
//! binder is allowed to write it. Records list their specs in declaration
//! order; the position in that list is the field's index for write-back.

use crate::kind::FieldKind;

/// Declaration of a single record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Declared field name (used in error messages, never for lookup).
    pub name: &'static str,
    /// Native kind of the field.
    pub kind: FieldKind,
    /// Raw annotation text, e.g. `validate:"age,range(1:10)"`.
    pub tag: &'static str,
    /// Whether the field is visible to the binder. Hidden fields that carry
    /// a parameter name fail assignment with a not-settable error.
    pub settable: bool,
}

impl FieldSpec {
    /// Declare a writable field.
    pub const fn new(name: &'static str, kind: FieldKind, tag: &'static str) -> Self {
        Self {
            name,
            kind,
            tag,
            settable: true,
        }
    }

    /// Mark the field as not writable by the binder.
    pub const fn hidden(mut self) -> Self {
        self.settable = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ScalarKind;

    #[test]
    fn test_new_is_settable() {
        let spec = FieldSpec::new("Name", FieldKind::Scalar(ScalarKind::Text), "");
        assert!(spec.settable);
        assert!(!spec.hidden().settable);
    }
}
