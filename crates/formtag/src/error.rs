//! Top-level error type returned by every binding operation.

use thiserror::Error;

use formtag_core::{ConversionError, ValidationError};
use formtag_schema::{RegistryError, TagError};

/// Errors returned by [`Decoder`](crate::Decoder) and the free functions.
#[derive(Error, Debug)]
pub enum FormError {
    /// The record's annotations could not be compiled.
    #[error("tag error: {0}")]
    Tag(#[from] TagError),

    /// A custom validator could not be registered.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// An input string did not convert to the field's kind.
    #[error("{0}")]
    Conversion(#[from] ConversionError),

    /// A converted value failed a validator.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A required parameter was not supplied.
    #[error("parameter {param} does not exist in input")]
    MissingParameter {
        /// Public parameter name.
        param: String,
    },

    /// The field is bound to a parameter but cannot be written.
    #[error("struct field {field} is not settable")]
    NotSettable {
        /// Declared field name.
        field: String,
    },
}

impl FormError {
    /// The public parameter name involved, when the error is about input.
    pub fn param(&self) -> Option<&str> {
        match self {
            FormError::Conversion(e) => Some(&e.param),
            FormError::Validation(e) => Some(&e.param),
            FormError::MissingParameter { param } => Some(param),
            FormError::Tag(_) | FormError::Registry(_) | FormError::NotSettable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_accessor() {
        let missing = FormError::MissingParameter { param: "age".into() };
        assert_eq!(missing.param(), Some("age"));
        assert_eq!(missing.to_string(), "parameter age does not exist in input");

        let invalid: FormError = ValidationError::new("name", "AAAA").into();
        assert_eq!(invalid.param(), Some("name"));

        let hidden = FormError::NotSettable { field: "secret".into() };
        assert_eq!(hidden.param(), None);
        assert_eq!(hidden.to_string(), "struct field secret is not settable");
    }
}
