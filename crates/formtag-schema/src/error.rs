//! # Compile-Time Errors
//!
//! Everything that can go wrong while turning annotation text into a field
//! descriptor, plus registry misuse. These surface from the first
//! assignment of a record type and are never cached.

use formtag_core::ScalarKind;
use thiserror::Error;

/// A tag could not be compiled into a field descriptor.
#[derive(Error, Debug, Clone)]
pub enum TagError {
    /// A `len`/`range` directive is not shaped `name(min:max)`.
    #[error("invalid number of arguments to {function} validator function in {directive:?}")]
    ArgumentCount {
        /// Directive name (`len` or `range`).
        function: String,
        /// The directive as written.
        directive: String,
    },

    /// A directive argument is not a number of the expected family.
    #[error("{function} argument {value:?} is not a valid {expected}")]
    InvalidArgument {
        /// Directive name.
        function: String,
        /// The offending argument token.
        value: String,
        /// Expected number family, e.g. "unsigned integer".
        expected: &'static str,
    },

    /// The upper bound is below the lower bound.
    #[error("{function} bounds inverted: max {max} < min {min}")]
    InvertedBounds {
        /// Directive name.
        function: String,
        /// Lower bound as written.
        min: String,
        /// Upper bound as written.
        max: String,
    },

    /// The directive cannot operate on the field's kind (`len` on a number,
    /// `range` on text).
    #[error("{function} function for {param} is invalid for {kind}")]
    IncompatibleKind {
        /// Directive name.
        function: String,
        /// Public parameter name of the field.
        param: String,
        /// The field's element kind.
        kind: ScalarKind,
    },

    /// The directive is neither built in nor registered.
    #[error("unknown validation function {name:?} on field {field}")]
    UnknownFunction {
        /// Directive as written.
        name: String,
        /// Declared field name.
        field: String,
    },

    /// The `validate` or `regex` key is present but its value could not be
    /// extracted.
    #[error("{key} tag for {field} was not set correctly")]
    Malformed {
        /// The tag key (`validate` or `regex`).
        key: &'static str,
        /// Declared field name.
        field: String,
    },

    /// The `validate` key is present but names no parameter, as in
    /// `validate:""` or `validate:",len(1:2)"`.
    #[error("validate tag for {field} has no parameter name")]
    EmptyParameter {
        /// Declared field name.
        field: String,
    },

    /// The `regex` value is not a valid pattern.
    #[error("invalid regex for field {field}: {source}")]
    Pattern {
        /// Declared field name.
        field: String,
        /// Error reported by the pattern engine.
        #[source]
        source: regex::Error,
    },
}

/// A custom validator could not be registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The name collides with a built-in directive.
    #[error("supplied function {name} matches built in name")]
    ReservedName {
        /// The rejected name.
        name: String,
    },

    /// Empty names can never be referenced from a tag.
    #[error("custom validator name must not be empty")]
    EmptyName,
}
