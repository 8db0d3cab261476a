//! # Error Types — Conversion and Validation Failures
//!
//! The runtime failures shared by the compile side (validators live in
//! `formtag-schema`) and the bind side (conversion lives in `formtag`).
//! Compile-time tag errors are defined next to the tag compiler.

use thiserror::Error;

use crate::kind::ScalarKind;

/// A converted value was rejected by a validator.
///
/// Every validator variant reports this same shape: the public parameter
/// name, the offending value rendered as text, and an optional reason
/// supplied by custom callbacks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("param {param} failed validation with value {value:?}{}", reason_suffix(.reason))]
pub struct ValidationError {
    /// Public parameter name.
    pub param: String,
    /// Offending value rendered as text.
    pub value: String,
    /// Reason reported by a custom validator, if any.
    pub reason: Option<String>,
}

impl ValidationError {
    /// Validation failure without an explanatory reason.
    pub fn new(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            value: value.into(),
            reason: None,
        }
    }

    /// Attach the reason returned by a custom callback.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(r) => format!(": {r}"),
        None => String::new(),
    }
}

/// Input text could not be parsed into the field's native kind, or the
/// parsed number does not fit the declared width.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("error parsing parameter {param} with value {value:?} into value of type {kind}")]
pub struct ConversionError {
    /// Public parameter name.
    pub param: String,
    /// The input text that failed to convert.
    pub value: String,
    /// Target kind.
    pub kind: ScalarKind,
}

/// An unrecognised tag policy name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tag policy {0:?}; expected \"strict\" or \"lenient\"")]
pub struct ParseTagPolicyError(pub String);
