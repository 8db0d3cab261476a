//! # Validators
//!
//! Validators are built once at compile time and never mutated. Each one
//! checks a converted value and reports failure as a [`ValidationError`]
//! carrying the parameter name and the value rendered as text.
//!
//! Bounds are inclusive at both ends. Construction enforces `min <= max`.

use std::fmt;
use std::sync::Arc;

use formtag_core::{ValidationError, Value};
use regex::Regex;

use crate::error::TagError;

/// Result type returned by custom validator callbacks.
pub type CustomResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// A user-supplied validator. It receives the value rendered as text.
pub type CustomFn = Arc<dyn Fn(&str) -> CustomResult + Send + Sync>;

/// How a `regex` directive applies its pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The pattern must match the entire value.
    Match,
    /// The pattern must occur somewhere in the value.
    Find,
}

/// A compiled validation rule.
#[derive(Clone)]
pub enum Validator {
    /// Signed range for integer fields.
    IntRange {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// Unsigned range for unsigned fields.
    UintRange {
        /// Inclusive lower bound.
        min: u64,
        /// Inclusive upper bound.
        max: u64,
    },
    /// Floating range for float fields.
    FloatRange {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// Byte length of a textual value.
    Length {
        /// Inclusive minimum length.
        min: usize,
        /// Inclusive maximum length.
        max: usize,
    },
    /// Regular expression over the rendered value.
    Pattern {
        /// Pattern as written in the tag.
        pattern: String,
        /// Compiled form (anchored for `MatchMode::Match`).
        regex: Regex,
        /// Application mode.
        mode: MatchMode,
    },
    /// Registered user callback.
    Custom {
        /// Name the callback was registered under.
        name: String,
        /// The callback.
        callback: CustomFn,
    },
}

impl Validator {
    /// Signed range; fails if `max < min`.
    pub fn int_range(min: i64, max: i64) -> Result<Self, TagError> {
        check_order(min, max, "range")?;
        Ok(Validator::IntRange { min, max })
    }

    /// Unsigned range; fails if `max < min`.
    pub fn uint_range(min: u64, max: u64) -> Result<Self, TagError> {
        check_order(min, max, "range")?;
        Ok(Validator::UintRange { min, max })
    }

    /// Floating range; fails if `max < min` or either bound is NaN.
    pub fn float_range(min: f64, max: f64) -> Result<Self, TagError> {
        if min.is_nan() || max.is_nan() {
            return Err(TagError::InvalidArgument {
                function: "range".to_string(),
                value: (if min.is_nan() { min } else { max }).to_string(),
                expected: "float",
            });
        }
        check_order(min, max, "range")?;
        Ok(Validator::FloatRange { min, max })
    }

    /// Length bounds; fails if `max < min`.
    pub fn length(min: usize, max: usize) -> Result<Self, TagError> {
        check_order(min, max, "len")?;
        Ok(Validator::Length { min, max })
    }

    /// Compile a pattern. Match mode anchors the pattern at both ends so
    /// the whole value has to satisfy it.
    ///
    /// The pattern must compile on its own before it is wrapped, so text
    /// like `a)|(b` cannot close the anchoring group early.
    pub fn pattern(pattern: &str, mode: MatchMode, field: &str) -> Result<Self, TagError> {
        let error = |source: regex::Error| TagError::Pattern {
            field: field.to_string(),
            source,
        };
        let bare = Regex::new(pattern).map_err(error)?;
        let regex = match mode {
            MatchMode::Find => bare,
            // A trailing `(?x)` comment swallows the closing text; a newline
            // ends the comment and is insignificant whitespace in that mode.
            MatchMode::Match => Regex::new(&format!("^(?:{pattern})$"))
                .or_else(|_| Regex::new(&format!("^(?:{pattern}\n)$")))
                .map_err(error)?,
        };
        Ok(Validator::Pattern {
            pattern: pattern.to_string(),
            regex,
            mode,
        })
    }

    /// Wrap a registered callback.
    pub fn custom(name: impl Into<String>, callback: CustomFn) -> Self {
        Validator::Custom {
            name: name.into(),
            callback,
        }
    }

    /// Short name used in logs and debug output.
    pub fn name(&self) -> &str {
        match self {
            Validator::IntRange { .. } | Validator::UintRange { .. } | Validator::FloatRange { .. } => {
                "range"
            }
            Validator::Length { .. } => "len",
            Validator::Pattern { .. } => "regex",
            Validator::Custom { name, .. } => name,
        }
    }

    /// Check `value` for parameter `param`. A value of the wrong family for
    /// a range or length validator fails rather than panicking.
    pub fn validate(&self, param: &str, value: &Value) -> Result<(), ValidationError> {
        let passed = match (self, value) {
            (Validator::IntRange { min, max }, Value::Int(n)) => (*min..=*max).contains(n),
            (Validator::UintRange { min, max }, Value::Uint(n)) => (*min..=*max).contains(n),
            (Validator::FloatRange { min, max }, Value::Float(n)) => (*min..=*max).contains(n),
            (Validator::FloatRange { min, max }, Value::Float32(n)) => {
                (*min..=*max).contains(&f64::from(*n))
            }
            (Validator::Length { min, max }, Value::Text(s)) => (*min..=*max).contains(&s.len()),
            (Validator::Pattern { regex, .. }, value) => regex.is_match(&value.to_string()),
            (Validator::Custom { callback, .. }, value) => {
                let rendered = value.to_string();
                return callback(&rendered)
                    .map_err(|e| ValidationError::new(param, rendered).with_reason(e.to_string()));
            }
            _ => false,
        };

        if passed {
            Ok(())
        } else {
            Err(ValidationError::new(param, value.to_string()))
        }
    }
}

fn check_order<T: PartialOrd + fmt::Display>(min: T, max: T, function: &str) -> Result<(), TagError> {
    if max < min {
        return Err(TagError::InvertedBounds {
            function: function.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::IntRange { min, max } => write!(f, "IntRange({min}..={max})"),
            Validator::UintRange { min, max } => write!(f, "UintRange({min}..={max})"),
            Validator::FloatRange { min, max } => write!(f, "FloatRange({min}..={max})"),
            Validator::Length { min, max } => write!(f, "Length({min}..={max})"),
            Validator::Pattern { pattern, mode, .. } => write!(f, "Pattern({mode:?}, {pattern:?})"),
            Validator::Custom { name, .. } => write!(f, "Custom({name:?})"),
        }
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Validator::IntRange { min: a, max: b }, Validator::IntRange { min: c, max: d }) => {
                a == c && b == d
            }
            (Validator::UintRange { min: a, max: b }, Validator::UintRange { min: c, max: d }) => {
                a == c && b == d
            }
            (Validator::FloatRange { min: a, max: b }, Validator::FloatRange { min: c, max: d }) => {
                a == c && b == d
            }
            (Validator::Length { min: a, max: b }, Validator::Length { min: c, max: d }) => {
                a == c && b == d
            }
            (
                Validator::Pattern { pattern: a, mode: m, .. },
                Validator::Pattern { pattern: b, mode: n, .. },
            ) => a == b && m == n,
            (
                Validator::Custom { name: a, callback: f },
                Validator::Custom { name: b, callback: g },
            ) => a == b && Arc::ptr_eq(f, g),
            _ => false,
        }
    }
}
