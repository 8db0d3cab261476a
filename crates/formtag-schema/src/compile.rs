//! # Tag Compiler
//!
//! Compiles one field declaration into a [`FieldDescriptor`].
//!
//! ## Algorithm
//!
//! 1. Extract the `validate` key. Its first comma-separated token is the
//!    public parameter name; a field with no `validate` key (or an empty
//!    name) is not bound to any parameter.
//! 2. Each remaining token is `optional`, a `len(..)`/`range(..)` built-in
//!    (type-gated against the field's element kind), or the name of a
//!    registered custom validator. Anything else is an unknown function.
//!    Empty tokens are ignored.
//! 3. The `regex` key, if present and non-empty, becomes a pattern
//!    validator appended after every `validate` directive, so it always
//!    runs last. A `find,` or `match,` prefix selects the mode; match is
//!    the default.
//!
//! Malformed `validate`/`regex` keys are handled per [`TagPolicy`].

use formtag_core::{FieldKind, FieldSpec, ScalarKind, StructTag, TagLookup, TagPolicy};

use crate::args;
use crate::error::TagError;
use crate::registry::ValidatorRegistry;
use crate::validator::{MatchMode, Validator};

const VALIDATE_KEY: &str = "validate";
const REGEX_KEY: &str = "regex";

/// Compiled metadata for one record field. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Declared field name.
    pub field: &'static str,
    /// Public parameter name; empty when the field is not bound.
    pub param: String,
    /// Native kind of the field.
    pub kind: FieldKind,
    /// Whether a missing parameter is skipped instead of rejected.
    pub optional: bool,
    /// Whether the binder may write the field.
    pub settable: bool,
    /// Position in declaration order, used for write-back.
    pub index: usize,
    /// Validators in execution order.
    pub validators: Vec<Validator>,
}

impl FieldDescriptor {
    /// Whether the field is bound to an input parameter.
    pub fn is_bound(&self) -> bool {
        !self.param.is_empty()
    }
}

/// Compiles field declarations against a registry under a tag policy.
#[derive(Debug, Clone, Copy)]
pub struct TagCompiler<'a> {
    registry: &'a ValidatorRegistry,
    policy: TagPolicy,
}

impl<'a> TagCompiler<'a> {
    /// Create a compiler.
    pub fn new(registry: &'a ValidatorRegistry, policy: TagPolicy) -> Self {
        Self { registry, policy }
    }

    /// The policy applied to malformed keys.
    pub fn policy(&self) -> TagPolicy {
        self.policy
    }

    /// Compile every field of a record, in declaration order. Stops at the
    /// first field that fails.
    pub fn compile_all(&self, specs: &[FieldSpec]) -> Result<Vec<FieldDescriptor>, TagError> {
        specs
            .iter()
            .enumerate()
            .map(|(index, spec)| self.compile(index, spec))
            .collect()
    }

    /// Compile a single field declared at `index`.
    pub fn compile(&self, index: usize, spec: &FieldSpec) -> Result<FieldDescriptor, TagError> {
        let mut descriptor = FieldDescriptor {
            field: spec.name,
            param: String::new(),
            kind: spec.kind,
            optional: false,
            settable: spec.settable,
            index,
            validators: Vec::new(),
        };

        let tag = StructTag::new(spec.tag);
        if let Some(directives) = self.extract(&tag, VALIDATE_KEY, spec.name)? {
            self.apply_directives(&directives, &mut descriptor)?;
        }
        if let Some(regex) = self.extract(&tag, REGEX_KEY, spec.name)? {
            if let Some(validator) = pattern_validator(&regex, spec.name)? {
                descriptor.validators.push(validator);
            }
        }

        Ok(descriptor)
    }

    fn extract(
        &self,
        tag: &StructTag<'_>,
        key: &'static str,
        field: &str,
    ) -> Result<Option<String>, TagError> {
        match tag.lookup(key) {
            TagLookup::Found(value) => Ok(Some(value)),
            TagLookup::Absent => Ok(None),
            TagLookup::Malformed => match self.policy {
                TagPolicy::Strict => Err(TagError::Malformed {
                    key,
                    field: field.to_string(),
                }),
                TagPolicy::Lenient => {
                    tracing::debug!(key, field, "ignoring malformed tag key");
                    Ok(None)
                }
            },
        }
    }

    fn apply_directives(&self, directives: &str, descriptor: &mut FieldDescriptor) -> Result<(), TagError> {
        let mut tokens = directives.split(',');
        descriptor.param = tokens.next().unwrap_or_default().to_string();
        if descriptor.param.is_empty() {
            return match self.policy {
                TagPolicy::Strict => Err(TagError::EmptyParameter {
                    field: descriptor.field.to_string(),
                }),
                TagPolicy::Lenient => {
                    tracing::debug!(
                        field = descriptor.field,
                        "ignoring validate tag without parameter name"
                    );
                    Ok(())
                }
            };
        }
        let element = descriptor.kind.element();

        for token in tokens {
            if token.is_empty() {
                continue;
            }
            match directive_name(token) {
                "optional" if token == "optional" => descriptor.optional = true,
                "len" => {
                    let validator = length_validator(token, &descriptor.param, element)?;
                    descriptor.validators.push(validator);
                }
                "range" => {
                    let validator = range_validator(token, &descriptor.param, element)?;
                    descriptor.validators.push(validator);
                }
                _ => {
                    let callback = self.registry.get(token).ok_or_else(|| TagError::UnknownFunction {
                        name: token.to_string(),
                        field: descriptor.field.to_string(),
                    })?;
                    descriptor.validators.push(Validator::custom(token, callback));
                }
            }
        }
        Ok(())
    }
}

/// The part of a directive before its argument list.
fn directive_name(token: &str) -> &str {
    token.split_once('(').map_or(token, |(name, _)| name)
}

fn length_validator(directive: &str, param: &str, kind: ScalarKind) -> Result<Validator, TagError> {
    const FUNCTION: &str = "len";
    if !kind.is_text() {
        return Err(incompatible(FUNCTION, param, kind));
    }
    let (min, max) = args::split_arguments(directive, FUNCTION)?;
    let (min, max) = args::length_bounds(min, max, FUNCTION)?;
    Validator::length(min, max)
}

fn range_validator(directive: &str, param: &str, kind: ScalarKind) -> Result<Validator, TagError> {
    const FUNCTION: &str = "range";
    if !kind.is_numeric() {
        return Err(incompatible(FUNCTION, param, kind));
    }
    let (min, max) = args::split_arguments(directive, FUNCTION)?;
    match kind {
        ScalarKind::Int { .. } => {
            let (min, max) = args::int_bounds(min, max, FUNCTION)?;
            Validator::int_range(min, max)
        }
        ScalarKind::Uint { .. } => {
            let (min, max) = args::uint_bounds(min, max, FUNCTION)?;
            Validator::uint_range(min, max)
        }
        ScalarKind::Float { .. } => {
            let (min, max) = args::float_bounds(min, max, FUNCTION)?;
            Validator::float_range(min, max)
        }
        ScalarKind::Text | ScalarKind::Bool => Err(incompatible(FUNCTION, param, kind)),
    }
}

fn pattern_validator(value: &str, field: &str) -> Result<Option<Validator>, TagError> {
    let (mode, pattern) = if let Some(rest) = value.strip_prefix("find,") {
        (MatchMode::Find, rest)
    } else if let Some(rest) = value.strip_prefix("match,") {
        (MatchMode::Match, rest)
    } else {
        (MatchMode::Match, value)
    };
    if pattern.is_empty() {
        return Ok(None);
    }
    Validator::pattern(pattern, mode, field).map(Some)
}

fn incompatible(function: &str, param: &str, kind: ScalarKind) -> TagError {
    TagError::IncompatibleKind {
        function: function.to_string(),
        param: param.to_string(),
        kind,
    }
}
