//! # Assignment Engine
//!
//! Walks a record's compiled descriptors in declaration order and, for
//! each bound field, converts, validates, and writes the supplied input.
//!
//! ## Per-field rules
//!
//! 1. A field with no parameter name is skipped.
//! 2. A bound field that is not visible fails with `NotSettable`.
//! 3. No values: a required field fails with `MissingParameter`; an
//!    optional one is skipped. An optional field whose only value is the
//!    empty string is also skipped.
//! 4. Sequence fields are resized to the number of values and filled in
//!    input order. Scalar fields take the first value only.
//! 5. Each value is converted, then every validator runs in order; the
//!    value is written only after all of them pass.
//!
//! The first error ends the call. Fields (and sequence elements) written
//! before it stay written.

use formtag_core::Value;
use formtag_schema::FieldDescriptor;

use crate::convert::convert;
use crate::error::FormError;
use crate::form::Form;
use crate::params::Params;
use crate::slot::Slot;

/// Bind `params` onto `form` using `descriptors` compiled for `F`.
pub(crate) fn assign<F: Form>(
    descriptors: &[FieldDescriptor],
    params: &Params,
    form: &mut F,
) -> Result<(), FormError> {
    for descriptor in descriptors {
        if !descriptor.is_bound() {
            tracing::trace!(field = descriptor.field, "field not bound, skipping");
            continue;
        }
        if let Err(error) = assign_field(descriptor, params.get(&descriptor.param), form) {
            tracing::debug!(
                field = descriptor.field,
                param = %descriptor.param,
                error = %error,
                "field assignment failed"
            );
            return Err(error);
        }
    }
    Ok(())
}

fn assign_field<F: Form>(
    descriptor: &FieldDescriptor,
    values: &[String],
    form: &mut F,
) -> Result<(), FormError> {
    let not_settable = || FormError::NotSettable {
        field: descriptor.field.to_string(),
    };
    if !descriptor.settable {
        return Err(not_settable());
    }

    if values.is_empty() && !descriptor.optional {
        return Err(FormError::MissingParameter {
            param: descriptor.param.clone(),
        });
    }
    if descriptor.optional && (values.is_empty() || values == [""]) {
        tracing::trace!(field = descriptor.field, "optional parameter absent, skipping");
        return Ok(());
    }

    match form.slot(descriptor.index).ok_or_else(not_settable)? {
        Slot::Scalar(target) => {
            let first = values.first().ok_or_else(|| FormError::MissingParameter {
                param: descriptor.param.clone(),
            })?;
            let value = checked_value(descriptor, first)?;
            if !target.set(value) {
                return Err(not_settable());
            }
        }
        Slot::List(target) => {
            target.reset(values.len());
            for (index, text) in values.iter().enumerate() {
                let value = checked_value(descriptor, text)?;
                if !target.set(index, value) {
                    return Err(not_settable());
                }
            }
        }
    }

    tracing::trace!(field = descriptor.field, values = values.len(), "field assigned");
    Ok(())
}

/// Convert one input and run every validator against it.
fn checked_value(descriptor: &FieldDescriptor, text: &str) -> Result<Value, FormError> {
    let value = convert(text, descriptor.kind.element(), &descriptor.param)?;
    for validator in &descriptor.validators {
        validator.validate(&descriptor.param, &value)?;
    }
    Ok(value)
}
