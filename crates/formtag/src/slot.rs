//! # Write-Back Slots
//!
//! A record hands the binder mutable access to one field at a time as a
//! [`Slot`]. Scalar fields accept a single converted [`Value`]; sequence
//! fields are resized to the input length and filled element by element.
//!
//! Every supported native type implements [`Scalar`], and both `T` and
//! `Vec<T>` implement [`FieldSlot`], which is what the [`form!`](crate::form)
//! macro relies on to derive a field's kind and slot.

use formtag_core::{FieldKind, ScalarKind, Value};

/// A native type a converted value can be written into.
pub trait Scalar: Default + Sized {
    /// Native kind, including bit width.
    const KIND: ScalarKind;

    /// Narrow a converted value into this type. Returns `None` when the
    /// value belongs to another family or does not fit.
    fn from_value(value: Value) -> Option<Self>;
}

/// Mutable access to a scalar field.
pub trait ScalarSlot {
    /// Kind of the underlying field.
    fn kind(&self) -> ScalarKind;

    /// Overwrite the field. Returns `false` if `value` does not fit.
    fn set(&mut self, value: Value) -> bool;
}

/// Mutable access to a sequence field.
pub trait ListSlot {
    /// Kind of each element.
    fn element(&self) -> ScalarKind;

    /// Replace the sequence with `len` zero-valued elements.
    fn reset(&mut self, len: usize);

    /// Overwrite element `index`. Returns `false` if the index is out of
    /// range or `value` does not fit.
    fn set(&mut self, index: usize, value: Value) -> bool;
}

/// A field opened for writing.
pub enum Slot<'a> {
    /// Single-valued field.
    Scalar(&'a mut dyn ScalarSlot),
    /// Homogeneous sequence field.
    List(&'a mut dyn ListSlot),
}

/// Types that can appear as a record field.
pub trait FieldSlot {
    /// Kind recorded in the field's declaration.
    const KIND: FieldKind;

    /// Open the field for writing.
    fn slot(&mut self) -> Slot<'_>;
}

impl<T: Scalar> ScalarSlot for T {
    fn kind(&self) -> ScalarKind {
        T::KIND
    }

    fn set(&mut self, value: Value) -> bool {
        match T::from_value(value) {
            Some(native) => {
                *self = native;
                true
            }
            None => false,
        }
    }
}

impl<T: Scalar> ListSlot for Vec<T> {
    fn element(&self) -> ScalarKind {
        T::KIND
    }

    fn reset(&mut self, len: usize) {
        self.clear();
        self.resize_with(len, T::default);
    }

    fn set(&mut self, index: usize, value: Value) -> bool {
        match (self.get_mut(index), T::from_value(value)) {
            (Some(element), Some(native)) => {
                *element = native;
                true
            }
            _ => false,
        }
    }
}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::Text;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

macro_rules! int_scalar {
    ($($ty:ty),*) => {$(
        impl Scalar for $ty {
            const KIND: ScalarKind = ScalarKind::Int { bits: <$ty>::BITS };

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::Int(n) => <$ty>::try_from(n).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! uint_scalar {
    ($($ty:ty),*) => {$(
        impl Scalar for $ty {
            const KIND: ScalarKind = ScalarKind::Uint { bits: <$ty>::BITS };

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::Uint(n) => <$ty>::try_from(n).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

int_scalar!(i8, i16, i32, i64, isize);
uint_scalar!(u8, u16, u32, u64, usize);

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::Float { bits: 32 };

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float32(n) => Some(n),
            _ => None,
        }
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Float { bits: 64 };

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(n) => Some(n),
            Value::Float32(n) => Some(f64::from(n)),
            _ => None,
        }
    }
}

macro_rules! field_slot {
    ($($ty:ty),*) => {$(
        impl FieldSlot for $ty {
            const KIND: FieldKind = FieldKind::Scalar(<$ty as Scalar>::KIND);

            fn slot(&mut self) -> Slot<'_> {
                Slot::Scalar(self)
            }
        }

        impl FieldSlot for Vec<$ty> {
            const KIND: FieldKind = FieldKind::List(<$ty as Scalar>::KIND);

            fn slot(&mut self) -> Slot<'_> {
                Slot::List(self)
            }
        }
    )*};
}

field_slot!(String, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
