//! # Form Records
//!
//! A record type describes its fields through [`Form`]: the declarations
//! the tag compiler reads, and positional write access for the binder.
//! The [`form!`](crate::form) macro declares a struct and derives both.
//!
//! ```
//! formtag::form! {
//!     #[derive(Debug, Default)]
//!     pub struct SignUp {
//!         pub name: String => r#"validate:"name,len(1:20)""#,
//!         pub age: u8 => r#"validate:"age,range(18:120)""#,
//!         pub tags: Vec<String> => r#"validate:"tag,optional""#,
//!         pub note: String,
//!     }
//! }
//!
//! let params = formtag::Params::from_query("name=Ada&age=36");
//! let mut form = SignUp::default();
//! formtag::assign(&params, &mut form).unwrap();
//! assert_eq!(form.age, 36);
//! ```
//!
//! Fields declared without `pub` are not visible to the binder. Tagging
//! one with a parameter name makes every assignment fail with
//! [`FormError::NotSettable`](crate::FormError::NotSettable).

use formtag_core::FieldSpec;

use crate::slot::Slot;

/// A record the binder can populate.
pub trait Form: 'static {
    /// Field declarations in declaration order.
    fn fields() -> Vec<FieldSpec>;

    /// Open the field at `index` (declaration order) for writing.
    fn slot(&mut self, index: usize) -> Option<Slot<'_>>;
}

/// Declare a struct and implement [`Form`] for it.
///
/// Each field is `[pub] name: Type [=> "tag text"]`, where `Type` is one
/// of the supported scalars or a `Vec` of one.
#[macro_export]
macro_rules! form {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(=> $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Form for $name {
            fn fields() -> ::std::vec::Vec<$crate::FieldSpec> {
                ::std::vec![$(
                    {
                        let spec = $crate::FieldSpec::new(
                            ::std::stringify!($field),
                            <$ty as $crate::FieldSlot>::KIND,
                            $crate::__form_tag!($($tag)?),
                        );
                        if ::std::stringify!($field_vis).is_empty() {
                            spec.hidden()
                        } else {
                            spec
                        }
                    }
                ),*]
            }

            #[allow(unused_assignments, unused_mut, unused_variables)]
            fn slot(&mut self, index: usize) -> ::std::option::Option<$crate::Slot<'_>> {
                let mut position = 0usize;
                $(
                    if index == position {
                        return ::std::option::Option::Some(
                            $crate::FieldSlot::slot(&mut self.$field),
                        );
                    }
                    position += 1;
                )*
                ::std::option::Option::None
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __form_tag {
    () => {
        ""
    };
    ($tag:literal) => {
        $tag
    };
}
