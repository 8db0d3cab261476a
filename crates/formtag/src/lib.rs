//! # formtag — Tag-Driven Form Binding
//!
//! Populates annotated records from string-valued input parameters, such
//! as a decoded HTML form, converting each value to the field's native
//! type and running the validators declared in the field's annotation.
//!
//! ```
//! formtag::form! {
//!     #[derive(Debug, Default)]
//!     pub struct Profile {
//!         pub name: String => r#"validate:"name,len(0:5)""#,
//!         pub age: i32 => r#"validate:"age,range(1:10)""#,
//!     }
//! }
//!
//! let params = formtag::Params::from_query("name=John&age=1");
//! let mut profile = Profile::default();
//! formtag::assign(&params, &mut profile).unwrap();
//! assert_eq!((profile.name.as_str(), profile.age), ("John", 1));
//! ```
//!
//! ## Annotation Syntax
//!
//! ```text
//! validate:"<param>[,optional][,range(min:max)][,len(min:max)][,<custom>]*"
//! regex:"[find,|match,]<pattern>"
//! ```
//!
//! ## Architecture
//!
//! - [`form!`] and [`Form`] describe a record's fields and give the binder
//!   positional write access ([`Slot`]).
//! - [`Decoder`] compiles each record type once (via `formtag-schema`),
//!   caches the result, and runs the assignment engine.
//! - The free functions [`register`], [`assign`] and [`assign_single`]
//!   use [`Decoder::global`].
//!
//! ## Crate Policy
//!
//! - No subscriber is installed; events go through `tracing`.
//! - Assignment fails fast. Fields before the failing one stay written.

pub mod config;
pub mod convert;
pub mod decoder;
mod engine;
pub mod error;
pub mod form;
pub mod params;
pub mod slot;

pub use config::{ConfigError, DecoderConfig};
pub use decoder::Decoder;
pub use error::FormError;
pub use form::Form;
pub use params::Params;
pub use slot::{FieldSlot, ListSlot, Scalar, ScalarSlot, Slot};

pub use formtag_core::{
    ConversionError, FieldKind, FieldSpec, ScalarKind, TagPolicy, ValidationError, Value,
};
pub use formtag_schema::{
    CustomResult, Descriptors, FieldDescriptor, MatchMode, RegistryError, TagError, Validator,
};

use std::collections::HashMap;

/// Register a custom validator on the global decoder.
pub fn register<F>(name: impl Into<String>, callback: F) -> Result<(), FormError>
where
    F: Fn(&str) -> CustomResult + Send + Sync + 'static,
{
    Decoder::global().register(name, callback)
}

/// Populate `form` from `params` using the global decoder.
pub fn assign<F: Form>(params: &Params, form: &mut F) -> Result<(), FormError> {
    Decoder::global().assign(params, form)
}

/// Populate `form` from a flat name → value map using the global decoder.
pub fn assign_single<F: Form>(params: &HashMap<String, String>, form: &mut F) -> Result<(), FormError> {
    Decoder::global().assign_single(params, form)
}
