//! # formtag-schema — Tag Compilation
//!
//! Turns a record's field declarations into compiled field descriptors:
//! public parameter name, optional flag, and an ordered list of
//! validators. Compilation happens once per record type and the result is
//! shared by every caller through the [`DescriptorCache`].
//!
//! ## Directive Syntax
//!
//! ```text
//! validate:"<param>[,optional][,range(min:max)][,len(min:max)][,<custom>]*"
//! regex:"[find,|match,]<pattern>"
//! ```
//!
//! - [`args`] splits `name(a:b)` directives and parses their bounds.
//! - [`validator`] holds the validator variants and their checks.
//! - [`compile`] applies the grammar to one field and type-gates each
//!   directive against the field's kind.
//! - [`registry`] stores user-supplied validators looked up by name.
//! - [`cache`] memoizes compiled descriptors per record type.
//!
//! ## Crate Policy
//!
//! - Depends only on `formtag-core` internally.
//! - Compilation never mutates shared state except through the cache's
//!   insert-if-absent installation.
//! - A failed compilation is never cached.

pub mod args;
pub mod cache;
pub mod compile;
pub mod error;
pub mod registry;
pub mod validator;

pub use cache::{DescriptorCache, Descriptors};
pub use compile::{FieldDescriptor, TagCompiler};
pub use error::{RegistryError, TagError};
pub use registry::{ValidatorRegistry, RESERVED_NAMES};
pub use validator::{CustomFn, CustomResult, MatchMode, Validator};
