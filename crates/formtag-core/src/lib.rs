//! # formtag-core — Foundational Types for Form Binding
//!
//! This crate is the leaf of the formtag workspace. It defines the closed
//! set of native kinds a form record may declare, the converted value
//! representation handed to validators, the per-field declaration that
//! replaces runtime reflection, and the extraction of `key:"value"`
//! annotation text.
//!
//! ## Key Design Principles
//!
//! 1. **Closed kind model.** `ScalarKind` and `FieldKind` enumerate every
//!    supported field type. Conversion and validation match on them
//!    exhaustively; adding a kind forces every consumer to handle it.
//!
//! 2. **Explicit metadata.** Records describe themselves with
//!    `FieldSpec` values in declaration order. Nothing is discovered at
//!    runtime.
//!
//! 3. **Tag text is untrusted input.** `StructTag` never panics on
//!    malformed annotations and reports them as `TagLookup::Malformed`
//!    so the compiler can apply its `TagPolicy`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `formtag-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod field;
pub mod kind;
pub mod tag;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{ConversionError, ParseTagPolicyError, ValidationError};
pub use field::FieldSpec;
pub use kind::{FieldKind, ScalarKind};
pub use tag::{StructTag, TagLookup, TagPolicy};
pub use value::Value;
