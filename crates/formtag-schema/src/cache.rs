//! # Descriptor Cache
//!
//! Memoizes compiled field descriptors per record type so annotation text
//! is parsed once per type for the life of the cache.
//!
//! ## Concurrency
//!
//! Lookups take the shared lock. On a miss the descriptors are compiled
//! with no lock held, then installed under the exclusive lock with
//! insert-if-absent semantics: when two callers race on the same uncached
//! type both compile, the first installation wins, and both get the same
//! shared list back. Failed compilations are returned to the caller and
//! never installed.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use formtag_core::FieldSpec;
use parking_lot::RwLock;

use crate::compile::{FieldDescriptor, TagCompiler};
use crate::error::TagError;

/// Shared, immutable descriptor list for one record type.
pub type Descriptors = Arc<[FieldDescriptor]>;

/// Record type → compiled descriptors.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    entries: RwLock<HashMap<TypeId, Descriptors>>,
}

impl DescriptorCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the installed descriptors for `type_id`, if any.
    pub fn get(&self, type_id: TypeId) -> Option<Descriptors> {
        self.entries.read().get(&type_id).cloned()
    }

    /// Return cached descriptors, compiling `specs()` on a miss.
    ///
    /// `specs` is only called on a miss. `type_name` is used for logging.
    pub fn resolve(
        &self,
        type_id: TypeId,
        type_name: &str,
        compiler: &TagCompiler<'_>,
        specs: impl FnOnce() -> Vec<FieldSpec>,
    ) -> Result<Descriptors, TagError> {
        self.resolve_with(type_id, type_name, || compiler.compile_all(&specs()))
    }

    /// Like [`resolve`](Self::resolve) with an arbitrary compile step.
    pub fn resolve_with<E>(
        &self,
        type_id: TypeId,
        type_name: &str,
        compile: impl FnOnce() -> Result<Vec<FieldDescriptor>, E>,
    ) -> Result<Descriptors, E> {
        if let Some(hit) = self.get(type_id) {
            tracing::trace!(record = type_name, "descriptor cache hit");
            return Ok(hit);
        }

        let compiled: Descriptors = compile()?.into();
        tracing::debug!(
            record = type_name,
            fields = compiled.len(),
            "compiled field descriptors"
        );

        let mut entries = self.entries.write();
        let installed = entries.entry(type_id).or_insert_with(|| Arc::clone(&compiled));
        if !Arc::ptr_eq(installed, &compiled) {
            tracing::debug!(record = type_name, "descriptors already installed by another caller");
        }
        Ok(Arc::clone(installed))
    }

    /// Whether descriptors for `type_id` are installed.
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.entries.read().contains_key(&type_id)
    }

    /// Number of record types cached.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
