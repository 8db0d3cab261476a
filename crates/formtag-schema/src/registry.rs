//! # Custom Validator Registry
//!
//! Maps user-chosen names to string-validation callbacks. The compiler
//! consults the registry for every directive that is not built in, at
//! compile time; registering a name after a type has failed to compile
//! does not retroactively fix that failure, but the next attempt (failures
//! are not cached) will see it.
//!
//! Names are never removed. Registering an existing name replaces its
//! callback for compilations that happen afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::RegistryError;
use crate::validator::{CustomFn, CustomResult};

/// Directive names that can never be registered.
pub const RESERVED_NAMES: &[&str] = &["optional", "range", "len"];

/// Thread-safe name → callback table.
///
/// Reads (compilation) take the shared lock; registration takes the
/// exclusive lock. `parking_lot::RwLock` does not poison, so a panicking
/// callback elsewhere cannot wedge the registry.
#[derive(Default)]
pub struct ValidatorRegistry {
    funcs: RwLock<HashMap<String, CustomFn>>,
}

impl ValidatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ReservedName` for `optional`, `range` and
    /// `len`, and `RegistryError::EmptyName` for an empty name.
    pub fn register<F>(&self, name: impl Into<String>, callback: F) -> Result<(), RegistryError>
    where
        F: Fn(&str) -> CustomResult + Send + Sync + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if RESERVED_NAMES.contains(&name.as_str()) {
            return Err(RegistryError::ReservedName { name });
        }

        let previous = self.funcs.write().insert(name.clone(), Arc::new(callback));
        if previous.is_some() {
            tracing::warn!(name = %name, "custom validator replaced");
        } else {
            tracing::debug!(name = %name, "custom validator registered");
        }
        Ok(())
    }

    /// Look up a callback by name.
    pub fn get(&self, name: &str) -> Option<CustomFn> {
        self.funcs.read().get(name).cloned()
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.funcs.read().contains_key(name)
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.funcs.read().len()
    }

    /// Whether no callback is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self.funcs.read().keys().cloned().collect();
        names.sort();
        f.debug_struct("ValidatorRegistry").field("names", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept(_: &str) -> CustomResult {
        Ok(())
    }

    #[test]
    fn test_register_and_get() {
        let registry = ValidatorRegistry::new();
        assert!(registry.is_empty());
        registry.register("hash", accept).unwrap();
        assert!(registry.contains("hash"));
        assert_eq!(registry.len(), 1);
        let callback = registry.get("hash").unwrap();
        assert!(callback("anything").is_ok());
        assert!(registry.get("other").is_none());
    }

    #[test]
    fn test_reserved_names_rejected() {
        let registry = ValidatorRegistry::new();
        for name in RESERVED_NAMES {
            assert_eq!(
                registry.register(*name, accept),
                Err(RegistryError::ReservedName { name: name.to_string() })
            );
        }
        assert_eq!(registry.register("", accept), Err(RegistryError::EmptyName));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reregister_replaces() {
        let registry = ValidatorRegistry::new();
        registry.register("even", |_: &str| -> CustomResult { Err("never".into()) }).unwrap();
        registry.register("even", accept).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("even").unwrap()("x").is_ok());
    }

    #[test]
    fn test_debug_lists_sorted_names() {
        let registry = ValidatorRegistry::new();
        registry.register("zeta", accept).unwrap();
        registry.register("alpha", accept).unwrap();
        assert_eq!(
            format!("{registry:?}"),
            r#"ValidatorRegistry { names: ["alpha", "zeta"] }"#
        );
    }
}
