//! # Decoder Service
//!
//! Owns the state binding depends on: the custom validator registry, the
//! per-type descriptor cache, and the configuration. [`Decoder::global`]
//! is the process-wide instance behind the crate's free functions; tests
//! and embedders that need isolation build their own with
//! [`Decoder::new`].
//!
//! A record type is compiled on its first use through a given decoder.
//! Validators referenced by its annotations must be registered on that
//! decoder before then; compilation failures are not cached, so a later
//! call retries against whatever is registered at that point.

use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::OnceLock;

use formtag_schema::{CustomResult, DescriptorCache, Descriptors, TagCompiler, ValidatorRegistry};

use crate::config::DecoderConfig;
use crate::engine;
use crate::error::FormError;
use crate::form::Form;
use crate::params::Params;

static GLOBAL: OnceLock<Decoder> = OnceLock::new();

/// Binds input parameters onto [`Form`] records.
#[derive(Debug, Default)]
pub struct Decoder {
    config: DecoderConfig,
    registry: ValidatorRegistry,
    cache: DescriptorCache,
}

impl Decoder {
    /// Create an isolated decoder with empty registry and cache.
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            registry: ValidatorRegistry::new(),
            cache: DescriptorCache::new(),
        }
    }

    /// The process-wide decoder, configured from the environment on first
    /// access. An invalid environment falls back to the default
    /// configuration.
    pub fn global() -> &'static Decoder {
        GLOBAL.get_or_init(|| {
            let config = DecoderConfig::from_env().unwrap_or_else(|error| {
                tracing::warn!(%error, "invalid formtag configuration, using defaults");
                DecoderConfig::default()
            });
            Decoder::new(config)
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// The custom validator registry.
    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Register a custom validator usable as a `validate` directive.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Registry` for the reserved names `optional`,
    /// `range` and `len`, and for an empty name.
    pub fn register<F>(&self, name: impl Into<String>, callback: F) -> Result<(), FormError>
    where
        F: Fn(&str) -> CustomResult + Send + Sync + 'static,
    {
        self.registry.register(name, callback)?;
        Ok(())
    }

    /// Compiled descriptors for `F`, compiling on first use.
    pub fn resolve<F: Form>(&self) -> Result<Descriptors, FormError> {
        let compiler = TagCompiler::new(&self.registry, self.config.tag_policy);
        let descriptors = self
            .cache
            .resolve(TypeId::of::<F>(), type_name::<F>(), &compiler, F::fields)?;
        Ok(descriptors)
    }

    /// Whether `F` has been compiled successfully by this decoder.
    pub fn is_cached<F: Form>(&self) -> bool {
        self.cache.contains(TypeId::of::<F>())
    }

    /// Populate `form` from multi-valued `params`.
    ///
    /// On error, fields before the failing one in declaration order may
    /// already have been written.
    pub fn assign<F: Form>(&self, params: &Params, form: &mut F) -> Result<(), FormError> {
        let descriptors = self.resolve::<F>()?;
        engine::assign(&descriptors, params, form)
    }

    /// Populate `form` from a flat name → value map.
    pub fn assign_single<F: Form>(
        &self,
        params: &HashMap<String, String>,
        form: &mut F,
    ) -> Result<(), FormError> {
        self.assign(&Params::from_single(params), form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formtag_core::TagPolicy;

    crate::form! {
        #[derive(Debug, Default)]
        struct Login {
            pub user: String => r#"validate:"user,len(1:8)""#,
            pub code: String => r#"validate:"code,pin""#,
        }
    }

    crate::form! {
        #[derive(Debug, Default)]
        struct Sloppy {
            pub user: String => r#"validate: "user""#,
        }
    }

    fn pin(value: &str) -> CustomResult {
        if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err("pin must be four digits".into())
        }
    }

    #[test]
    fn test_unregistered_function_fails_until_registered() {
        let decoder = Decoder::new(DecoderConfig::default());
        assert!(matches!(decoder.resolve::<Login>(), Err(FormError::Tag(_))));
        assert!(!decoder.is_cached::<Login>());

        decoder.register("pin", pin).unwrap();
        let descriptors = decoder.resolve::<Login>().unwrap();
        assert_eq!(descriptors.len(), 2);
        assert!(decoder.is_cached::<Login>());
    }

    #[test]
    fn test_assign_runs_custom_validator() {
        let decoder = Decoder::new(DecoderConfig::default());
        decoder.register("pin", pin).unwrap();

        let mut login = Login::default();
        let params = Params::from_query("user=ada&code=12a4");
        match decoder.assign(&params, &mut login) {
            Err(FormError::Validation(e)) => {
                assert_eq!(e.param, "code");
                assert_eq!(e.reason.as_deref(), Some("pin must be four digits"));
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(login.user, "ada");

        let params = Params::from_query("user=ada&code=1234");
        decoder.assign(&params, &mut login).unwrap();
        assert_eq!(login.code, "1234");
    }

    #[test]
    fn test_assign_single() {
        let decoder = Decoder::new(DecoderConfig::default());
        decoder.register("pin", pin).unwrap();
        let mut single = HashMap::new();
        single.insert("user".to_string(), "bob".to_string());
        single.insert("code".to_string(), "0000".to_string());

        let mut login = Login::default();
        decoder.assign_single(&single, &mut login).unwrap();
        assert_eq!((login.user.as_str(), login.code.as_str()), ("bob", "0000"));
    }

    #[test]
    fn test_reserved_registration_rejected() {
        let decoder = Decoder::new(DecoderConfig::default());
        assert!(matches!(
            decoder.register("len", pin),
            Err(FormError::Registry(_))
        ));
    }

    #[test]
    fn test_policy_selects_malformed_behavior() {
        let strict = Decoder::new(DecoderConfig::strict());
        assert!(matches!(strict.resolve::<Sloppy>(), Err(FormError::Tag(_))));

        let lenient = Decoder::new(DecoderConfig::lenient());
        assert_eq!(lenient.config().tag_policy, TagPolicy::Lenient);
        let descriptors = lenient.resolve::<Sloppy>().unwrap();
        assert!(!descriptors[0].is_bound());

        let mut sloppy = Sloppy::default();
        lenient.assign(&Params::new(), &mut sloppy).unwrap();
        assert!(sloppy.user.is_empty());
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(Decoder::global(), Decoder::global()));
    }
}
