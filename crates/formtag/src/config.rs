//! Decoder configuration.
//!
//! Defaults to the strict tag policy. Override via environment variables
//! or explicit construction for tests.

use formtag_core::TagPolicy;

/// Environment variable selecting the malformed-tag policy.
pub const TAG_POLICY_VAR: &str = "FORMTAG_TAG_POLICY";

/// Configuration for a [`Decoder`](crate::Decoder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// How malformed `validate`/`regex` annotations are treated.
    pub tag_policy: TagPolicy,
}

impl DecoderConfig {
    /// Malformed annotations fail compilation.
    pub fn strict() -> Self {
        Self {
            tag_policy: TagPolicy::Strict,
        }
    }

    /// Malformed annotations are treated as absent.
    pub fn lenient() -> Self {
        Self {
            tag_policy: TagPolicy::Lenient,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FORMTAG_TAG_POLICY`: `strict` (default) or `lenient`,
    ///   case-insensitive.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let tag_policy = match lookup(TAG_POLICY_VAR) {
            Some(raw) => raw
                .parse::<TagPolicy>()
                .map_err(|_| ConfigError::InvalidTagPolicy(raw))?,
            None => TagPolicy::default(),
        };
        Ok(Self { tag_policy })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `FORMTAG_TAG_POLICY` holds something other than `strict` or
    /// `lenient`. Carries the raw value.
    #[error("invalid FORMTAG_TAG_POLICY value {0:?}: expected \"strict\" or \"lenient\"")]
    InvalidTagPolicy(String),
}
