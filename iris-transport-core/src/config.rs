//! Validation configuration.
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How the root element's namespace takes part in shape dispatch.
/// - Lenient: the root is classified by its local name alone, whatever its
///   namespace. Child elements are still matched in the transport namespace.
/// - Strict: the root must also be in the transport namespace, otherwise the
///   document is a schema mismatch.
/// # Examples
/// ```rust
/// use std::str::FromStr;
/// use iris_transport_core::config::NamespacePolicy;
///
/// let policy = NamespacePolicy::from_str("strict")?;
/// assert_eq!(policy, NamespacePolicy::Strict);
/// # Ok::<(), iris_transport_core::config::ConfigParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamespacePolicy {
    #[default]
    Lenient,
    Strict,
}

/// Error returned when parsing configuration values from strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigParseError {
    #[error("invalid namespace policy: {input}")]
    InvalidNamespacePolicy { input: String },
}

impl FromStr for NamespacePolicy {
    type Err = ConfigParseError;
    fn from_str(policy: &str) -> Result<NamespacePolicy, ConfigParseError> {
        match policy.to_ascii_lowercase().as_str() {
            "lenient" => Ok(NamespacePolicy::Lenient),
            "strict" => Ok(NamespacePolicy::Strict),
            _ => Err(ConfigParseError::InvalidNamespacePolicy {
                input: policy.to_string(),
            }),
        }
    }
}

impl NamespacePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamespacePolicy::Lenient => "lenient",
            NamespacePolicy::Strict => "strict",
        }
    }
}

/// Configuration for document validation.
///
/// # Examples
/// ```rust
/// use iris_transport_core::config::{Config, NamespacePolicy};
///
/// let config = Config::new(NamespacePolicy::Strict);
/// assert_eq!(config.namespace_policy(), NamespacePolicy::Strict);
/// assert_eq!(Config::default().namespace_policy(), NamespacePolicy::Lenient);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    namespace_policy: NamespacePolicy,
}

impl Config {
    pub fn new(namespace_policy: NamespacePolicy) -> Self {
        Self { namespace_policy }
    }

    pub fn namespace_policy(&self) -> NamespacePolicy {
        self.namespace_policy
    }
}
