//! Error types for policy configuration.

use std::fmt;
use thiserror::Error;

/// Names a recognized policy option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKey {
    MinLength,
    MaxLength,
    RequireLowercase,
    RequireUppercase,
    RequireDigits,
    RequireSpecialChars,
}

impl PolicyKey {
    /// Option name as it appears in [`PolicyOptions`](crate::PolicyOptions).
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKey::MinLength => "min_length",
            PolicyKey::MaxLength => "max_length",
            PolicyKey::RequireLowercase => "require_lowercase",
            PolicyKey::RequireUppercase => "require_uppercase",
            PolicyKey::RequireDigits => "require_digits",
            PolicyKey::RequireSpecialChars => "require_special_chars",
        }
    }
}

impl fmt::Display for PolicyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid value for `{key}`: {reason}")]
    InvalidConfig { key: PolicyKey, reason: String },
}

impl PolicyError {
    pub(crate) fn invalid(key: PolicyKey, reason: impl Into<String>) -> Self {
        PolicyError::InvalidConfig {
            key,
            reason: reason.into(),
        }
    }

    /// The option that was rejected.
    pub fn key(&self) -> PolicyKey {
        match self {
            PolicyError::InvalidConfig { key, .. } => *key,
        }
    }
}
