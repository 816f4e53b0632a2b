//! Outcome of checking a password against a policy.

use crate::charset::CharClass;
use std::fmt;

/// A single unmet requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    TooShort { min: usize, actual: usize },
    Missing(CharClass),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TooShort { min, .. } => {
                write!(f, "Password must be at least {} characters", min)
            }
            Violation::Missing(class) => write!(f, "Password must contain a {}", class),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyReport {
    pub violations: Vec<Violation>,
}

impl PolicyReport {
    /// True when no requirement was violated.
    pub fn is_secure(&self) -> bool {
        self.violations.is_empty()
    }

    /// Human-readable messages, one per violation.
    pub fn reasons(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}
