//! Password policy sections
//!
//! Each section checks one requirement of the policy.

mod classes;
mod length;

pub use classes::{digit_section, lowercase_section, special_section, uppercase_section};
pub use length::length_section;

use crate::policy::PasswordPolicy;
use crate::report::Violation;

/// Result type for section functions.
/// - `Some(violation)` - Section failed
/// - `None` - Section passed or does not apply
pub type SectionResult = Option<Violation>;

pub type Section = fn(&PasswordPolicy, &str) -> SectionResult;
