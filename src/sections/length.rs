//! Length section - checks password minimum length.

use super::SectionResult;
use crate::policy::PasswordPolicy;
use crate::report::Violation;

/// Checks if the password meets the policy's minimum length.
///
/// Length is counted in characters. `max_length` is not checked here.
pub fn length_section(policy: &PasswordPolicy, password: &str) -> SectionResult {
    let min = policy.settings().min_length;
    let actual = password.chars().count();
    if actual < min {
        return Some(Violation::TooShort { min, actual });
    }
    None
}
