//! Character class sections - check required lowercase, uppercase, digits and special chars.

use super::SectionResult;
use crate::charset::CharClass;
use crate::policy::PasswordPolicy;
use crate::report::Violation;

fn class_section(policy: &PasswordPolicy, password: &str, class: CharClass) -> SectionResult {
    if !policy.settings().requires(class) {
        return None;
    }
    let special = policy.special_chars();
    if password.chars().any(|c| class.matches(c, special)) {
        None
    } else {
        Some(Violation::Missing(class))
    }
}

pub fn lowercase_section(policy: &PasswordPolicy, password: &str) -> SectionResult {
    class_section(policy, password, CharClass::Lowercase)
}

pub fn uppercase_section(policy: &PasswordPolicy, password: &str) -> SectionResult {
    class_section(policy, password, CharClass::Uppercase)
}

pub fn digit_section(policy: &PasswordPolicy, password: &str) -> SectionResult {
    class_section(policy, password, CharClass::Digit)
}

/// Special characters come from the policy preset's set.
pub fn special_section(policy: &PasswordPolicy, password: &str) -> SectionResult {
    class_section(policy, password, CharClass::Special)
}
