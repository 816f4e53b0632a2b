//! Policy evaluator - runs the sections against a password.

use crate::policy::PasswordPolicy;
use crate::report::PolicyReport;

use crate::sections::{
    Section, digit_section, length_section, lowercase_section, special_section, uppercase_section,
};

/// Checks a password against the policy and collects every violation.
///
/// # Arguments
/// * `policy` - The effective policy
/// * `password` - The exposed password
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn evaluate(policy: &PasswordPolicy, password: &str) -> PolicyReport {
    let mut report = PolicyReport::default();

    // Orchestrator: execute sections in sequence
    let sections: [(&str, Section); 5] = [
        ("length", length_section),
        ("lowercase", lowercase_section),
        ("uppercase", uppercase_section),
        ("digits", digit_section),
        ("special", special_section),
    ];

    for (section_name, section_fn) in sections {
        if let Some(violation) = section_fn(policy, password) {
            #[cfg(feature = "tracing")]
            tracing::trace!("Policy section {} failed: {}", section_name, violation);
            report.violations.push(violation);
        }
    }

    report
}
