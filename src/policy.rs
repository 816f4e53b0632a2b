//! Password policy configuration.

use crate::charset::{CharClass, CURATED_SPECIAL, PUNCTUATION};
use crate::error::{PolicyError, PolicyKey};
use crate::report::PolicyReport;
use secrecy::{ExposeSecret, SecretString};

const DEFAULT_MIN_LENGTH: usize = 8;
const DEFAULT_MAX_LENGTH: usize = 64;

/// Upper bound for `max_length` and for any generated password.
pub const MAX_GENERATED_LENGTH: usize = 4096;

/// Named bundle of defaults, minimum length floor and special character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyPreset {
    /// Configured `min_length` must exceed 8, special characters are the full
    /// ASCII punctuation set, every class is required and `max_length` is 64.
    #[default]
    Standard,
    /// Configured `min_length` must exceed 0, special characters are a
    /// curated subset, special characters are not required and there is no
    /// `max_length` until one is configured.
    Lenient,
}

impl PolicyPreset {
    /// Exclusive lower bound for a configured `min_length`.
    pub fn min_length_floor(&self) -> usize {
        match self {
            PolicyPreset::Standard => 8,
            PolicyPreset::Lenient => 0,
        }
    }

    pub fn special_chars(&self) -> &'static [u8] {
        match self {
            PolicyPreset::Standard => PUNCTUATION,
            PolicyPreset::Lenient => CURATED_SPECIAL,
        }
    }

    pub fn defaults(&self) -> PolicySettings {
        match self {
            PolicyPreset::Standard => PolicySettings {
                min_length: DEFAULT_MIN_LENGTH,
                max_length: Some(DEFAULT_MAX_LENGTH),
                require_lowercase: true,
                require_uppercase: true,
                require_digits: true,
                require_special_chars: true,
            },
            PolicyPreset::Lenient => PolicySettings {
                min_length: DEFAULT_MIN_LENGTH,
                max_length: None,
                require_lowercase: true,
                require_uppercase: true,
                require_digits: true,
                require_special_chars: false,
            },
        }
    }
}

/// Resolved policy values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySettings {
    pub min_length: usize,
    pub max_length: Option<usize>,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    pub require_digits: bool,
    pub require_special_chars: bool,
}

impl PolicySettings {
    pub fn requires(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.require_lowercase,
            CharClass::Uppercase => self.require_uppercase,
            CharClass::Digit => self.require_digits,
            CharClass::Special => self.require_special_chars,
        }
    }

    pub fn required_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|class| self.requires(*class))
    }
}

/// Partial policy update. Absent fields keep their current value.
///
/// # Example
///
/// ```rust
/// use pwd_policy::PolicyOptions;
///
/// let options = PolicyOptions::new()
///     .min_length(12)
///     .max_length(32)
///     .require_special_chars(false);
/// assert_eq!(options.min_length, Some(12));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyOptions {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub require_lowercase: Option<bool>,
    pub require_uppercase: Option<bool>,
    pub require_digits: Option<bool>,
    pub require_special_chars: Option<bool>,
}

impl PolicyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, value: usize) -> Self {
        self.min_length = Some(value);
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.max_length = Some(value);
        self
    }

    pub fn require_lowercase(mut self, value: bool) -> Self {
        self.require_lowercase = Some(value);
        self
    }

    pub fn require_uppercase(mut self, value: bool) -> Self {
        self.require_uppercase = Some(value);
        self
    }

    pub fn require_digits(mut self, value: bool) -> Self {
        self.require_digits = Some(value);
        self
    }

    pub fn require_special_chars(mut self, value: bool) -> Self {
        self.require_special_chars = Some(value);
        self
    }
}

/// Password strength requirements.
///
/// `max_length` bounds generated passwords only; [`is_secure`](Self::is_secure)
/// accepts passwords of any length at or above `min_length`.
///
/// There is no internal locking: share a policy across threads behind the
/// caller's own lock if it is reconfigured at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordPolicy {
    preset: PolicyPreset,
    settings: PolicySettings,
}

impl Default for PolicySettings {
    fn default() -> Self {
        PolicyPreset::default().defaults()
    }
}

impl PasswordPolicy {
    /// Builds a policy with the [`PolicyPreset::Standard`] defaults.
    pub fn new() -> Self {
        Self::with_preset(PolicyPreset::Standard)
    }

    pub fn with_preset(preset: PolicyPreset) -> Self {
        Self {
            preset,
            settings: preset.defaults(),
        }
    }

    pub fn preset(&self) -> PolicyPreset {
        self.preset
    }

    pub fn settings(&self) -> &PolicySettings {
        &self.settings
    }

    pub(crate) fn special_chars(&self) -> &'static [u8] {
        self.preset.special_chars()
    }

    /// Applies the supplied options.
    ///
    /// Either every supplied option is applied or, on error, none is.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidConfig`] if:
    /// - `min_length` does not exceed the preset floor
    /// - `max_length` is below the resulting `min_length`
    /// - `max_length` exceeds [`MAX_GENERATED_LENGTH`]
    /// - `min_length` exceeds the stored `max_length` and no new one is given
    pub fn configure(&mut self, options: &PolicyOptions) -> Result<(), PolicyError> {
        let settings = match self.merge(options) {
            Ok(settings) => settings,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Rejected policy configuration: {}", e);
                return Err(e);
            }
        };
        self.settings = settings;

        #[cfg(feature = "tracing")]
        tracing::debug!("Policy configured: {:?}", self.settings);

        Ok(())
    }

    /// Returns the effective policy for a set of per-call overrides without
    /// touching `self`.
    ///
    /// # Errors
    ///
    /// Same rules as [`configure`](Self::configure).
    pub fn effective(&self, overrides: &PolicyOptions) -> Result<PasswordPolicy, PolicyError> {
        Ok(Self {
            preset: self.preset,
            settings: self.merge(overrides)?,
        })
    }

    /// Checks whether the password satisfies every enabled requirement.
    pub fn is_secure(&self, password: &SecretString) -> bool {
        self.check(password).is_secure()
    }

    /// Checks the password and lists every unmet requirement.
    pub fn check(&self, password: &SecretString) -> PolicyReport {
        crate::evaluator::evaluate(self, password.expose_secret())
    }

    fn merge(&self, options: &PolicyOptions) -> Result<PolicySettings, PolicyError> {
        let mut next = self.settings;

        if let Some(min) = options.min_length {
            let floor = self.preset.min_length_floor();
            if min <= floor {
                return Err(PolicyError::invalid(
                    PolicyKey::MinLength,
                    format!("must be greater than {}, got {}", floor, min),
                ));
            }
            next.min_length = min;
        }

        match options.max_length {
            Some(max) if max < next.min_length => {
                return Err(PolicyError::invalid(
                    PolicyKey::MaxLength,
                    format!("must be at least min_length ({}), got {}", next.min_length, max),
                ));
            }
            Some(max) if max > MAX_GENERATED_LENGTH => {
                return Err(PolicyError::invalid(
                    PolicyKey::MaxLength,
                    format!("must be at most {}, got {}", MAX_GENERATED_LENGTH, max),
                ));
            }
            Some(max) => next.max_length = Some(max),
            None => {
                if let Some(max) = next.max_length {
                    if max < next.min_length {
                        return Err(PolicyError::invalid(
                            PolicyKey::MinLength,
                            format!(
                                "must not exceed max_length ({}), got {}",
                                max, next.min_length
                            ),
                        ));
                    }
                }
            }
        }

        if let Some(value) = options.require_lowercase {
            next.require_lowercase = value;
        }
        if let Some(value) = options.require_uppercase {
            next.require_uppercase = value;
        }
        if let Some(value) = options.require_digits {
            next.require_digits = value;
        }
        if let Some(value) = options.require_special_chars {
            next.require_special_chars = value;
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_standard_defaults() {
        let policy = PasswordPolicy::new();
        assert_eq!(policy.preset(), PolicyPreset::Standard);
        let settings = policy.settings();
        assert_eq!(settings.min_length, 8);
        assert_eq!(settings.max_length, Some(64));
        assert!(settings.require_lowercase);
        assert!(settings.require_uppercase);
        assert!(settings.require_digits);
        assert!(settings.require_special_chars);
        assert_eq!(policy, PasswordPolicy::default());
    }

    #[test]
    fn test_lenient_defaults() {
        let policy = PasswordPolicy::with_preset(PolicyPreset::Lenient);
        let settings = policy.settings();
        assert_eq!(settings.min_length, 8);
        assert_eq!(settings.max_length, None);
        assert!(!settings.require_special_chars);
    }

    #[test]
    fn test_configure_partial_update() {
        let mut policy = PasswordPolicy::new();
        policy
            .configure(&PolicyOptions::new().require_digits(false))
            .unwrap();
        let settings = policy.settings();
        assert!(!settings.require_digits);
        assert_eq!(settings.min_length, 8);
        assert_eq!(settings.max_length, Some(64));
        assert!(settings.require_special_chars);
    }

    #[test]
    fn test_configure_empty_options_is_noop() {
        let mut policy = PasswordPolicy::new();
        policy.configure(&PolicyOptions::new()).unwrap();
        assert_eq!(policy, PasswordPolicy::new());
    }

    #[test]
    fn test_configure_min_length_below_floor_is_atomic() {
        let mut policy = PasswordPolicy::new();
        let result = policy.configure(
            &PolicyOptions::new()
                .min_length(5)
                .require_special_chars(false),
        );
        assert!(matches!(
            result,
            Err(PolicyError::InvalidConfig { key: PolicyKey::MinLength, .. })
        ));
        assert_eq!(policy.settings().min_length, 8);
        assert!(policy.settings().require_special_chars);
    }

    #[test]
    fn test_configure_min_length_floor_is_exclusive() {
        let mut policy = PasswordPolicy::new();
        assert!(policy.configure(&PolicyOptions::new().min_length(8)).is_err());
        assert!(policy.configure(&PolicyOptions::new().min_length(9)).is_ok());
        assert_eq!(policy.settings().min_length, 9);
    }

    #[test]
    fn test_lenient_floor_accepts_small_min_length() {
        let mut policy = PasswordPolicy::with_preset(PolicyPreset::Lenient);
        assert!(policy.configure(&PolicyOptions::new().min_length(0)).is_err());
        policy.configure(&PolicyOptions::new().min_length(1)).unwrap();
        assert_eq!(policy.settings().min_length, 1);
    }

    #[test]
    fn test_configure_max_below_min_fails() {
        let mut policy = PasswordPolicy::new();
        policy.configure(&PolicyOptions::new().min_length(10)).unwrap();
        let result = policy.configure(&PolicyOptions::new().max_length(5));
        assert!(matches!(
            result,
            Err(PolicyError::InvalidConfig { key: PolicyKey::MaxLength, .. })
        ));
        assert_eq!(policy.settings().max_length, Some(64));
    }

    #[test]
    fn test_configure_max_length_above_cap_is_atomic() {
        let mut policy = PasswordPolicy::new();
        let result = policy.configure(
            &PolicyOptions::new()
                .max_length(usize::MAX)
                .require_digits(false),
        );
        assert!(matches!(
            result,
            Err(PolicyError::InvalidConfig { key: PolicyKey::MaxLength, .. })
        ));
        assert_eq!(policy, PasswordPolicy::new());

        policy
            .configure(&PolicyOptions::new().max_length(MAX_GENERATED_LENGTH))
            .unwrap();
        assert_eq!(policy.settings().max_length, Some(MAX_GENERATED_LENGTH));
    }

    #[test]
    fn test_configure_max_checked_against_new_min() {
        let mut policy = PasswordPolicy::new();
        let result = policy.configure(&PolicyOptions::new().min_length(20).max_length(15));
        assert!(result.is_err());
        assert_eq!(policy.settings().min_length, 8);

        policy
            .configure(&PolicyOptions::new().min_length(20).max_length(20))
            .unwrap();
        assert_eq!(policy.settings().min_length, 20);
        assert_eq!(policy.settings().max_length, Some(20));
    }

    #[test]
    fn test_configure_min_above_stored_max_fails() {
        let mut policy = PasswordPolicy::new();
        let result = policy.configure(&PolicyOptions::new().min_length(100));
        assert!(matches!(
            result,
            Err(PolicyError::InvalidConfig { key: PolicyKey::MinLength, .. })
        ));
        assert_eq!(policy.settings().min_length, 8);
    }

    #[test]
    fn test_hellow_default_policy_requires_special() {
        let policy = PasswordPolicy::new();
        assert!(!policy.is_secure(&secret("Hellow2jwjb")));
    }

    #[test]
    fn test_hellow_without_special_requirement() {
        let mut policy = PasswordPolicy::new();
        policy
            .configure(
                &PolicyOptions::new()
                    .require_special_chars(false)
                    .require_digits(true)
                    .require_uppercase(true)
                    .require_lowercase(true),
            )
            .unwrap();
        assert!(policy.is_secure(&secret("Hellow2jwjb")));
    }

    #[test]
    fn test_hellow_with_large_min_length() {
        let mut lenient = PasswordPolicy::with_preset(PolicyPreset::Lenient);
        assert!(lenient.is_secure(&secret("Hellow2jwjb")));
        lenient.configure(&PolicyOptions::new().min_length(100)).unwrap();
        assert!(!lenient.is_secure(&secret("Hellow2jwjb")));

        let mut standard = PasswordPolicy::new();
        standard
            .configure(
                &PolicyOptions::new()
                    .min_length(100)
                    .max_length(128)
                    .require_special_chars(false),
            )
            .unwrap();
        assert!(!standard.is_secure(&secret("Hellow2jwjb")));
    }

    #[test]
    fn test_is_secure_ignores_max_length() {
        let mut policy = PasswordPolicy::new();
        policy
            .configure(&PolicyOptions::new().min_length(10).max_length(12))
            .unwrap();
        let long = format!("Aa1!{}", "x".repeat(200));
        assert!(policy.is_secure(&secret(&long)));
    }

    #[test]
    fn test_is_secure_empty_password() {
        assert!(!PasswordPolicy::new().is_secure(&secret("")));

        let mut policy = PasswordPolicy::with_preset(PolicyPreset::Lenient);
        policy
            .configure(
                &PolicyOptions::new()
                    .min_length(1)
                    .require_lowercase(false)
                    .require_uppercase(false)
                    .require_digits(false),
            )
            .unwrap();
        assert!(!policy.is_secure(&secret("")));
        assert!(policy.is_secure(&secret("?")));
    }

    #[test]
    fn test_is_secure_missing_uppercase() {
        let policy = PasswordPolicy::new();
        assert!(!policy.is_secure(&secret("lowercase123!")));
        assert!(policy.is_secure(&secret("Lowercase123!")));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut policy = PasswordPolicy::with_preset(PolicyPreset::Lenient);
        policy
            .configure(&PolicyOptions::new().require_digits(false))
            .unwrap();
        // 7 characters, 11 bytes
        assert!(!policy.is_secure(&secret("Aaaéééé")));
        assert!(policy.is_secure(&secret("Aaaééééé")));
    }

    #[test]
    fn test_special_set_depends_on_preset() {
        let standard = PasswordPolicy::new();
        assert!(standard.is_secure(&secret("Abcdefg1_")));

        let mut lenient = PasswordPolicy::with_preset(PolicyPreset::Lenient);
        lenient
            .configure(&PolicyOptions::new().require_special_chars(true))
            .unwrap();
        assert!(!lenient.is_secure(&secret("Abcdefg1_")));
        assert!(lenient.is_secure(&secret("Abcdefg1!")));
    }

    #[test]
    fn test_effective_does_not_mutate() {
        let policy = PasswordPolicy::new();
        let effective = policy
            .effective(&PolicyOptions::new().min_length(12).require_digits(false))
            .unwrap();
        assert_eq!(effective.settings().min_length, 12);
        assert!(!effective.settings().require_digits);
        assert_eq!(policy, PasswordPolicy::new());
    }

    #[test]
    fn test_required_classes() {
        let mut settings = PolicyPreset::Standard.defaults();
        assert_eq!(settings.required_classes().count(), 4);
        settings.require_uppercase = false;
        let classes: Vec<_> = settings.required_classes().collect();
        assert_eq!(
            classes,
            vec![CharClass::Lowercase, CharClass::Digit, CharClass::Special]
        );
    }
}
