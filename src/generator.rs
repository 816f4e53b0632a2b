//! Random password generation.

use crate::charset::full_alphabet;
use crate::error::{PolicyError, PolicyKey};
use crate::policy::{MAX_GENERATED_LENGTH, PasswordPolicy, PolicyOptions};
use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

impl PasswordPolicy {
    /// Generates a random password satisfying the policy with the given
    /// per-call overrides applied. The stored policy is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidConfig`] if the overrides are invalid
    /// (same rules as [`configure`](Self::configure)) or if `min_length` is
    /// smaller than the number of required character classes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pwd_policy::{PasswordPolicy, PolicyOptions};
    ///
    /// let policy = PasswordPolicy::new();
    /// let password = policy
    ///     .generate(&PolicyOptions::new().max_length(16))
    ///     .expect("valid overrides");
    /// assert!(policy.is_secure(&password));
    /// ```
    pub fn generate(&self, overrides: &PolicyOptions) -> Result<SecretString, PolicyError> {
        self.generate_with_rng(overrides, &mut rand::thread_rng())
    }

    /// Same as [`generate`](Self::generate), drawing from the given random source.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        overrides: &PolicyOptions,
        rng: &mut R,
    ) -> Result<SecretString, PolicyError> {
        let policy = self.effective(overrides)?;
        let chars = build_password(&policy, rng)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Generated password of length {}", chars.len());

        Ok(SecretString::new(chars.into_iter().collect::<String>().into()))
    }
}

fn build_password<R: Rng + ?Sized>(
    policy: &PasswordPolicy,
    rng: &mut R,
) -> Result<Vec<char>, PolicyError> {
    let settings = policy.settings();
    let special = policy.special_chars();

    let required = settings.required_classes().count();
    if settings.min_length < required {
        return Err(PolicyError::invalid(
            PolicyKey::MinLength,
            format!(
                "must be at least the number of required character classes ({}), got {}",
                required, settings.min_length
            ),
        ));
    }

    // Lenient policies without max_length generate exactly min_length chars
    if settings.max_length.is_none() && settings.min_length > MAX_GENERATED_LENGTH {
        return Err(PolicyError::invalid(
            PolicyKey::MinLength,
            format!(
                "must be at most {} to generate without max_length, got {}",
                MAX_GENERATED_LENGTH, settings.min_length
            ),
        ));
    }

    let length = match settings.max_length {
        Some(max) => rng.gen_range(settings.min_length..=max),
        None => settings.min_length,
    };

    let mut chars = Vec::with_capacity(length);
    for class in settings.required_classes() {
        chars.push(pick(class.alphabet(special), rng));
    }

    let alphabet = full_alphabet();
    let remaining = length.saturating_sub(chars.len());
    for _ in 0..remaining {
        chars.push(pick(&alphabet, rng));
    }

    // Required characters must not sit at predictable positions
    chars.shuffle(rng);

    Ok(chars)
}

/// `alphabet` is never empty: every class and the full alphabet are constants.
fn pick<R: Rng + ?Sized>(alphabet: &[u8], rng: &mut R) -> char {
    alphabet[rng.gen_range(0..alphabet.len())] as char
}
