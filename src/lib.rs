//! Password policy library
//!
//! This library validates passwords against configurable strength
//! requirements and generates random passwords that satisfy them.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Presets
//!
//! - [`PolicyPreset::Standard`] (default): `min_length` must exceed 8,
//!   every character class is required, special characters are the full
//!   ASCII punctuation set, generated passwords are at most 64 characters.
//! - [`PolicyPreset::Lenient`]: `min_length` must exceed 0, special
//!   characters are optional and drawn from a curated subset.
//!
//! `max_length` only bounds generation and may not exceed
//! [`MAX_GENERATED_LENGTH`]; [`PasswordPolicy::is_secure`] never
//! rejects a password for being long.
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{PasswordPolicy, PolicyOptions};
//! use secrecy::SecretString;
//!
//! let mut policy = PasswordPolicy::new();
//! policy
//!     .configure(&PolicyOptions::new().min_length(12).require_special_chars(false))
//!     .expect("Invalid policy");
//!
//! let password = SecretString::new("Hellow2jwjbXY".to_string().into());
//! assert!(policy.is_secure(&password));
//!
//! let suggestion = policy.generate(&PolicyOptions::new()).expect("Invalid overrides");
//! assert!(policy.is_secure(&suggestion));
//! ```

// Internal modules
mod charset;
mod error;
mod evaluator;
mod generator;
mod policy;
mod report;
mod sections;

// Public API
pub use charset::CharClass;
pub use error::{PolicyError, PolicyKey};
pub use policy::{
    MAX_GENERATED_LENGTH, PasswordPolicy, PolicyOptions, PolicyPreset, PolicySettings,
};
pub use report::{PolicyReport, Violation};
