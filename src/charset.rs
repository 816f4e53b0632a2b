//! Character classes recognized by password policies.

use std::fmt;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";

/// Full ASCII punctuation set (32 characters).
pub const PUNCTUATION: &[u8] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Hand-picked special characters used by the lenient preset.
pub const CURATED_SPECIAL: &[u8] = br#"!@#$%^&*(),.?":{}|<>"#;

/// A character class a policy can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharClass {
    /// All classes, in the order they are checked and generated.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Characters belonging to this class. `special` is the special set
    /// in effect for the policy.
    pub fn alphabet<'a>(&self, special: &'a [u8]) -> &'a [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => special,
        }
    }

    pub fn matches(&self, c: char, special: &[u8]) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => c.is_ascii() && special.contains(&(c as u8)),
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Lowercase => "lowercase letter",
            CharClass::Uppercase => "uppercase letter",
            CharClass::Digit => "digit",
            CharClass::Special => "special character",
        };
        f.write_str(name)
    }
}

/// Letters, digits and the full punctuation set, used to fill generated
/// passwords whatever the preset's special set is.
pub fn full_alphabet() -> Vec<u8> {
    CharClass::ALL
        .iter()
        .flat_map(|class| class.alphabet(PUNCTUATION).iter().copied())
        .collect()
}
