//! The fixed character set generated passwords are drawn from.

/// Punctuation allowed in generated passwords. Also the set the strength
/// scorer looks for.
pub const PUNCTUATION: &str = "!@#$%^&*()-_=+[]{};:,.<>/?|~";

/// Every allowed character: letters, then digits, then punctuation.
pub const ALPHABET: &[u8] = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789",
    "!@#$%^&*()-_=+[]{};:,.<>/?|~"
)
.as_bytes();

/// Whether `c` belongs to the generation alphabet.
pub fn contains(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8))
}

/// Whether `c` is one of the allowed punctuation characters.
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}
