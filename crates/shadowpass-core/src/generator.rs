//! Random password generation.

use crate::alphabet::ALPHABET;
use crate::error::{Error, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use std::num::IntErrorKind;

/// Shortest password the generator produces.
pub const MIN_LENGTH: usize = 4;
/// Longest password the generator produces.
pub const MAX_LENGTH: usize = 128;
/// Length used when the length field is left empty.
pub const DEFAULT_LENGTH: usize = 16;

/// Parse the raw text of the length field.
///
/// Surrounding whitespace is ignored and an empty field means
/// [`DEFAULT_LENGTH`]. Anything that is not an integer, or an integer
/// outside `MIN_LENGTH..=MAX_LENGTH`, is a validation error.
pub fn parse_length(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_LENGTH);
    }

    match trimmed.parse::<i64>() {
        Ok(value) => usize::try_from(value)
            .map_err(|_| out_of_range())
            .and_then(validate_length),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(out_of_range())
        }
        Err(_) => Err(Error::Validation(format!(
            "Please enter a valid integer for length ({MIN_LENGTH}-{MAX_LENGTH})."
        ))),
    }
}

/// Check that `length` is within the accepted range.
pub fn validate_length(length: usize) -> Result<usize> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(out_of_range())
    }
}

fn out_of_range() -> Error {
    Error::Validation(format!(
        "Length must be between {MIN_LENGTH} and {MAX_LENGTH}."
    ))
}

/// Generate a password of `length` characters using the operating system's
/// random source.
pub fn generate(length: usize) -> Result<String> {
    generate_with(length, &mut OsRng)
}

/// Generate a password of `length` characters with the given random source.
///
/// Each character is drawn independently and uniformly from the alphabet.
/// The `CryptoRng` bound keeps general-purpose PRNGs out.
pub fn generate_with<R>(length: usize, rng: &mut R) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    let length = validate_length(length)?;

    let password = (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_every_valid_length_is_exact_and_in_alphabet() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for length in MIN_LENGTH..=MAX_LENGTH {
            let password = generate_with(length, &mut rng).unwrap();
            assert_eq!(password.chars().count(), length);
            assert!(password.chars().all(alphabet::contains), "{password}");
        }
    }

    #[test]
    fn test_invalid_lengths_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for length in [0, 1, 3, 129, 1000] {
            assert!(matches!(
                generate_with(length, &mut rng),
                Err(Error::Validation(_))
            ));
        }
    }

    #[test]
    fn test_os_rng_outputs_differ() {
        let first = generate(32).unwrap();
        let second = generate(32).unwrap();
        assert_eq!(first.len(), 32);
        assert_ne!(first, second);
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = generate_with(20, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        let b = generate_with(20, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_large_sample_uses_every_class() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let sample: String = (0..50)
            .map(|_| generate_with(MAX_LENGTH, &mut rng).unwrap())
            .collect();

        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
        assert!(sample.chars().any(alphabet::is_punctuation));
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("16").unwrap(), 16);
        assert_eq!(parse_length("  4 ").unwrap(), 4);
        assert_eq!(parse_length("128").unwrap(), 128);
        assert_eq!(parse_length("").unwrap(), DEFAULT_LENGTH);
        assert_eq!(parse_length("   ").unwrap(), DEFAULT_LENGTH);
    }

    #[test]
    fn test_parse_length_errors() {
        let not_integer = parse_length("ten").unwrap_err();
        assert!(not_integer.to_string().contains("valid integer"));
        assert!(matches!(parse_length("12.5"), Err(Error::Validation(_))));

        for input in ["3", "129", "-5", "0", "99999999999999999999999"] {
            let err = parse_length(input).unwrap_err();
            assert_eq!(err.to_string(), "Length must be between 4 and 128.", "{input}");
        }
    }
}
