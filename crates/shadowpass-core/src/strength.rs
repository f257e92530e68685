//! Password strength scoring.
//!
//! Five independent checks, one point each. Length counts twice: once at
//! 8 characters and again at 12.

use crate::alphabet;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Highest score a password can reach.
pub const MAX_SCORE: u8 = 5;

/// Severity tier used to color the strength indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Danger,
    Warning,
    Positive,
}

impl Tier {
    /// CSS class name for the tier.
    pub fn css_class(self) -> &'static str {
        match self {
            Tier::Danger => "danger",
            Tier::Warning => "warning",
            Tier::Positive => "positive",
        }
    }
}

/// A computed score with its label and tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strength {
    score: u8,
}

impl Strength {
    /// Score a password.
    pub fn of(password: &str) -> Self {
        Self {
            score: score(password),
        }
    }

    /// Raw score in `0..=5`.
    pub fn score(self) -> u8 {
        self.score
    }

    /// Fill fraction for a progress bar, `0.0..=1.0`.
    pub fn fraction(self) -> f64 {
        f64::from(self.score) / f64::from(MAX_SCORE)
    }

    pub fn label(self) -> &'static str {
        match self.score {
            0 | 1 => "Very Weak",
            2 => "Weak",
            3 => "Medium",
            4 => "Strong",
            _ => "Very Strong",
        }
    }

    pub fn tier(self) -> Tier {
        match self.score {
            0..=2 => Tier::Danger,
            3 => Tier::Warning,
            _ => Tier::Positive,
        }
    }
}

/// Score a password in `0..=5`.
pub fn score(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let length = password.chars().count();
    let has_lower = password.chars().any(char::is_lowercase);
    let has_upper = password.chars().any(char::is_uppercase);

    let checks = [
        length >= 8,
        length >= 12,
        password.chars().any(is_digit),
        has_lower && has_upper,
        password.chars().any(alphabet::is_punctuation),
    ];

    let points = checks.iter().filter(|&&passed| passed).count() as u8;
    points.min(MAX_SCORE)
}

/// Decimal digits in any script, plus the superscript, subscript and
/// enclosed forms of a single digit. Fractions, Roman numerals and enclosed
/// numbers above 9 are not digits.
fn is_digit(c: char) -> bool {
    if get_general_category(c) == GeneralCategory::DecimalNumber {
        return true;
    }
    matches!(
        c,
        '\u{00B2}' | '\u{00B3}' | '\u{00B9}'     // ² ³ ¹
            | '\u{1369}'..='\u{1371}'           // Ethiopic digits
            | '\u{19DA}'
            | '\u{2070}' | '\u{2074}'..='\u{2079}' // superscripts
            | '\u{2080}'..='\u{2089}'           // subscripts
            | '\u{2460}'..='\u{2468}'           // ① to ⑨
            | '\u{2474}'..='\u{247C}'           // ⑴ to ⑼
            | '\u{2488}'..='\u{2490}'           // ⒈ to ⒐
            | '\u{24EA}'
            | '\u{24F5}'..='\u{24FD}'
            | '\u{24FF}'
            | '\u{2776}'..='\u{277E}'
            | '\u{2780}'..='\u{2788}'
            | '\u{278A}'..='\u{2792}'
            | '\u{1F100}'..='\u{1F10A}'
    )
}
