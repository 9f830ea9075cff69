// src/generators/strength.rs
use super::password::SYMBOLS;
use crate::models::StrengthTier;

/// Rate a password by which character classes actually appear in it.
///
/// Lowercase, uppercase, and digit presence always count. Symbol presence
/// only counts when `symbols_requested` is set; an unrequested symbol is
/// ignored by the meter.
pub fn analyze_password_strength(password: &str, symbols_requested: bool) -> StrengthTier {
    let criteria = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        symbols_requested && password.bytes().any(|b| SYMBOLS.contains(&b)),
    ];

    match criteria.iter().filter(|&&met| met).count() {
        0 => StrengthTier::None,
        1 => StrengthTier::Weak,
        2 => StrengthTier::Medium,
        3 => StrengthTier::Good,
        _ => StrengthTier::Great,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_has_no_strength() {
        assert_eq!(analyze_password_strength("", true), StrengthTier::None);
    }

    #[test]
    fn single_class_is_weak() {
        assert_eq!(analyze_password_strength("abc", false), StrengthTier::Weak);
        assert_eq!(analyze_password_strength("1234", false), StrengthTier::Weak);
    }

    #[test]
    fn two_classes_are_medium() {
        assert_eq!(
            analyze_password_strength("abcDEF", false),
            StrengthTier::Medium
        );
    }

    #[test]
    fn three_classes_are_good() {
        assert_eq!(
            analyze_password_strength("abcABC12", false),
            StrengthTier::Good
        );
    }

    #[test]
    fn all_four_classes_are_great() {
        assert_eq!(
            analyze_password_strength("abcABC12!", true),
            StrengthTier::Great
        );
    }

    #[test]
    fn unrequested_symbols_do_not_count() {
        // Same content, symbol credit gated off.
        assert_eq!(
            analyze_password_strength("abcABC12!", false),
            StrengthTier::Good
        );
        assert_eq!(analyze_password_strength("+!?", false), StrengthTier::None);
    }

    #[test]
    fn requested_symbols_count_only_when_present() {
        assert_eq!(analyze_password_strength("abc", true), StrengthTier::Weak);
        assert_eq!(analyze_password_strength("abc!", true), StrengthTier::Medium);
    }

    #[test]
    fn tier_index_matches_criteria_count() {
        let cases = [
            ("", true, 0),
            ("a", false, 1),
            ("aB", false, 2),
            ("aB1", false, 3),
            ("aB1@", true, 4),
        ];
        for (password, symbols_requested, expected) in cases {
            let tier = analyze_password_strength(password, symbols_requested);
            assert_eq!(tier.criteria_met(), expected);
        }
    }

    #[test]
    fn classification_is_idempotent() {
        let first = analyze_password_strength("xY9+", true);
        let second = analyze_password_strength("xY9+", true);
        assert_eq!(first, second);
    }
}
