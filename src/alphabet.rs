//! Letter ↔ ordinal conversion.
//!
//! The machine works on ordinals 0..26 internally; letters only appear at
//! the edges (wiring strings, plug pairs, messages).

/// Number of letters on every wheel, plugboard and reflector.
pub const ALPHABET_SIZE: usize = 26;

/// Canonical (uppercase) alphabet in ordinal order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Converts a letter to its ordinal, case-insensitively.
///
/// Returns `None` for anything outside `A-Z`/`a-z`.
///
/// # Examples
///
/// ```
/// use enigma::alphabet::to_ordinal;
///
/// assert_eq!(to_ordinal('A'), Some(0));
/// assert_eq!(to_ordinal('z'), Some(25));
/// assert_eq!(to_ordinal('!'), None);
/// ```
pub fn to_ordinal(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Converts an ordinal back to its uppercase letter.
///
/// # Panics
/// Panics in debug builds if `ordinal >= 26`; every ordinal handed out by
/// this crate is already in range.
pub fn to_letter(ordinal: u8) -> char {
    debug_assert!((ordinal as usize) < ALPHABET_SIZE);
    (b'A' + ordinal) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bijection() {
        for (i, c) in ALPHABET.chars().enumerate() {
            assert_eq!(to_ordinal(c), Some(i as u8));
            assert_eq!(to_letter(i as u8), c);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(to_ordinal('m'), to_ordinal('M'));
    }

    #[test]
    fn test_rejects_non_letters() {
        for c in [' ', ',', '1', 'É', 'ß', '\n'] {
            assert_eq!(to_ordinal(c), None, "{:?} should not map", c);
        }
    }
}
