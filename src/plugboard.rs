//! Plugboard (Steckerbrett): swaps up to ten disjoint letter pairs.
//!
//! The board is applied once on the way into the rotor stack and once on
//! the way out. Because it is an involution the same board undoes itself.

use crate::alphabet::{to_letter, to_ordinal, ALPHABET_SIZE};
use crate::error::ConfigError;
use crate::permutation::Permutation;

/// Maximum number of cables on the historical plugboard.
pub const MAX_PLUG_PAIRS: usize = 10;

/// Pre/post substitution layer built from disjoint letter pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: Permutation,
    pairs: Vec<[u8; 2]>,
}

impl Plugboard {
    /// A board with no cables: every letter maps to itself.
    pub fn empty() -> Self {
        Plugboard {
            wiring: Permutation::identity(),
            pairs: Vec::new(),
        }
    }

    /// Builds a plugboard from two-letter pair strings such as `"AV"`.
    ///
    /// Pairs are case-insensitive. Letters not mentioned are left unswapped.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPlugPairing`] if more than
    /// [`MAX_PLUG_PAIRS`] pairs are given, a pair is not exactly two distinct
    /// letters, or a letter appears in more than one pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// let board = Plugboard::new(&["AV", "BS"]).unwrap();
    /// assert_eq!(board.substitute(0), 21); // A <-> V
    /// assert_eq!(board.substitute(21), 0);
    /// assert_eq!(board.substitute(2), 2);  // C is unplugged
    ///
    /// assert!(Plugboard::new(&["AB", "BC"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(plugs: &[S]) -> Result<Self, ConfigError> {
        if plugs.len() > MAX_PLUG_PAIRS {
            return Err(ConfigError::invalid_plug(
                &format!("{} pairs", plugs.len()),
                format!("at most {} pairs are allowed", MAX_PLUG_PAIRS),
            ));
        }

        let mut table = [0u8; ALPHABET_SIZE];
        for (i, item) in table.iter_mut().enumerate() {
            *item = i as u8;
        }
        let mut plugged = [false; ALPHABET_SIZE];
        let mut pairs = Vec::with_capacity(plugs.len());

        for plug in plugs {
            let [a, b] = Self::parse_pair(plug.as_ref())?;
            for letter in [a, b] {
                if plugged[letter as usize] {
                    return Err(ConfigError::invalid_plug(
                        plug.as_ref(),
                        format!("letter {} is already plugged", to_letter(letter)),
                    ));
                }
                plugged[letter as usize] = true;
            }
            table[a as usize] = b;
            table[b as usize] = a;
            pairs.push([a, b]);
        }

        Ok(Plugboard {
            wiring: Permutation::from_table(table)?,
            pairs,
        })
    }

    fn parse_pair(plug: &str) -> Result<[u8; 2], ConfigError> {
        let mut chars = plug.chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ConfigError::invalid_plug(plug, "a pair must be exactly two letters"));
        };
        let a = to_ordinal(first)
            .ok_or_else(|| ConfigError::invalid_plug(plug, format!("{:?} is not a letter", first)))?;
        let b = to_ordinal(second)
            .ok_or_else(|| ConfigError::invalid_plug(plug, format!("{:?} is not a letter", second)))?;
        if a == b {
            return Err(ConfigError::invalid_plug(
                plug,
                "a letter cannot be plugged to itself",
            ));
        }
        Ok([a, b])
    }

    /// Swaps `ordinal` with its partner, or returns it unchanged.
    #[inline]
    pub fn substitute(&self, ordinal: u8) -> u8 {
        self.wiring.apply(ordinal)
    }

    /// The configured pairs as uppercase two-letter strings, in input order.
    pub fn pairs(&self) -> Vec<String> {
        self.pairs
            .iter()
            .map(|&[a, b]| [to_letter(a), to_letter(b)].iter().collect())
            .collect()
    }

    /// Number of cables in use.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if no cables are plugged.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The underlying wiring.
    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLUGS: [&str; 10] = ["AV", "BS", "CG", "DL", "FU", "HZ", "IN", "KM", "OW", "RX"];

    #[test]
    fn test_empty_is_identity() {
        let board = Plugboard::empty();
        for i in 0..26u8 {
            assert_eq!(board.substitute(i), i);
        }
        assert!(board.is_empty());
    }

    #[test]
    fn test_full_board_is_involution() {
        let board = Plugboard::new(&PLUGS).unwrap();
        assert_eq!(board.len(), 10);
        for i in 0..26u8 {
            assert_eq!(board.substitute(board.substitute(i)), i);
        }
        // 20 letters swapped, 6 untouched
        assert_eq!(board.wiring().fixed_points(), 6);
    }

    #[test]
    fn test_lowercase_pairs() {
        let upper = Plugboard::new(&["QH", "EN"]).unwrap();
        let lower = Plugboard::new(&["qh", "eN"]).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower.pairs(), vec!["QH".to_string(), "EN".to_string()]);
    }

    #[test]
    fn test_reused_letter_rejected() {
        let err = Plugboard::new(&["AB", "BC"]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlugPairing { .. }));
    }

    #[test]
    fn test_repeated_pair_rejected() {
        let err = Plugboard::new(&["AB", "BA"]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlugPairing { .. }));
    }

    #[test]
    fn test_self_pair_rejected() {
        assert!(matches!(
            Plugboard::new(&["AA"]),
            Err(ConfigError::InvalidPlugPairing { .. })
        ));
    }

    #[test]
    fn test_malformed_pairs_rejected() {
        for bad in ["A", "ABC", "", "A1", "-B"] {
            assert!(
                matches!(
                    Plugboard::new(&[bad]),
                    Err(ConfigError::InvalidPlugPairing { .. })
                ),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_too_many_pairs_rejected() {
        let mut plugs: Vec<&str> = PLUGS.to_vec();
        plugs.push("EJ");
        assert!(matches!(
            Plugboard::new(plugs.as_slice()),
            Err(ConfigError::InvalidPlugPairing { .. })
        ));
    }
}
