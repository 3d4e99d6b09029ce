//! Permutation: an invertible mapping over the 26 ordinals.
//!
//! Plugboard, reflector and rotor wirings are all stored as a
//! [`Permutation`]. The inverse table is built once at construction so both
//! directions are a single array lookup.

use crate::alphabet::{to_letter, to_ordinal, ALPHABET_SIZE};
use crate::error::ConfigError;

/// Bijection on `0..26` with precomputed inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation {
    forward: [u8; ALPHABET_SIZE],
    inverse: [u8; ALPHABET_SIZE],
}

impl Permutation {
    /// The identity permutation.
    pub fn identity() -> Self {
        let mut forward = [0u8; ALPHABET_SIZE];
        for (i, item) in forward.iter_mut().enumerate() {
            *item = i as u8;
        }
        Permutation {
            forward,
            inverse: forward,
        }
    }

    /// Parses a 26-letter wiring string, where the letter at index `i` is
    /// the image of ordinal `i`.
    ///
    /// Letters are accepted in either case.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidWiring`] if the string is not exactly
    /// 26 letters, contains a non-letter, or repeats a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Permutation;
    ///
    /// let p = Permutation::from_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// assert_eq!(p.apply(0), 4); // A -> E
    /// assert_eq!(p.invert(4), 0);
    ///
    /// assert!(Permutation::from_wiring("AABCDEFGHIJKLMNOPQRSTUVWXY").is_err());
    /// ```
    pub fn from_wiring(wiring: &str) -> Result<Self, ConfigError> {
        let count = wiring.chars().count();
        if count != ALPHABET_SIZE {
            return Err(ConfigError::invalid_wiring(
                wiring,
                format!("expected {} letters, found {}", ALPHABET_SIZE, count),
            ));
        }

        let mut table = [0u8; ALPHABET_SIZE];
        for (i, c) in wiring.chars().enumerate() {
            table[i] = to_ordinal(c).ok_or_else(|| {
                ConfigError::invalid_wiring(wiring, format!("{:?} is not a letter", c))
            })?;
        }
        Self::from_table(table).map_err(|_| {
            ConfigError::invalid_wiring(wiring, "letters must not repeat")
        })
    }

    /// Builds a permutation from a table of images.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidWiring`] if any value is out of range or
    /// appears twice.
    pub fn from_table(table: [u8; ALPHABET_SIZE]) -> Result<Self, ConfigError> {
        let mut inverse = [u8::MAX; ALPHABET_SIZE];
        for (i, &image) in table.iter().enumerate() {
            let slot = inverse.get_mut(image as usize).ok_or_else(|| {
                ConfigError::invalid_wiring(&format!("{:?}", table), "ordinal out of range")
            })?;
            if *slot != u8::MAX {
                return Err(ConfigError::invalid_wiring(
                    &format!("{:?}", table),
                    format!("ordinal {} appears more than once", image),
                ));
            }
            *slot = i as u8;
        }
        Ok(Permutation {
            forward: table,
            inverse,
        })
    }

    /// Image of `ordinal`.
    #[inline]
    pub fn apply(&self, ordinal: u8) -> u8 {
        self.forward[ordinal as usize]
    }

    /// Preimage of `ordinal`: the `j` with `apply(j) == ordinal`.
    #[inline]
    pub fn invert(&self, ordinal: u8) -> u8 {
        self.inverse[ordinal as usize]
    }

    /// True if applying the permutation twice is the identity.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// Number of ordinals mapped to themselves.
    pub fn fixed_points(&self) -> usize {
        self.forward
            .iter()
            .enumerate()
            .filter(|&(i, &image)| i == image as usize)
            .count()
    }

    /// Renders the forward table as a 26-letter wiring string.
    pub fn to_wiring(&self) -> String {
        self.forward.iter().map(|&o| to_letter(o)).collect()
    }
}

impl Default for Permutation {
    fn default() -> Self {
        Self::identity()
    }
}
