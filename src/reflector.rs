//! Reflector (Umkehrwalze): turns the signal back through the rotors.

use crate::error::ConfigError;
use crate::permutation::Permutation;

/// Wide reflector B, the usual choice on the M3.
pub const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// Wide reflector C.
pub const REFLECTOR_C: &str = "FVPJIAOYEDRZXWGCTKUQSBNMHL";

/// Fixed wiring applied between the forward and backward rotor passes.
///
/// A historical reflector is a fixed-point-free involution. That shape is
/// what makes the machine reciprocal, but it is not enforced here; see
/// [`is_proper`](Self::is_proper).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Permutation,
}

impl Reflector {
    /// Builds a reflector from a 26-letter wiring string.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidWiring`] if the string is not a
    /// permutation of the alphabet.
    pub fn new(wiring: &str) -> Result<Self, ConfigError> {
        Ok(Reflector {
            wiring: Permutation::from_wiring(wiring)?,
        })
    }

    /// Sends `ordinal` back through the reflector wiring.
    #[inline]
    pub fn substitute(&self, ordinal: u8) -> u8 {
        self.wiring.apply(ordinal)
    }

    /// True if the wiring is an involution with no fixed points.
    pub fn is_proper(&self) -> bool {
        self.wiring.is_involution() && self.wiring.fixed_points() == 0
    }

    /// The wiring as an uppercase string.
    pub fn wiring(&self) -> String {
        self.wiring.to_wiring()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_historical_reflectors_are_proper() {
        for wiring in [REFLECTOR_B, REFLECTOR_C] {
            let r = Reflector::new(wiring).unwrap();
            assert!(r.is_proper(), "{} should be proper", wiring);
            for i in 0..26u8 {
                assert_ne!(r.substitute(i), i);
                assert_eq!(r.substitute(r.substitute(i)), i);
            }
        }
    }

    #[test]
    fn test_improper_reflector_accepted() {
        let r = Reflector::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert!(!r.is_proper());
    }

    #[test]
    fn test_invalid_reflector_rejected() {
        assert!(matches!(
            Reflector::new("YRUHQSLDPXNGOKMIEBFZCWVJA"),
            Err(ConfigError::InvalidWiring { .. })
        ));
    }
}
