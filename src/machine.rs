//! CipherEngine: plugboard, rotor assembly and reflector wired together.
//!
//! Every keystroke first steps the rotors and then sends the letter along
//! the signal path:
//!
//! ```text
//! key -> plugboard -> right -> middle -> left -> reflector
//!                                                   |
//! lamp <- plugboard <- right <- middle <- left <----+
//! ```
//!
//! Encoding is reciprocal: a machine reset to the same starting offsets
//! turns the ciphertext back into the plaintext.

use tracing::{debug, trace, warn};

use crate::alphabet::{to_letter, to_ordinal, ALPHABET_SIZE};
use crate::config::{per_rotor, MachineConfig};
use crate::error::ConfigError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::{Rotor, RotorKind};
use crate::rotor_assembly::{RotorAssembly, ROTOR_SLOTS};

/// A configured three-rotor Enigma.
///
/// The only state that changes while encoding is the rotor offsets, see
/// [`current_state`](Self::current_state). A single instance must not be
/// shared between threads without external locking; independent instances
/// have nothing in common.
#[derive(Debug, Clone)]
pub struct CipherEngine {
    plugboard: Plugboard,
    rotors: RotorAssembly,
    reflector: Reflector,
    start_offsets: [u8; ROTOR_SLOTS],
}

impl CipherEngine {
    /// Builds a machine from the daily key settings.
    ///
    /// # Parameters
    /// - `rotor_selection`: Rotor numbers (1 to 5), left to right.
    /// - `rotor_settings`: Starting offsets (1 to 26), left to right.
    /// - `plugs`: Up to ten disjoint two-letter pairs.
    /// - `ring_positions`: Ring settings (1 to 26), left to right.
    /// - `reflector`: 26-letter reflector wiring.
    ///
    /// # Errors
    /// - [`ConfigError::ArityMismatch`] if a per-rotor list does not have
    ///   three entries.
    /// - [`ConfigError::OutOfRangeSetting`] for a bad rotor number, offset
    ///   or ring position.
    /// - [`ConfigError::InvalidWiring`] for a bad reflector string.
    /// - [`ConfigError::InvalidPlugPairing`] for bad plugs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{CipherEngine, REFLECTOR_B};
    ///
    /// let mut machine = CipherEngine::new(&[1, 2, 3], &[1, 1, 1], &[] as &[&str], &[1, 1, 1], REFLECTOR_B).unwrap();
    /// assert_eq!(machine.encode_message("AAAAA"), "BDZGO");
    ///
    /// machine.reset();
    /// assert_eq!(machine.decode_message("BDZGO"), "AAAAA");
    /// ```
    pub fn new<S: AsRef<str>>(
        rotor_selection: &[usize],
        rotor_settings: &[usize],
        plugs: &[S],
        ring_positions: &[usize],
        reflector: &str,
    ) -> Result<Self, ConfigError> {
        let selection = per_rotor("rotor_selection", rotor_selection)?;
        let settings = per_rotor("rotor_settings", rotor_settings)?;
        let rings = per_rotor("ring_positions", ring_positions)?;

        let rotors = RotorAssembly::new([
            Rotor::new(RotorKind::from_number(selection[0])?, settings[0], rings[0])?,
            Rotor::new(RotorKind::from_number(selection[1])?, settings[1], rings[1])?,
            Rotor::new(RotorKind::from_number(selection[2])?, settings[2], rings[2])?,
        ]);
        let start_offsets = rotors.offsets();
        let reflector = Reflector::new(reflector)?;
        let plugboard = Plugboard::new(plugs)?;

        if selection[0] == selection[1] || selection[1] == selection[2] || selection[0] == selection[2] {
            warn!(?selection, "rotor selection repeats a rotor");
        }
        if !reflector.is_proper() {
            warn!(
                reflector = %reflector.wiring(),
                "reflector is not a fixed-point-free involution; output may not be reciprocal"
            );
        }
        debug!(
            ?selection,
            offsets = ?start_offsets,
            rings = ?rings,
            plugs = plugboard.len(),
            "cipher engine configured"
        );

        Ok(CipherEngine {
            plugboard,
            rotors,
            reflector,
            start_offsets,
        })
    }

    /// Builds a machine from a [`MachineConfig`].
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn from_config(config: &MachineConfig) -> Result<Self, ConfigError> {
        Self::new(
            &config.rotor_selection,
            &config.rotor_settings,
            config.plugs.as_slice(),
            &config.ring_positions,
            &config.reflector,
        )
    }

    /// Encodes one letter given as an ordinal (0 = A).
    ///
    /// Steps the rotors first, then runs the full signal path.
    ///
    /// # Panics
    /// Panics if `ordinal >= 26`. The rotors are left untouched in that case.
    pub fn encode_letter(&mut self, ordinal: u8) -> u8 {
        assert!(
            (ordinal as usize) < ALPHABET_SIZE,
            "ordinal {ordinal} is not a letter"
        );
        self.rotors.step();

        let x = self.plugboard.substitute(ordinal);
        let x = self.rotors.pass_forward(x);
        let x = self.reflector.substitute(x);
        let x = self.rotors.pass_backward(x);
        self.plugboard.substitute(x)
    }

    /// Encodes a single character.
    ///
    /// Returns `None`, leaving the rotors where they are, for anything
    /// that is not an ASCII letter.
    pub fn encode_char(&mut self, c: char) -> Option<char> {
        to_ordinal(c).map(|o| to_letter(self.encode_letter(o)))
    }

    /// Encodes a message.
    ///
    /// Letters are upper-cased; everything else (spaces, digits,
    /// punctuation) is dropped and does not move the rotors.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{CipherEngine, REFLECTOR_B};
    ///
    /// let mut machine = CipherEngine::new(&[1, 2, 3], &[1, 1, 1], &[] as &[&str], &[1, 1, 1], REFLECTOR_B).unwrap();
    /// assert_eq!(machine.encode_message("Hello, World!"), "ILBDAAMTAZ");
    /// ```
    pub fn encode_message(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.encode_char(c) {
                Some(encoded) => out.push(encoded),
                None => trace!(?c, "skipping non-letter"),
            }
        }
        out
    }

    /// Decodes a message. Identical to [`encode_message`](Self::encode_message)
    /// since the machine is reciprocal; the rotors must be at the offsets
    /// used for encoding.
    pub fn decode_message(&mut self, text: &str) -> String {
        self.encode_message(text)
    }

    /// Current offsets as `(left, middle, right)`.
    pub fn current_state(&self) -> (u8, u8, u8) {
        let [left, middle, right] = self.rotors.offsets();
        (left, middle, right)
    }

    /// Returns the rotors to their starting offsets.
    pub fn reset(&mut self) {
        self.rotors.set_offsets(self.start_offsets);
        debug!(offsets = ?self.start_offsets, "cipher engine reset");
    }

    /// Rotor numbers, left to right.
    pub fn rotor_selection(&self) -> [usize; ROTOR_SLOTS] {
        let rotors = self.rotors.rotors();
        [rotors[0].number(), rotors[1].number(), rotors[2].number()]
    }

    /// Ring positions, left to right.
    pub fn ring_positions(&self) -> [u8; ROTOR_SLOTS] {
        let rotors = self.rotors.rotors();
        [
            rotors[0].ring_setting(),
            rotors[1].ring_setting(),
            rotors[2].ring_setting(),
        ]
    }

    /// Offsets the machine starts from and returns to on [`reset`](Self::reset).
    pub fn starting_offsets(&self) -> [u8; ROTOR_SLOTS] {
        self.start_offsets
    }

    /// The installed plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// The installed reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The rotor stack at its current offsets.
    pub fn rotors(&self) -> &RotorAssembly {
        &self.rotors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflector::REFLECTOR_B;

    const PLUGS: [&str; 10] = ["AV", "BS", "CG", "DL", "FU", "HZ", "IN", "KM", "OW", "RX"];

    fn reference_machine() -> CipherEngine {
        CipherEngine::new(&[2, 4, 5], &[25, 1, 6], &PLUGS, &[3, 19, 6], REFLECTOR_B).unwrap()
    }

    #[test]
    fn test_reference_single_letter() {
        let mut machine = reference_machine();
        assert_eq!(machine.encode_message("A"), "W");
        assert_eq!(machine.current_state(), (25, 1, 7));

        let mut machine = reference_machine();
        assert_eq!(machine.encode_message("W"), "A");
    }

    #[test]
    fn test_reference_message() {
        let mut machine = reference_machine();
        assert_eq!(machine.encode_message("HELLOWORLD"), "ULOIMYCGIF");
        assert_eq!(machine.current_state(), (25, 1, 16));
    }

    #[test]
    #[should_panic(expected = "not a letter")]
    fn test_encode_letter_rejects_out_of_range_ordinal() {
        reference_machine().encode_letter(26);
    }

    #[test]
    fn test_out_of_range_ordinal_leaves_rotors_alone() {
        let mut machine = reference_machine();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            machine.encode_letter(200);
        }));
        assert!(result.is_err());
        assert_eq!(machine.current_state(), (25, 1, 6));
    }

    #[test]
    fn test_non_letters_do_not_step() {
        let mut machine = reference_machine();
        let out = machine.encode_message("Hi, Mom!");
        assert_eq!(out, "UTYAO");
        assert_eq!(out.len(), 5);
        assert_eq!(machine.current_state(), (25, 1, 11));
    }

    #[test]
    fn test_encode_char_skips_without_stepping() {
        let mut machine = reference_machine();
        assert_eq!(machine.encode_char(' '), None);
        assert_eq!(machine.current_state(), (25, 1, 6));
        assert_eq!(machine.encode_char('a'), Some('W'));
    }

    #[test]
    fn test_reset_restores_start() {
        let mut machine = reference_machine();
        let cipher = machine.encode_message("THEQUICKBROWNFOX");
        assert_ne!(machine.current_state(), (25, 1, 6));
        machine.reset();
        assert_eq!(machine.current_state(), (25, 1, 6));
        assert_eq!(machine.decode_message(&cipher), "THEQUICKBROWNFOX");
    }

    #[test]
    fn test_no_letter_encodes_to_itself() {
        let mut machine = reference_machine();
        for _ in 0..200 {
            for x in 0..26u8 {
                let mut fresh = machine.clone();
                assert_ne!(fresh.encode_letter(x), x);
            }
            machine.encode_letter(0);
        }
    }

    #[test]
    fn test_accessors() {
        let machine = reference_machine();
        assert_eq!(machine.rotor_selection(), [2, 4, 5]);
        assert_eq!(machine.ring_positions(), [3, 19, 6]);
        assert_eq!(machine.starting_offsets(), [25, 1, 6]);
        assert_eq!(machine.plugboard().pairs().len(), 10);
        assert_eq!(machine.reflector().wiring(), REFLECTOR_B);
        assert_eq!(machine.rotors().offsets(), [25, 1, 6]);
    }

    #[test]
    fn test_duplicate_rotors_allowed() {
        let mut machine =
            CipherEngine::new(&[1, 1, 1], &[1, 1, 1], &[] as &[&str], &[1, 1, 1], REFLECTOR_B)
                .unwrap();
        let cipher = machine.encode_message("DUPLICATE");
        machine.reset();
        assert_eq!(machine.decode_message(&cipher), "DUPLICATE");
    }

    #[test]
    fn test_config_errors() {
        let none: &[&str] = &[];
        assert!(matches!(
            CipherEngine::new(&[1, 2], &[1, 1, 1], none, &[1, 1, 1], REFLECTOR_B),
            Err(ConfigError::ArityMismatch { field: "rotor_selection", found: 2, .. })
        ));
        assert!(matches!(
            CipherEngine::new(&[1, 2, 6], &[1, 1, 1], none, &[1, 1, 1], REFLECTOR_B),
            Err(ConfigError::OutOfRangeSetting { field: "rotor_selection", value: 6, .. })
        ));
        assert!(matches!(
            CipherEngine::new(&[1, 2, 3], &[1, 27, 1], none, &[1, 1, 1], REFLECTOR_B),
            Err(ConfigError::OutOfRangeSetting { field: "rotor_settings", value: 27, .. })
        ));
        assert!(matches!(
            CipherEngine::new(&[1, 2, 3], &[1, 1, 1], none, &[0, 1, 1], REFLECTOR_B),
            Err(ConfigError::OutOfRangeSetting { field: "ring_positions", value: 0, .. })
        ));
        assert!(matches!(
            CipherEngine::new(&[1, 2, 3], &[1, 1, 1], none, &[1, 1, 1], "ABC"),
            Err(ConfigError::InvalidWiring { .. })
        ));
        assert!(matches!(
            CipherEngine::new(&[1, 2, 3], &[1, 1, 1], &["AB", "BC"], &[1, 1, 1], REFLECTOR_B),
            Err(ConfigError::InvalidPlugPairing { .. })
        ));
    }
}
