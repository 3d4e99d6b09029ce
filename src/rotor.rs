//! Rotor (Walze): a wired wheel with a ring setting and a turnover notch.
//!
//! A rotor is an immutable wiring [`Permutation`] plus a running `offset`.
//! The substitution at any instant is the wiring conjugated by the cyclic
//! shift `offset - ring_setting`; stepping only increments the offset, so
//! nothing is rebuilt per keystroke.
//!
//! Offsets, ring settings and turnover values use 1-based positions
//! (1 = `A`, 26 = `Z`).

use crate::alphabet::ALPHABET_SIZE;
use crate::error::ConfigError;
use crate::permutation::Permutation;

const SIZE: u8 = ALPHABET_SIZE as u8;

/// The five historical rotors of the Enigma I / M3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorKind {
    /// Rotor I, notch at Q.
    I,
    /// Rotor II, notch at E.
    II,
    /// Rotor III, notch at V.
    III,
    /// Rotor IV, notch at J.
    IV,
    /// Rotor V, notch at Z.
    V,
}

impl RotorKind {
    /// All rotor kinds in numeric order.
    pub const ALL: [RotorKind; 5] = [
        RotorKind::I,
        RotorKind::II,
        RotorKind::III,
        RotorKind::IV,
        RotorKind::V,
    ];

    /// Looks up a rotor by its number (1 to 5).
    ///
    /// # Errors
    /// Returns [`ConfigError::OutOfRangeSetting`] for any other number.
    pub fn from_number(number: usize) -> Result<Self, ConfigError> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(ConfigError::OutOfRangeSetting {
                field: "rotor_selection",
                value: number,
                min: 1,
                max: Self::ALL.len(),
            })
    }

    /// The rotor number (1 to 5).
    pub fn number(self) -> usize {
        self as usize + 1
    }

    /// Historical wiring: the letter at index `i` is where contact `i` leads.
    pub fn wiring(self) -> &'static str {
        match self {
            RotorKind::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorKind::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorKind::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorKind::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorKind::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
        }
    }

    /// Offset this rotor reaches by stepping past its notch.
    ///
    /// When a rotor's offset becomes this value, the rotor to its left is
    /// carried along (notches Q, E, V, J, Z → R, F, W, K, A).
    pub fn turnover(self) -> u8 {
        match self {
            RotorKind::I => 18,
            RotorKind::II => 6,
            RotorKind::III => 23,
            RotorKind::IV => 11,
            RotorKind::V => 1,
        }
    }
}

/// Which way the signal crosses a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Entering from the plugboard side, heading for the reflector.
    Forward,
    /// Entering from the reflector side, heading back to the plugboard.
    Backward,
}

/// A single rotor installed in the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    number: usize,
    wiring: Permutation,
    ring_setting: u8,
    turnover: u8,
    offset: u8,
}

impl Rotor {
    /// Creates one of the five historical rotors.
    ///
    /// # Parameters
    /// - `kind`: Which rotor.
    /// - `offset`: Starting position, 1 to 26 (Grundstellung).
    /// - `ring_setting`: Ring position, 1 to 26 (Ringstellung).
    ///
    /// # Errors
    /// Returns [`ConfigError::OutOfRangeSetting`] if `offset` or
    /// `ring_setting` is outside 1 to 26.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Direction, Rotor, RotorKind};
    ///
    /// let rotor = Rotor::new(RotorKind::I, 1, 1).unwrap();
    /// assert_eq!(rotor.substitute(0, Direction::Forward), 4); // A -> E
    /// assert_eq!(rotor.substitute(4, Direction::Backward), 0);
    /// ```
    pub fn new(kind: RotorKind, offset: usize, ring_setting: usize) -> Result<Self, ConfigError> {
        Self::from_wiring(kind.wiring(), offset, kind.number(), ring_setting)
    }

    /// Creates a rotor from an arbitrary wiring string.
    ///
    /// The turnover value is taken from the historical rotor with number
    /// `rotor_number`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidWiring`] for a bad wiring string, or
    /// [`ConfigError::OutOfRangeSetting`] for a bad number, offset or ring.
    pub fn from_wiring(
        wiring: &str,
        offset: usize,
        rotor_number: usize,
        ring_setting: usize,
    ) -> Result<Self, ConfigError> {
        let kind = RotorKind::from_number(rotor_number)?;
        let offset = position("rotor_settings", offset)?;
        let ring_setting = position("ring_positions", ring_setting)?;
        Ok(Rotor {
            number: rotor_number,
            wiring: Permutation::from_wiring(wiring)?,
            ring_setting,
            turnover: kind.turnover(),
            offset,
        })
    }

    /// Cyclic shift between the letter ring and the wiring core.
    #[inline]
    fn shift(&self) -> u8 {
        (self.offset + SIZE - self.ring_setting) % SIZE
    }

    /// Passes `ordinal` through the rotor at its current offset.
    ///
    /// A forward pass followed by a backward pass at the same offset returns
    /// the original ordinal.
    ///
    /// # Panics
    /// Panics if `ordinal >= 26`.
    #[inline]
    pub fn substitute(&self, ordinal: u8, direction: Direction) -> u8 {
        assert!(ordinal < SIZE, "ordinal {ordinal} is not a letter");
        let shift = self.shift();
        let contact = (ordinal + shift) % SIZE;
        let wired = match direction {
            Direction::Forward => self.wiring.apply(contact),
            Direction::Backward => self.wiring.invert(contact),
        };
        (wired + SIZE - shift) % SIZE
    }

    /// Moves the rotor one position, wrapping from 26 back to 1.
    pub fn advance(&mut self) {
        self.offset = self.offset % SIZE + 1;
    }

    /// True if the offset has just reached the turnover value.
    pub fn at_turnover(&self) -> bool {
        self.offset == self.turnover
    }

    /// True if the next step will reach the turnover value.
    pub fn before_turnover(&self) -> bool {
        self.offset + 1 == self.turnover
    }

    /// The forward substitution at the current offset as a full table.
    pub fn effective_wiring(&self) -> Permutation {
        let mut table = [0u8; ALPHABET_SIZE];
        for (i, item) in table.iter_mut().enumerate() {
            *item = self.substitute(i as u8, Direction::Forward);
        }
        // Conjugating a permutation by a shift cannot break bijectivity.
        Permutation::from_table(table).unwrap_or_default()
    }

    /// Historical rotor number (1 to 5) that supplied the turnover.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Current position, 1 to 26.
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Ring position, 1 to 26.
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Offset at which this rotor carries its left neighbour.
    pub fn turnover(&self) -> u8 {
        self.turnover
    }

    /// Puts the rotor back at a previously validated offset.
    pub(crate) fn set_offset(&mut self, offset: u8) {
        debug_assert!((1..=SIZE).contains(&offset));
        self.offset = offset;
    }
}

/// Validates a 1-based position setting.
fn position(field: &'static str, value: usize) -> Result<u8, ConfigError> {
    if (1..=ALPHABET_SIZE).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ConfigError::OutOfRangeSetting {
            field,
            value,
            min: 1,
            max: ALPHABET_SIZE,
        })
    }
}
