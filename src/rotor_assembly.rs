//! RotorAssembly: the three-rotor stack and its stepping mechanism.
//!
//! Rotors are held left to right in signal order. The signal enters at the
//! right rotor on its way to the reflector and leaves through it on the way
//! back.

use tracing::trace;

use crate::rotor::{Direction, Rotor};

/// Number of rotor slots in the machine.
pub const ROTOR_SLOTS: usize = 3;

const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

/// Which rotors moved during one stepping transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Only the right rotor advanced.
    Right,
    /// The right rotor reached its turnover and carried the middle rotor.
    RightAndMiddle,
    /// The middle rotor sat one short of its turnover and advanced together
    /// with the left rotor (the double-step anomaly).
    DoubleStep,
}

/// Ordered triple of rotors (left, middle, right).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorAssembly {
    rotors: [Rotor; ROTOR_SLOTS],
}

impl RotorAssembly {
    /// Creates an assembly from rotors in left, middle, right order.
    pub fn new(rotors: [Rotor; ROTOR_SLOTS]) -> Self {
        RotorAssembly { rotors }
    }

    /// Advances the rotors for one keystroke.
    ///
    /// Runs before the key's signal enters the rotors:
    /// 1. The right rotor always advances.
    /// 2. If the right rotor has just reached its turnover, the middle rotor
    ///    advances.
    /// 3. Otherwise, if the middle rotor was one position short of its
    ///    turnover before this keystroke, the middle and left rotors both
    ///    advance.
    ///
    /// # Returns
    /// The [`Step`] describing which rotors moved.
    pub fn step(&mut self) -> Step {
        let before = self.offsets();
        let middle_primed = self.rotors[MIDDLE].before_turnover();

        self.rotors[RIGHT].advance();

        let step = if self.rotors[RIGHT].at_turnover() {
            self.rotors[MIDDLE].advance();
            Step::RightAndMiddle
        } else if middle_primed {
            self.rotors[MIDDLE].advance();
            self.rotors[LEFT].advance();
            Step::DoubleStep
        } else {
            Step::Right
        };

        trace!(?before, after = ?self.offsets(), ?step, "rotors stepped");
        step
    }

    /// Passes the signal right to left through all rotors.
    pub fn pass_forward(&self, ordinal: u8) -> u8 {
        self.rotors
            .iter()
            .rev()
            .fold(ordinal, |x, rotor| rotor.substitute(x, Direction::Forward))
    }

    /// Passes the reflected signal left to right through all rotors.
    pub fn pass_backward(&self, ordinal: u8) -> u8 {
        self.rotors
            .iter()
            .fold(ordinal, |x, rotor| rotor.substitute(x, Direction::Backward))
    }

    /// Current offsets as `[left, middle, right]`.
    pub fn offsets(&self) -> [u8; ROTOR_SLOTS] {
        [
            self.rotors[LEFT].offset(),
            self.rotors[MIDDLE].offset(),
            self.rotors[RIGHT].offset(),
        ]
    }

    /// Restores previously validated offsets.
    pub(crate) fn set_offsets(&mut self, offsets: [u8; ROTOR_SLOTS]) {
        for (rotor, offset) in self.rotors.iter_mut().zip(offsets) {
            rotor.set_offset(offset);
        }
    }

    /// The rotors in left, middle, right order.
    pub fn rotors(&self) -> &[Rotor; ROTOR_SLOTS] {
        &self.rotors
    }
}
