//! Error types for the Enigma machine library.
//!
//! Every error is a configuration error: the machine validates its whole
//! setup at construction and never fails while encoding.

use thiserror::Error;

/// Errors produced while building a machine or one of its components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A rotor or reflector wiring string is not a permutation of A-Z.
    #[error("invalid wiring \"{wiring}\": {reason}")]
    InvalidWiring {
        /// The wiring string as supplied.
        wiring: String,
        /// What is wrong with it.
        reason: String,
    },
    /// A plug pair is malformed, reuses a letter, or there are too many pairs.
    #[error("invalid plug pairing \"{pair}\": {reason}")]
    InvalidPlugPairing {
        /// The offending pair (or a summary when the pair count is wrong).
        pair: String,
        /// What is wrong with it.
        reason: String,
    },
    /// A rotor number, starting offset or ring position is outside its range.
    #[error("{field} value {value} is outside the valid range {min}..={max}")]
    OutOfRangeSetting {
        /// Name of the configuration field.
        field: &'static str,
        /// The rejected value.
        value: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },
    /// A per-rotor configuration list does not have exactly three entries.
    #[error("{field} must have exactly {expected} entries, found {found}")]
    ArityMismatch {
        /// Name of the configuration field.
        field: &'static str,
        /// Required number of entries.
        expected: usize,
        /// Number of entries supplied.
        found: usize,
    },
}

impl ConfigError {
    pub(crate) fn invalid_wiring(wiring: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidWiring {
            wiring: wiring.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_plug(pair: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidPlugPairing {
            pair: pair.to_string(),
            reason: reason.into(),
        }
    }
}
