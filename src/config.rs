//! Machine configuration as supplied by an outside loader.
//!
//! [`MachineConfig`] is plain data that can be deserialized from JSON, TOML
//! or anything else serde understands. Nothing is validated until the
//! machine is built; there are no defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::machine::CipherEngine;
use crate::rotor_assembly::ROTOR_SLOTS;

/// Daily key settings for a three-rotor machine.
///
/// All per-rotor lists are ordered left, middle, right.
///
/// # Examples
///
/// ```
/// use enigma::MachineConfig;
///
/// let config = MachineConfig {
///     rotor_selection: vec![2, 4, 5],
///     rotor_settings: vec![25, 1, 6],
///     ring_positions: vec![3, 19, 6],
///     plugs: vec!["AV".into(), "BS".into()],
///     reflector: enigma::REFLECTOR_B.into(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotor numbers (1 to 5). Repeats are allowed.
    pub rotor_selection: Vec<usize>,
    /// Starting offsets (1 to 26).
    pub rotor_settings: Vec<usize>,
    /// Ring positions (1 to 26).
    pub ring_positions: Vec<usize>,
    /// Up to ten two-letter plug pairs. Required; an unplugged board is `[]`.
    pub plugs: Vec<String>,
    /// 26-letter reflector wiring.
    pub reflector: String,
}

impl MachineConfig {
    /// Checks every setting without keeping the machine.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found, in the same order as
    /// [`CipherEngine::from_config`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        CipherEngine::from_config(self).map(|_| ())
    }
}

/// Converts a per-rotor list into a fixed-size array.
pub(crate) fn per_rotor(
    field: &'static str,
    values: &[usize],
) -> Result<[usize; ROTOR_SLOTS], ConfigError> {
    <[usize; ROTOR_SLOTS]>::try_from(values).map_err(|_| ConfigError::ArityMismatch {
        field,
        expected: ROTOR_SLOTS,
        found: values.len(),
    })
}
