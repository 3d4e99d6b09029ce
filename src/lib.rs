//! Three-rotor Enigma cipher engine.
//!
//! A faithful reproduction of the Enigma I / M3 algorithm: a plugboard, three
//! stepping rotors with ring settings and the double-step anomaly, and a
//! reflector. The result is a reciprocal letter substitution; it is of
//! historical interest only and offers no security.
//!
//! # Architecture
//!
//! ```text
//! alphabet     (letter <-> ordinal 0..26)
//!     |
//! Permutation  (invertible 26-symbol mapping)
//!     |-- Plugboard  (<= 10 disjoint swaps)
//!     |-- Reflector  (fixed involution)
//!     '-- Rotor      (wiring + ring setting + offset + turnover)
//!             |
//!         RotorAssembly  (left, middle, right; stepping)
//!             |
//!         CipherEngine   (signal path, message loop)
//! ```
//!
//! # Examples
//!
//! Encode and decode with the same settings:
//!
//! ```
//! use enigma::{CipherEngine, REFLECTOR_B};
//!
//! let plugs = ["AV", "BS", "CG", "DL", "FU", "HZ", "IN", "KM", "OW", "RX"];
//! let mut machine =
//!     CipherEngine::new(&[2, 4, 5], &[25, 1, 6], &plugs, &[3, 19, 6], REFLECTOR_B).unwrap();
//!
//! let ciphertext = machine.encode_message("Attack at dawn!");
//! assert_eq!(ciphertext.len(), 12);
//!
//! machine.reset();
//! assert_eq!(machine.decode_message(&ciphertext), "ATTACKATDAWN");
//! ```
//!
//! Load the settings from JSON:
//!
//! ```
//! use enigma::{CipherEngine, MachineConfig};
//!
//! let config: MachineConfig = serde_json::from_str(r#"{
//!     "rotor_selection": [1, 2, 3],
//!     "rotor_settings": [1, 1, 1],
//!     "ring_positions": [2, 2, 2],
//!     "plugs": [],
//!     "reflector": "YRUHQSLDPXNGOKMIEBFZCWVJAT"
//! }"#).unwrap();
//!
//! let mut machine = CipherEngine::from_config(&config).unwrap();
//! assert_eq!(machine.encode_message("AAAAA"), "EWTYX");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod config;
mod machine;
mod permutation;
mod plugboard;
mod reflector;
mod rotor;
mod rotor_assembly;

pub use config::MachineConfig;
pub use error::ConfigError;
pub use machine::CipherEngine;
pub use permutation::Permutation;
pub use plugboard::{Plugboard, MAX_PLUG_PAIRS};
pub use reflector::{Reflector, REFLECTOR_B, REFLECTOR_C};
pub use rotor::{Direction, Rotor, RotorKind};
pub use rotor_assembly::{RotorAssembly, Step, ROTOR_SLOTS};
