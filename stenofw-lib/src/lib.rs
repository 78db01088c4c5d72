//! Output side of a steno keyboard: turns a chord, the set of matrix cells
//! that were down together, into Gemini or TX Bolt packets for a serial
//! host, or into key presses for a USB keyboard.
//!
//! The protocol is picked with a cargo feature (`gemini`, `tx-bolt`,
//! `nkro`, `steno`, `diagnostic-electronic`, `diagnostic-haptic`), Gemini
//! when none is set, or at runtime through [`Protocol`]'s `FromStr` and
//! `TryFrom<u8>`.
#![cfg_attr(not(test), no_std)]

// Logging macros, needs to come first
mod fmt;

pub mod config;
pub mod hid;
pub mod keys;
pub mod keystroke;
pub mod matrix;
pub mod protocol;
pub mod sink;
pub mod usb_serial;

pub use config::ConfigError;
pub use keys::StenoKey;
pub use keystroke::{KeyEvent, KeySink, KeyStream};
pub use matrix::{ChordMatrix, MatrixIndex};
pub use protocol::{ChordSink, Encoded, OutputKind, Protocol};
