//! PadKit - core file utilities for a sampler pad manager
//!
//! Two independent pieces, shared by the GUI layer that sits on top:
//!
//! - [`naming`]: deterministic, length-bounded shortening of sample names,
//!   with optional numeric uniquification for collision handling.
//! - [`transfer`]: byte-level file copy, optionally normalizing recognized
//!   audio sources to 16-bit/44.1kHz signed little-endian PCM WAV.
//!
//! Both are synchronous, blocking, and free of shared state; concurrent
//! calls with disjoint source/destination pairs are independent. Callers
//! writing the same destination from several threads must serialize
//! themselves.

pub mod audio;
pub mod error;
pub mod logging;
pub mod naming;
pub mod transfer;

#[cfg(test)]
mod test_fixtures;

pub use error::Error;
pub use naming::{escape_name, escape_name_indexed, has_wav_extension, strip_extension};
pub use transfer::transfer;
