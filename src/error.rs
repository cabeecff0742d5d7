use std::io;
use std::path::PathBuf;

use symphonia::core::errors::Error as SymphoniaError;
use thiserror::Error;

/// Errors surfaced by the naming and transfer operations.
///
/// An unrecognized audio source is not represented here: it is recovered
/// internally by falling back to a plain byte copy.
#[derive(Debug, Error)]
pub enum Error {
    /// A maximum name length of zero was passed to the name escaper.
    #[error("maximum name length must be greater than zero")]
    InvalidMaxLength,

    /// Source and destination of a transfer resolve to the same file.
    #[error("source and destination are the same file: {0}")]
    SamePath(PathBuf),

    /// Failure opening, reading, writing, or creating a file.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The source decoded as audio up to a point, then failed.
    #[error("audio decoding failed: {0}")]
    Decode(#[from] SymphoniaError),

    /// Sample-rate conversion failed.
    #[error("resampling failed: {0}")]
    Resample(String),

    /// Writing the destination WAV container failed.
    #[error("WAV encoding failed: {0}")]
    WavEncode(#[from] hound::Error),
}
