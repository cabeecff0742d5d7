//! Test fixtures for transfer and decode tests
//!
//! Generates small WAV and binary files on demand instead of shipping
//! fixture data in the repository.

#![cfg(test)]

use std::path::Path;

/// Write a short 440Hz sine WAV with the given encoding.
///
/// `frames` counts sample frames; every channel gets the same signal.
pub fn write_sine_wav(
    path: &Path,
    sample_rate: u32,
    bits_per_sample: u16,
    channels: u16,
    frames: u32,
) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("create wav fixture");

    let amplitude = ((1_i64 << (bits_per_sample - 1)) - 1) as f64 * 0.8;
    for frame in 0..frames {
        let t = frame as f64 / sample_rate as f64;
        let value = (t * 440.0 * 2.0 * std::f64::consts::PI).sin() * amplitude;
        for _ in 0..channels {
            match bits_per_sample {
                8 => writer.write_sample(value as i8).expect("write sample"),
                16 => writer.write_sample(value as i16).expect("write sample"),
                _ => writer.write_sample(value as i32).expect("write sample"),
            }
        }
    }
    writer.finalize().expect("finalize wav fixture");
}

/// Write `len` deterministic pseudo-random bytes.
pub fn write_binary(path: &Path, len: usize) {
    let mut data = Vec::with_capacity(len);
    let mut state: u32 = 0x2545_f491;
    for _ in 0..len {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        data.push((state >> 24) as u8);
    }
    std::fs::write(path, data).expect("write binary fixture");
}
