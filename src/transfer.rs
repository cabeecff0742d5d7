//! File transfer with optional normalization to the canonical pad encoding
//!
//! The baseline is a plain chunked byte copy. When conversion is requested
//! the source is probed as audio; recognized streams that are not already
//! 16-bit/44.1kHz signed little-endian PCM are decoded, resampled if needed,
//! and rewritten as a WAV file. Anything that cannot be probed or decoded
//! degrades to the byte copy instead of failing.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use log::{debug, warn};
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::audio::{
    CANONICAL_BITS_PER_SAMPLE, CANONICAL_SAMPLE_RATE, DecodedAudio, StreamDescriptor,
    convert_sample_rate, decode_all,
};
use crate::error::Error;

const COPY_BUF_SIZE: usize = 8 * 1024;

/// Copy `src` to `dst`, optionally normalizing audio content.
///
/// With `convert` false this is a lossless, order-preserving byte copy.
/// With `convert` true the source is probed as audio first:
/// - not recognizable as audio: byte copy, logged, no error;
/// - already canonical PCM: byte copy (no redundant re-encode);
/// - anything else: decoded, resampled to 44.1kHz when needed, and written
///   as 16-bit signed PCM WAV with the source's channel count.
///
/// `src == dst` is rejected; a `convert=false`-style copy would be a no-op
/// but the conversion path would truncate the source before reading it.
/// I/O errors propagate; the destination may be left partially written.
pub fn transfer(src: &Path, dst: &Path, convert: bool) -> Result<(), Error> {
    if is_same_file(src, dst) {
        return Err(Error::SamePath(src.to_path_buf()));
    }

    if !convert {
        return copy_raw(src, dst);
    }

    let file = File::open(src)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = src.extension() {
        hint.with_extension(&ext.to_string_lossy());
    }

    let probed = match symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    ) {
        Ok(probed) => probed,
        Err(err) => {
            warn!(
                "'{}' is not a recognized audio stream ({}), copying verbatim",
                src.display(),
                err
            );
            return copy_raw(src, dst);
        }
    };

    let mut format = probed.format;
    let track = match format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
    {
        Some(track) => track.clone(),
        None => {
            warn!(
                "'{}' contains no decodable track, copying verbatim",
                src.display()
            );
            return copy_raw(src, dst);
        }
    };

    if let Some(descriptor) = StreamDescriptor::from_codec_params(&track.codec_params) {
        if descriptor.is_canonical() {
            debug!(
                "'{}' is already canonical PCM, copying verbatim",
                src.display()
            );
            return copy_raw(src, dst);
        }
    }

    let mut decoder =
        match symphonia::default::get_codecs().make(&track.codec_params, &DecoderOptions::default())
        {
            Ok(decoder) => decoder,
            Err(err) => {
                warn!(
                    "No decoder for '{}' ({}), copying verbatim",
                    src.display(),
                    err
                );
                return copy_raw(src, dst);
            }
        };

    let audio = match decode_all(format.as_mut(), decoder.as_mut(), track.id)? {
        Some(audio) => audio,
        None => {
            warn!(
                "'{}' decoded to zero audio frames, copying verbatim",
                src.display()
            );
            return copy_raw(src, dst);
        }
    };

    debug!(
        "Re-encoding '{}': {}Hz/{}ch -> {}Hz/16-bit PCM",
        src.display(),
        audio.sample_rate,
        audio.channels,
        CANONICAL_SAMPLE_RATE
    );
    write_canonical_wav(dst, &audio)
}

/// Raw chunked byte copy. Handles close on drop, on every path.
fn copy_raw(src: &Path, dst: &Path) -> Result<(), Error> {
    let mut reader = File::open(src)?;
    let mut writer = File::create(dst)?;
    copy_bytes(&mut reader, &mut writer)?;
    Ok(())
}

fn copy_bytes(reader: &mut impl Read, writer: &mut impl Write) -> std::io::Result<u64> {
    let mut buf = [0u8; COPY_BUF_SIZE];
    let mut total = 0u64;
    loop {
        let read = reader.read(&mut buf)?;
        if read == 0 {
            break;
        }
        writer.write_all(&buf[..read])?;
        total += read as u64;
    }
    writer.flush()?;
    Ok(total)
}

/// Decide whether both paths name the same underlying file.
///
/// Resolved via canonicalization when both paths exist; literal comparison
/// otherwise (a missing source fails later with the real I/O error).
fn is_same_file(src: &Path, dst: &Path) -> bool {
    if src == dst {
        return true;
    }
    match (fs::canonicalize(src), fs::canonicalize(dst)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn write_canonical_wav(dst: &Path, audio: &DecodedAudio) -> Result<(), Error> {
    let samples = convert_sample_rate(
        &audio.samples,
        audio.channels,
        audio.sample_rate,
        CANONICAL_SAMPLE_RATE,
    )?;

    let spec = hound::WavSpec {
        channels: audio.channels,
        sample_rate: CANONICAL_SAMPLE_RATE,
        bits_per_sample: CANONICAL_BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(dst, spec)?;
    for &sample in &samples {
        let value = (sample.clamp(-1.0, 1.0) * 32767.0) as i16;
        writer.write_sample(value)?;
    }
    writer.finalize()?;
    Ok(())
}
