//! Whole-stream decoding to interleaved f32 samples

use log::warn;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::Decoder;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatReader;

use crate::error::Error;

/// A fully decoded audio signal, interleaved, normalized to [-1.0, 1.0].
#[derive(Debug)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: u16,
}

/// Decode every packet of `track_id` into one interleaved f32 signal.
///
/// Returns `None` when the stream yields no audio frames at all. Packets
/// that fail to decode mid-stream are skipped with a warning, the way a
/// player would; I/O errors and hard decoder errors propagate.
pub fn decode_all(
    format: &mut dyn FormatReader,
    decoder: &mut dyn Decoder,
    track_id: u32,
) -> Result<Option<DecodedAudio>, Error> {
    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;
    let mut signal: Option<(u32, u16)> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // The demuxer signals end-of-stream as an unexpected EOF
            Err(SymphoniaError::IoError(err))
                if err.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(SymphoniaError::IoError(err)) => return Err(Error::Io(err)),
            Err(err) => return Err(Error::Decode(err)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                if sample_buf.is_none() {
                    let spec = *decoded.spec();
                    signal = Some((spec.rate, spec.channels.count() as u16));
                    sample_buf = Some(SampleBuffer::<f32>::new(decoded.capacity() as u64, spec));
                }
                if let Some(buf) = sample_buf.as_mut() {
                    buf.copy_interleaved_ref(decoded);
                    samples.extend_from_slice(buf.samples());
                }
            }
            Err(SymphoniaError::DecodeError(err)) => {
                warn!("Skipping undecodable packet: {}", err);
            }
            Err(SymphoniaError::IoError(err)) => return Err(Error::Io(err)),
            Err(err) => return Err(Error::Decode(err)),
        }
    }

    match signal {
        Some((sample_rate, channels)) if !samples.is_empty() && channels > 0 => {
            Ok(Some(DecodedAudio {
                samples,
                sample_rate,
                channels,
            }))
        }
        _ => Ok(None),
    }
}
