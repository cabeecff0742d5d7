//! Audio stream descriptors and the canonical pad-sample encoding
//!
//! The hardware expects plain 16-bit signed little-endian PCM at 44.1 kHz.
//! A [`StreamDescriptor`] captures the fields that matter for deciding
//! whether a source already has that shape or needs re-encoding.

use symphonia::core::codecs::{
    CODEC_TYPE_PCM_S8, CODEC_TYPE_PCM_S16BE, CODEC_TYPE_PCM_S16LE, CODEC_TYPE_PCM_S24BE,
    CODEC_TYPE_PCM_S24LE, CODEC_TYPE_PCM_S32BE, CODEC_TYPE_PCM_S32LE, CODEC_TYPE_PCM_U8,
    CODEC_TYPE_PCM_U16BE, CODEC_TYPE_PCM_U16LE, CODEC_TYPE_PCM_U24BE, CODEC_TYPE_PCM_U24LE,
    CODEC_TYPE_PCM_U32BE, CODEC_TYPE_PCM_U32LE, CodecParameters, CodecType,
};

/// Sample rate every converted sample is normalized to
pub const CANONICAL_SAMPLE_RATE: u32 = 44_100;

/// Bit depth every converted sample is normalized to
pub const CANONICAL_BITS_PER_SAMPLE: u16 = 16;

/// Shape of an uncompressed audio stream.
///
/// Two descriptors are equivalent when every field matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamDescriptor {
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub channels: u16,
    pub signed: bool,
    pub little_endian: bool,
}

impl StreamDescriptor {
    /// The canonical target encoding, with the channel count inherited from
    /// the source.
    pub fn canonical(channels: u16) -> Self {
        Self {
            sample_rate: CANONICAL_SAMPLE_RATE,
            bits_per_sample: CANONICAL_BITS_PER_SAMPLE,
            channels,
            signed: true,
            little_endian: true,
        }
    }

    /// Whether this stream already matches the canonical target.
    pub fn is_canonical(&self) -> bool {
        *self == Self::canonical(self.channels)
    }

    /// Build a descriptor from a track's codec parameters.
    ///
    /// Returns `None` for compressed codecs (which always need re-encoding)
    /// and for tracks missing a sample rate or channel map.
    pub fn from_codec_params(params: &CodecParameters) -> Option<Self> {
        let (bits_per_sample, signed, little_endian) = pcm_layout(params.codec)?;
        let sample_rate = params.sample_rate?;
        let channels = params.channels?.count() as u16;
        Some(Self {
            sample_rate,
            bits_per_sample,
            channels,
            signed,
            little_endian,
        })
    }
}

/// Map an integer-PCM codec id to (bit depth, signedness, little-endian).
///
/// Byte order is meaningless for 8-bit samples; both are reported
/// little-endian. Float PCM and compressed codecs return `None`.
fn pcm_layout(codec: CodecType) -> Option<(u16, bool, bool)> {
    match codec {
        c if c == CODEC_TYPE_PCM_S8 => Some((8, true, true)),
        c if c == CODEC_TYPE_PCM_U8 => Some((8, false, true)),
        c if c == CODEC_TYPE_PCM_S16LE => Some((16, true, true)),
        c if c == CODEC_TYPE_PCM_S16BE => Some((16, true, false)),
        c if c == CODEC_TYPE_PCM_U16LE => Some((16, false, true)),
        c if c == CODEC_TYPE_PCM_U16BE => Some((16, false, false)),
        c if c == CODEC_TYPE_PCM_S24LE => Some((24, true, true)),
        c if c == CODEC_TYPE_PCM_S24BE => Some((24, true, false)),
        c if c == CODEC_TYPE_PCM_U24LE => Some((24, false, true)),
        c if c == CODEC_TYPE_PCM_U24BE => Some((24, false, false)),
        c if c == CODEC_TYPE_PCM_S32LE => Some((32, true, true)),
        c if c == CODEC_TYPE_PCM_S32BE => Some((32, true, false)),
        c if c == CODEC_TYPE_PCM_U32LE => Some((32, false, true)),
        c if c == CODEC_TYPE_PCM_U32BE => Some((32, false, false)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symphonia::core::audio::Channels;
    use symphonia::core::codecs::CODEC_TYPE_MP3;

    #[test]
    fn test_canonical_descriptor_matches_itself() {
        assert!(StreamDescriptor::canonical(1).is_canonical());
        assert!(StreamDescriptor::canonical(2).is_canonical());
    }

    #[test]
    fn test_non_canonical_rates_and_depths() {
        let mut descriptor = StreamDescriptor::canonical(2);
        descriptor.sample_rate = 48_000;
        assert!(!descriptor.is_canonical());

        let mut descriptor = StreamDescriptor::canonical(2);
        descriptor.bits_per_sample = 24;
        assert!(!descriptor.is_canonical());

        let mut descriptor = StreamDescriptor::canonical(1);
        descriptor.little_endian = false;
        assert!(!descriptor.is_canonical());
    }

    #[test]
    fn test_descriptor_from_pcm_codec_params() {
        let mut params = CodecParameters::new();
        params
            .for_codec(CODEC_TYPE_PCM_S16LE)
            .with_sample_rate(44_100)
            .with_channels(Channels::FRONT_LEFT | Channels::FRONT_RIGHT);

        let descriptor = StreamDescriptor::from_codec_params(&params).unwrap();
        assert_eq!(descriptor, StreamDescriptor::canonical(2));
        assert!(descriptor.is_canonical());
    }

    #[test]
    fn test_descriptor_from_unsigned_8_bit() {
        let mut params = CodecParameters::new();
        params
            .for_codec(CODEC_TYPE_PCM_U8)
            .with_sample_rate(44_100)
            .with_channels(Channels::FRONT_LEFT);

        let descriptor = StreamDescriptor::from_codec_params(&params).unwrap();
        assert_eq!(descriptor.bits_per_sample, 8);
        assert!(!descriptor.signed);
        assert!(!descriptor.is_canonical());
    }

    #[test]
    fn test_compressed_codec_has_no_descriptor() {
        let mut params = CodecParameters::new();
        params
            .for_codec(CODEC_TYPE_MP3)
            .with_sample_rate(44_100)
            .with_channels(Channels::FRONT_LEFT | Channels::FRONT_RIGHT);

        assert!(StreamDescriptor::from_codec_params(&params).is_none());
    }
}
