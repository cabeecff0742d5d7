// Audio module - stream descriptors, full-stream decoding, and resampling

mod decode;
mod descriptor;
mod resample;

pub use decode::{DecodedAudio, decode_all};
pub use descriptor::{CANONICAL_BITS_PER_SAMPLE, CANONICAL_SAMPLE_RATE, StreamDescriptor};
pub use resample::convert_sample_rate;
