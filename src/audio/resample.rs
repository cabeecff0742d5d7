//! Whole-signal sample-rate conversion

use log::debug;
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use crate::error::Error;

/// Convert an interleaved signal from `from_rate` to `to_rate`.
///
/// Identity when the rates already match or the signal is empty. The whole
/// signal is processed as a single chunk, so this is not suitable for
/// incremental streaming - which the transfer path never needs.
pub fn convert_sample_rate(
    samples: &[f32],
    channels: u16,
    from_rate: u32,
    to_rate: u32,
) -> Result<Vec<f32>, Error> {
    if samples.is_empty() || from_rate == to_rate {
        return Ok(samples.to_vec());
    }

    let channels = channels.max(1) as usize;
    let frames = samples.len() / channels;
    if frames == 0 {
        return Ok(Vec::new());
    }

    let ratio = to_rate as f64 / from_rate as f64;
    debug!(
        "Resampling {} frames: {}Hz -> {}Hz (ratio {:.3})",
        frames, from_rate, to_rate, ratio
    );

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Cubic,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, frames, channels)
        .map_err(|err| Error::Resample(err.to_string()))?;

    let mut planes: Vec<Vec<f32>> = (0..channels).map(|_| Vec::with_capacity(frames)).collect();
    for frame in samples.chunks_exact(channels) {
        for (plane, &sample) in planes.iter_mut().zip(frame) {
            plane.push(sample);
        }
    }

    let resampled = resampler
        .process(&planes, None)
        .map_err(|err| Error::Resample(err.to_string()))?;

    let out_frames = resampled.first().map(|plane| plane.len()).unwrap_or(0);
    let mut interleaved = Vec::with_capacity(out_frames * channels);
    for frame in 0..out_frames {
        for plane in &resampled {
            interleaved.push(plane[frame]);
        }
    }

    debug!("Resampling complete: {} frames -> {}", frames, out_frames);
    Ok(interleaved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_when_rates_match() {
        let samples = vec![0.1_f32, -0.2, 0.3, -0.4];
        let out = convert_sample_rate(&samples, 2, 44_100, 44_100).unwrap();
        assert_eq!(out, samples);
    }

    #[test]
    fn test_empty_signal() {
        let out = convert_sample_rate(&[], 2, 22_050, 44_100).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_upsampling_roughly_doubles_length() {
        // One second of a 220Hz sine at 22.05kHz
        let samples: Vec<f32> = (0..22_050)
            .map(|i| (i as f32 / 22_050.0 * 220.0 * std::f32::consts::TAU).sin() * 0.5)
            .collect();

        let out = convert_sample_rate(&samples, 1, 22_050, 44_100).unwrap();
        // Allow for the sinc filter edge
        assert!(
            out.len() > 40_000 && out.len() <= 46_000,
            "unexpected output length {}",
            out.len()
        );
    }

    #[test]
    fn test_stereo_output_stays_frame_aligned() {
        let samples: Vec<f32> = (0..8_820)
            .map(|i| if i % 2 == 0 { 0.25 } else { -0.25 })
            .collect();

        let out = convert_sample_rate(&samples, 2, 22_050, 44_100).unwrap();
        assert_eq!(out.len() % 2, 0);
        assert!(!out.is_empty());
    }
}
