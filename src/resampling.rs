//! Integer-factor decimation of monophonic audio data.
//!
//! Decimation here is deliberately simple: one output sample per block of
//! `factor` inputs, either the first sample of the block or the block mean.
//! No anti-aliasing is applied. Callers run a low-pass filter over the data
//! before calling [`AudioDecimation::downsample`].

use std::num::NonZeroU32;

use crate::{AudioData, AudioDataError, AudioDataResult, AudioDecimation, DecimationMethod};

impl AudioDecimation for AudioData {
    fn decimate(&mut self, factor: usize, method: DecimationMethod) -> AudioDataResult<()> {
        if factor == 1 {
            return Ok(());
        }
        if factor == 0 {
            return Err(AudioDataError::invalid_argument("factor", 0));
        }
        let channels = self.channels();
        if channels > 1 {
            return Err(AudioDataError::invalid_state(
                "downsample",
                format!("expected monophonic data, found {channels} channels"),
            ));
        }

        let new_rate = u32::try_from(factor).map_or(0, |f| self.frame_rate() / f);
        let new_frame_rate = NonZeroU32::new(new_rate).ok_or(AudioDataError::invalid_argument(
            "frame rate",
            u64::from(new_rate),
        ))?;

        let count = self.sample_count();
        let out_len = count.div_ceil(factor);
        let buffer = self.samples.make_contiguous();
        // Output `i` reads from `i * factor >= i`, so the rewrite can run in place.
        for out in 0..out_len {
            let start = out * factor;
            let value = match method {
                DecimationMethod::Shortcut => buffer[start],
                DecimationMethod::BlockMean => {
                    let block = &buffer[start..(start + factor).min(count)];
                    block.iter().sum::<f32>() / block.len() as f32
                }
            };
            buffer[out] = value;
        }
        self.samples.truncate(out_len);
        self.frame_rate = Some(new_frame_rate);

        tracing::debug!(
            factor,
            shortcut = method.is_shortcut(),
            samples = out_len,
            frame_rate = new_rate,
            "downsampled audio data"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AudioFormat;
    use approx_eq::assert_approx_eq;

    fn mono(samples: &[f32], frame_rate: u32) -> AudioData {
        AudioData::from_interleaved(samples.to_vec(), AudioFormat::mono(frame_rate).unwrap())
            .unwrap()
    }

    #[test]
    fn test_downsample_shortcut() {
        let mut audio = mono(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 4);

        audio.downsample(2, true).unwrap();

        assert_eq!(audio.to_vec(), vec![1.0, 3.0, 5.0]);
        assert_eq!(audio.frame_rate(), 2);
    }

    #[test]
    fn test_downsample_block_mean() {
        let mut audio = mono(&[1.0, 2.0, 3.0, 4.0], 44100);

        audio.downsample(2, false).unwrap();

        assert_eq!(audio.to_vec(), vec![1.5, 3.5]);
        assert_eq!(audio.frame_rate(), 22050);
    }

    #[test]
    fn test_block_mean_partial_tail() {
        let mut audio = mono(&[3.0, 6.0, 9.0, 1.0, 2.0], 300);

        audio.decimate(3, DecimationMethod::BlockMean).unwrap();

        assert_eq!(audio.sample_count(), 2);
        assert_approx_eq!(audio.sample(0).unwrap() as f64, 6.0, 1e-6);
        assert_approx_eq!(audio.sample(1).unwrap() as f64, 1.5, 1e-6);
        assert_eq!(audio.frame_rate(), 100);
    }

    #[test]
    fn test_shortcut_length_is_ceiling() {
        let mut audio = mono(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 30);
        audio.decimate(3, DecimationMethod::Shortcut).unwrap();
        assert_eq!(audio.to_vec(), vec![0.0, 3.0, 6.0]);
        assert_eq!(audio.frame_rate(), 10);
    }

    #[test]
    fn test_factor_one_is_noop() {
        let mut stereo =
            AudioData::from_interleaved(vec![1.0, 2.0], AudioFormat::stereo(44100).unwrap())
                .unwrap();
        let before = stereo.clone();
        stereo.downsample(1, false).unwrap();
        assert_eq!(stereo, before);
    }

    #[test]
    fn test_multichannel_rejected() {
        let mut stereo = AudioData::from_interleaved(
            vec![1.0, 2.0, 3.0, 4.0],
            AudioFormat::stereo(44100).unwrap(),
        )
        .unwrap();
        let before = stereo.clone();

        assert!(matches!(
            stereo.downsample(2, true),
            Err(AudioDataError::InvalidState {
                operation: "downsample",
                ..
            })
        ));
        assert_eq!(stereo, before);
    }

    #[test]
    fn test_zero_factor_rejected() {
        let mut audio = mono(&[1.0, 2.0], 100);
        assert_eq!(
            audio.downsample(0, true),
            Err(AudioDataError::InvalidArgument {
                parameter: "factor",
                value: 0
            })
        );
    }

    #[test]
    fn test_frame_rate_below_one_leaves_buffer() {
        let mut audio = mono(&[1.0, 2.0, 3.0, 4.0], 3);
        let before = audio.clone();

        assert_eq!(
            audio.downsample(4, false),
            Err(AudioDataError::InvalidArgument {
                parameter: "frame rate",
                value: 0
            })
        );
        assert_eq!(audio, before);
    }

    #[test]
    fn test_empty_buffer() {
        let mut audio = mono(&[], 16000);
        audio.downsample(4, false).unwrap();
        assert!(audio.is_empty());
        assert_eq!(audio.frame_rate(), 4000);
    }
}
