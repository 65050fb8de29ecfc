//! Channel reduction for AudioData.
//!
//! Implements [`AudioChannelOps`]. Downstream rate-domain operators assume
//! monophonic input, so multi-channel data is averaged down first.

use std::num::NonZeroUsize;

use crate::{AudioChannelOps, AudioData};

impl AudioChannelOps for AudioData {
    fn reduce_to_mono(&mut self) {
        let channels = self.channels();
        if channels < 2 {
            return;
        }

        let frames = self.sample_count() / channels;
        let buffer = self.samples.make_contiguous();
        // Frame `f` starts at `f * channels >= f`, so each write lands on a
        // slot that has already been read.
        for frame in 0..frames {
            let start = frame * channels;
            let sum: f32 = buffer[start..start + channels].iter().sum();
            buffer[frame] = sum / channels as f32;
        }
        self.samples.truncate(frames);
        self.channels = NonZeroUsize::new(1);

        tracing::debug!(from_channels = channels, frames, "reduced to mono");
    }
}
