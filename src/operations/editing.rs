//! Structural editing operations for AudioData.
//!
//! This module implements the [`AudioEditing`] trait: concatenating buffers,
//! growing them with silence, discarding frames from the front and splitting a
//! tail off into a new buffer.
//!
//! The sample store is a `VecDeque`, so trimming the front and prepending are
//! as cheap as appending.

use std::collections::VecDeque;
use std::num::{NonZeroU32, NonZeroUsize};

use crate::{AudioData, AudioDataError, AudioDataResult, AudioEditing};

impl AudioData {
    /// Works out the metadata this buffer will have after absorbing `other`.
    ///
    /// An unconfigured buffer takes `other`'s channel count and frame rate. The
    /// result must then match `other` exactly. Nothing is written here; callers
    /// commit the returned values only once the whole operation is known to succeed.
    fn merged_metadata(
        &self,
        other: &AudioData,
        operation: &'static str,
    ) -> AudioDataResult<(Option<NonZeroUsize>, Option<NonZeroU32>)> {
        let (channels, frame_rate) = if self.is_unconfigured() {
            (other.channels, other.frame_rate)
        } else {
            (self.channels, self.frame_rate)
        };

        if other.channels != channels {
            return Err(AudioDataError::MetadataMismatch {
                operation,
                field: "channel count",
                expected: channels.map_or(0, |c| c.get() as u64),
                found: other.channels() as u64,
            });
        }
        if other.frame_rate != frame_rate {
            return Err(AudioDataError::MetadataMismatch {
                operation,
                field: "frame rate",
                expected: frame_rate.map_or(0, |r| u64::from(r.get())),
                found: u64::from(other.frame_rate()),
            });
        }

        // Samples written while unconfigured must still form whole frames.
        if let Some(channels) = channels.filter(|c| self.sample_count() % c.get() != 0) {
            return Err(AudioDataError::partial_frame(
                operation,
                self.sample_count(),
                channels.get(),
            ));
        }

        Ok((channels, frame_rate))
    }
}

impl AudioEditing for AudioData {
    fn append(&mut self, other: &Self) -> AudioDataResult<()> {
        let (channels, frame_rate) = self.merged_metadata(other, "append")?;
        self.channels = channels;
        self.frame_rate = frame_rate;
        self.samples.extend(other.samples.iter().copied());
        tracing::trace!(
            appended = other.sample_count(),
            total = self.sample_count(),
            "appended audio data"
        );
        Ok(())
    }

    fn prepend(&mut self, other: &Self) -> AudioDataResult<()> {
        let (channels, frame_rate) = self.merged_metadata(other, "prepend")?;
        self.channels = channels;
        self.frame_rate = frame_rate;
        self.samples.reserve(other.sample_count());
        for &sample in other.samples.iter().rev() {
            self.samples.push_front(sample);
        }
        tracing::trace!(
            prepended = other.sample_count(),
            total = self.sample_count(),
            "prepended audio data"
        );
        Ok(())
    }

    fn add_to_sample_count(&mut self, samples: usize) -> AudioDataResult<()> {
        if let Some(channels) = self.channels.filter(|c| samples % c.get() != 0) {
            return Err(AudioDataError::partial_frame(
                "add samples",
                samples,
                channels.get(),
            ));
        }
        let new_len = self.sample_count().checked_add(samples).ok_or_else(|| {
            AudioDataError::invalid_state("add samples", "sample count overflows usize")
        })?;
        self.samples.resize(new_len, 0.0);
        Ok(())
    }

    fn add_to_frame_count(&mut self, frames: usize) -> AudioDataResult<()> {
        let channels = self.require_channels("add frames")?;
        let samples = frames.checked_mul(channels).ok_or_else(|| {
            AudioDataError::invalid_state("add frames", "sample count overflows usize")
        })?;
        self.add_to_sample_count(samples)
    }

    fn discard_frames_from_front(&mut self, frames: usize) -> AudioDataResult<()> {
        let channels = self.require_channels("discard frames")?;
        let frame_count = self.sample_count() / channels;
        if frames > frame_count {
            return Err(AudioDataError::out_of_bounds(
                "discard",
                "frames",
                frames,
                frame_count,
            ));
        }
        self.samples.drain(..frames * channels);
        tracing::debug!(
            discarded = frames,
            remaining = frame_count - frames,
            "discarded frames from front"
        );
        Ok(())
    }

    fn slice_samples_from_back(&mut self, samples: usize) -> AudioDataResult<Self> {
        let count = self.sample_count();
        if samples > count {
            return Err(AudioDataError::out_of_bounds(
                "slice", "samples", samples, count,
            ));
        }
        if let Some(channels) = self.channels.filter(|c| samples % c.get() != 0) {
            return Err(AudioDataError::partial_frame(
                "slice samples",
                samples,
                channels.get(),
            ));
        }

        let tail: VecDeque<f32> = self.samples.split_off(count - samples);
        tracing::debug!(
            sliced = samples,
            remaining = self.sample_count(),
            "sliced samples from back"
        );
        Ok(AudioData {
            samples: tail,
            channels: self.channels,
            frame_rate: self.frame_rate,
            read_cursor: 0,
            write_cursor: 0,
        })
    }
}
