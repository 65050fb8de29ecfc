//! Core audio data representation.
//!
//! [`AudioData`] owns an interleaved sequence of `f32` samples together with the
//! channel count and frame rate needed to interpret it. The sample at absolute
//! index `i` belongs to frame `i / channels` and channel `i % channels`.
//!
//! # Lifecycle
//!
//! A buffer starts empty and unconfigured (`channels() == 0`, `frame_rate() == 0`).
//! Metadata is fixed either explicitly ([`AudioData::set_channels`],
//! [`AudioData::set_frame_rate`], [`AudioData::configure`]) or implicitly by the
//! first append/prepend of another buffer. From then on structural operations
//! must agree with it.
//!
//! # Invariants
//!
//! - With a configured channel count, `sample_count() % channels() == 0`.
//! - Every stored sample is finite. All checked writes go through
//!   [`AudioData::set_sample`].
//!
//! ```rust
//! use audio_data::{AudioData, AudioEditing, AudioFormat};
//!
//! let mut audio = AudioData::with_format(AudioFormat::stereo(44100)?);
//! audio.add_to_frame_count(2)?;
//! audio.set_sample_by_frame(1, 0, 0.5)?;
//!
//! assert_eq!(audio.sample_count(), 4);
//! assert_eq!(audio.frame_count()?, 2);
//! assert_eq!(audio.sample(2)?, 0.5);
//! # Ok::<(), audio_data::AudioDataError>(())
//! ```
use std::collections::VecDeque;
use std::collections::vec_deque;
use std::num::{NonZeroU32, NonZeroUsize};

use crate::{AudioDataError, AudioDataResult, AudioFormat};

/// Interleaved multi-channel `f32` sample buffer.
///
/// Besides the samples and metadata, each buffer carries a read cursor and a
/// write cursor for in-place streaming passes; see [`crate::iterators`].
#[derive(Debug, Clone, Default)]
pub struct AudioData {
    pub(crate) samples: VecDeque<f32>,
    pub(crate) channels: Option<NonZeroUsize>,
    pub(crate) frame_rate: Option<NonZeroU32>,
    pub(crate) read_cursor: usize,
    pub(crate) write_cursor: usize,
}

// Cursors are transient positions, not part of the data.
impl PartialEq for AudioData {
    fn eq(&self, other: &Self) -> bool {
        self.channels == other.channels
            && self.frame_rate == other.frame_rate
            && self.samples == other.samples
    }
}

impl AudioData {
    /// Creates an empty, unconfigured buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with the given channel count and frame rate.
    pub fn with_format(format: AudioFormat) -> Self {
        Self {
            channels: NonZeroUsize::new(format.channels()),
            frame_rate: NonZeroU32::new(format.frame_rate()),
            ..Self::default()
        }
    }

    /// Creates a configured buffer from already interleaved samples.
    ///
    /// # Errors
    /// - [`AudioDataError::InvalidState`] if `samples.len()` is not a whole number of frames.
    /// - [`AudioDataError::InvalidValue`] for the first non-finite sample.
    ///
    /// ```rust
    /// use audio_data::{AudioData, AudioFormat};
    ///
    /// let audio = AudioData::from_interleaved(vec![1.0, 3.0, 5.0, 7.0], AudioFormat::stereo(8000)?)?;
    /// assert_eq!(audio.sample_by_frame(1, 1)?, 7.0);
    ///
    /// let odd = AudioData::from_interleaved(vec![1.0, 3.0, 5.0], AudioFormat::stereo(8000)?);
    /// assert!(odd.is_err());
    /// # Ok::<(), audio_data::AudioDataError>(())
    /// ```
    pub fn from_interleaved(samples: Vec<f32>, format: AudioFormat) -> AudioDataResult<Self> {
        if samples.len() % format.channels() != 0 {
            return Err(AudioDataError::partial_frame(
                "build audio data",
                samples.len(),
                format.channels(),
            ));
        }
        if let Some((index, &value)) = samples.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(AudioDataError::InvalidValue { index, value });
        }
        let mut audio = Self::with_format(format);
        audio.samples = VecDeque::from(samples);
        Ok(audio)
    }

    /// Returns the channel count, or 0 if it has not been configured.
    pub fn channels(&self) -> usize {
        self.channels.map_or(0, NonZeroUsize::get)
    }

    /// Sets the channel count.
    ///
    /// # Errors
    /// - [`AudioDataError::InvalidArgument`] if `channels < 1`.
    /// - [`AudioDataError::InvalidState`] if the current samples do not split into
    ///   whole frames of `channels`.
    pub fn set_channels(&mut self, channels: usize) -> AudioDataResult<()> {
        let new_channels = NonZeroUsize::new(channels)
            .ok_or(AudioDataError::invalid_argument("channels", channels as u64))?;
        if self.sample_count() % channels != 0 {
            return Err(AudioDataError::partial_frame(
                "set channels",
                self.sample_count(),
                channels,
            ));
        }
        self.channels = Some(new_channels);
        Ok(())
    }

    /// Returns the frame rate in frames per second, or 0 if it has not been configured.
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate.map_or(0, NonZeroU32::get)
    }

    /// Sets the frame rate.
    ///
    /// # Errors
    /// Returns [`AudioDataError::InvalidArgument`] if `frame_rate < 1`.
    pub fn set_frame_rate(&mut self, frame_rate: u32) -> AudioDataResult<()> {
        self.frame_rate = Some(NonZeroU32::new(frame_rate).ok_or(
            AudioDataError::invalid_argument("frame rate", u64::from(frame_rate)),
        )?);
        Ok(())
    }

    /// Returns the full format, if both channel count and frame rate are configured.
    pub fn format(&self) -> Option<AudioFormat> {
        match (self.channels, self.frame_rate) {
            (Some(channels), Some(frame_rate)) => {
                AudioFormat::new(channels.get(), frame_rate.get()).ok()
            }
            _ => None,
        }
    }

    /// Applies both values of `format`. Nothing changes if the channel count is rejected.
    ///
    /// # Errors
    /// Returns [`AudioDataError::InvalidState`] if the current samples do not split
    /// into whole frames of `format.channels()`.
    pub fn configure(&mut self, format: AudioFormat) -> AudioDataResult<()> {
        self.set_channels(format.channels())?;
        self.set_frame_rate(format.frame_rate())
    }

    /// True while neither channel count nor frame rate has been set.
    pub fn is_unconfigured(&self) -> bool {
        self.channels.is_none() && self.frame_rate.is_none()
    }

    /// Number of stored samples across all channels.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// True if no samples are stored.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of whole frames, `sample_count() / channels()`.
    ///
    /// # Errors
    /// Returns [`AudioDataError::Unconfigured`] if the channel count is not set.
    pub fn frame_count(&self) -> AudioDataResult<usize> {
        let channels = self.require_channels("count frames")?;
        Ok(self.sample_count() / channels)
    }

    /// Duration in seconds, if channel count and frame rate are both known.
    pub fn duration_seconds(&self) -> Option<f64> {
        let format = self.format()?;
        let frames = self.sample_count() / format.channels();
        Some(frames as f64 / f64::from(format.frame_rate()))
    }

    /// Reads the sample at an absolute interleaved index.
    ///
    /// # Errors
    /// Returns [`AudioDataError::OutOfBounds`] if `index >= sample_count()`.
    pub fn sample(&self, index: usize) -> AudioDataResult<f32> {
        self.samples.get(index).copied().ok_or(AudioDataError::out_of_bounds(
            "get",
            "sample",
            index,
            self.sample_count(),
        ))
    }

    /// Writes the sample at an absolute interleaved index.
    ///
    /// # Errors
    /// - [`AudioDataError::OutOfBounds`] if `index >= sample_count()`.
    /// - [`AudioDataError::InvalidValue`] if `value` is NaN or infinite.
    pub fn set_sample(&mut self, index: usize, value: f32) -> AudioDataResult<()> {
        let count = self.sample_count();
        let slot = self
            .samples
            .get_mut(index)
            .ok_or(AudioDataError::out_of_bounds("set", "sample", index, count))?;
        if !value.is_finite() {
            return Err(AudioDataError::InvalidValue { index, value });
        }
        *slot = value;
        Ok(())
    }

    /// Reads the sample of `channel` in `frame`.
    ///
    /// # Errors
    /// - [`AudioDataError::Unconfigured`] if the channel count is not set.
    /// - [`AudioDataError::OutOfBounds`] if `frame` or `channel` is past the end.
    pub fn sample_by_frame(&self, frame: usize, channel: usize) -> AudioDataResult<f32> {
        let index = self.frame_index("get", frame, channel)?;
        self.sample(index)
    }

    /// Writes the sample of `channel` in `frame`.
    ///
    /// # Errors
    /// - [`AudioDataError::Unconfigured`] if the channel count is not set.
    /// - [`AudioDataError::OutOfBounds`] if `frame` or `channel` is past the end.
    /// - [`AudioDataError::InvalidValue`] if `value` is NaN or infinite.
    pub fn set_sample_by_frame(
        &mut self,
        frame: usize,
        channel: usize,
        value: f32,
    ) -> AudioDataResult<()> {
        let index = self.frame_index("set", frame, channel)?;
        self.set_sample(index, value)
    }

    /// Iterates over all samples in interleaved order.
    pub fn iter(&self) -> vec_deque::Iter<'_, f32> {
        self.samples.iter()
    }

    /// Copies the samples into a contiguous vector.
    pub fn to_vec(&self) -> Vec<f32> {
        self.samples.iter().copied().collect()
    }

    /// Returns the channel count or an `Unconfigured` error naming `operation`.
    pub(crate) fn require_channels(&self, operation: &'static str) -> AudioDataResult<usize> {
        self.channels
            .map(NonZeroUsize::get)
            .ok_or(AudioDataError::Unconfigured { operation })
    }

    fn frame_index(
        &self,
        operation: &'static str,
        frame: usize,
        channel: usize,
    ) -> AudioDataResult<usize> {
        let frames = self.frame_count()?;
        if frame >= frames {
            return Err(AudioDataError::out_of_bounds(operation, "frame", frame, frames));
        }
        let channels = self.channels();
        if channel >= channels {
            return Err(AudioDataError::out_of_bounds(
                operation, "channel", channel, channels,
            ));
        }
        Ok(frame * channels + channel)
    }
}

impl<'a> IntoIterator for &'a AudioData {
    type Item = &'a f32;
    type IntoIter = vec_deque::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
