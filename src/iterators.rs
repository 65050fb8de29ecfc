//! Streaming cursors and frame iteration over audio data.
//!
//! # Cursors
//!
//! Every [`AudioData`] carries two independent positions into its samples, a
//! read cursor and a write cursor. They let one buffer act as both source and
//! destination of a causal in-place pass (a FIR filter, a decimator) without a
//! second allocation. The caller moves both explicitly and is responsible for
//! never letting the write cursor overtake samples it still has to read.
//!
//! Cursor access is unchecked beyond Rust's own indexing: dereferencing a
//! cursor past the end panics. Check [`AudioData::read_cursor_in_bounds`] /
//! [`AudioData::write_cursor_in_bounds`] first. Structural operations do not
//! move the cursors; call [`AudioData::reset_cursors`] after restructuring.
//!
//! ```rust
//! use audio_data::{AudioData, AudioFormat};
//!
//! // Two-tap moving average, computed in place.
//! let mut audio = AudioData::from_interleaved(vec![2.0, 4.0, 6.0, 8.0], AudioFormat::mono(8000)?)?;
//! let mut previous = 0.0;
//! audio.reset_cursors();
//! while audio.read_cursor_in_bounds() {
//!     let current = audio.sample_at_read_cursor();
//!     audio.set_sample_at_write_cursor((current + previous) / 2.0);
//!     previous = current;
//!     audio.advance_read_cursor(1);
//!     audio.advance_write_cursor(1);
//! }
//! assert_eq!(audio.to_vec(), vec![1.0, 3.0, 5.0, 7.0]);
//! # Ok::<(), audio_data::AudioDataError>(())
//! ```
//!
//! # Frames
//!
//! [`AudioData::frames`] walks the buffer one frame at a time, yielding the
//! samples of every channel at that instant.

use std::collections::vec_deque;

use crate::{AudioData, AudioDataResult};

impl AudioData {
    /// Points both cursors at the first sample.
    pub fn reset_cursors(&mut self) {
        self.read_cursor = 0;
        self.write_cursor = 0;
    }

    /// Current read cursor position.
    pub fn read_cursor(&self) -> usize {
        self.read_cursor
    }

    /// Current write cursor position.
    pub fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    /// True while the read cursor addresses a stored sample.
    pub fn read_cursor_in_bounds(&self) -> bool {
        self.read_cursor < self.samples.len()
    }

    /// True while the write cursor addresses a stored sample.
    pub fn write_cursor_in_bounds(&self) -> bool {
        self.write_cursor < self.samples.len()
    }

    /// Moves the read cursor forward by `by` samples. No bounds check.
    pub fn advance_read_cursor(&mut self, by: usize) {
        self.read_cursor = self.read_cursor.saturating_add(by);
    }

    /// Moves the write cursor forward by `by` samples. No bounds check.
    pub fn advance_write_cursor(&mut self, by: usize) {
        self.write_cursor = self.write_cursor.saturating_add(by);
    }

    /// Reads the sample under the read cursor.
    ///
    /// # Panics
    /// Panics if the read cursor is past the end of the buffer.
    pub fn sample_at_read_cursor(&self) -> f32 {
        self.samples[self.read_cursor]
    }

    /// Overwrites the sample under the write cursor.
    ///
    /// This is the hot path of in-place filters and skips the finiteness check of
    /// [`AudioData::set_sample`] in release builds.
    ///
    /// # Panics
    /// Panics if the write cursor is past the end of the buffer, or (debug builds
    /// only) if `value` is not finite.
    pub fn set_sample_at_write_cursor(&mut self, value: f32) {
        debug_assert!(value.is_finite(), "non-finite sample written via cursor");
        let index = self.write_cursor;
        self.samples[index] = value;
    }

    /// Returns an iterator over frames, each yielded as one sample per channel.
    ///
    /// # Errors
    /// Returns [`AudioDataError::Unconfigured`](crate::AudioDataError::Unconfigured) if
    /// the channel count is not set.
    ///
    /// ```rust
    /// use audio_data::{AudioData, AudioFormat};
    ///
    /// let audio = AudioData::from_interleaved(vec![1.0, 2.0, 3.0, 4.0], AudioFormat::stereo(44100)?)?;
    /// let frames: Vec<Vec<f32>> = audio.frames()?.collect();
    /// assert_eq!(frames, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    /// # Ok::<(), audio_data::AudioDataError>(())
    /// ```
    pub fn frames(&self) -> AudioDataResult<FrameIterator<'_>> {
        let channels = self.require_channels("iterate frames")?;
        Ok(FrameIterator {
            samples: self.samples.iter(),
            channels,
        })
    }
}

/// Iterator over the frames of an [`AudioData`] buffer.
#[derive(Debug, Clone)]
pub struct FrameIterator<'a> {
    samples: vec_deque::Iter<'a, f32>,
    channels: usize,
}

impl Iterator for FrameIterator<'_> {
    type Item = Vec<f32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.samples.len() < self.channels {
            return None;
        }
        Some(self.samples.by_ref().take(self.channels).copied().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples.len() / self.channels;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AudioDataError, AudioFormat};

    fn mono(samples: &[f32]) -> AudioData {
        AudioData::from_interleaved(samples.to_vec(), AudioFormat::mono(100).unwrap()).unwrap()
    }

    #[test]
    fn test_cursors_start_in_bounds() {
        let mut audio = mono(&[1.0, 2.0]);
        audio.reset_cursors();
        assert!(audio.read_cursor_in_bounds());
        assert!(audio.write_cursor_in_bounds());
        assert_eq!(audio.read_cursor(), 0);
        assert_eq!(audio.write_cursor(), 0);
    }

    #[test]
    fn test_empty_buffer_cursors_out_of_bounds() {
        let mut audio = AudioData::new();
        audio.reset_cursors();
        assert!(!audio.read_cursor_in_bounds());
        assert!(!audio.write_cursor_in_bounds());
    }

    #[test]
    fn test_cursors_move_independently() {
        let mut audio = mono(&[1.0, 2.0, 3.0]);
        audio.reset_cursors();
        audio.advance_read_cursor(2);
        assert_eq!(audio.sample_at_read_cursor(), 3.0);
        assert_eq!(audio.write_cursor(), 0);

        audio.advance_read_cursor(1);
        assert!(!audio.read_cursor_in_bounds());
        assert!(audio.write_cursor_in_bounds());
    }

    #[test]
    fn test_in_place_pairwise_sum_with_two_cursors() {
        let mut audio = mono(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        audio.reset_cursors();
        while audio.read_cursor_in_bounds() {
            let first = audio.sample_at_read_cursor();
            audio.advance_read_cursor(1);
            let second = audio.sample_at_read_cursor();
            audio.advance_read_cursor(1);
            audio.set_sample_at_write_cursor(first + second);
            audio.advance_write_cursor(1);
        }
        assert_eq!(audio.write_cursor(), 3);
        assert_eq!(&audio.to_vec()[..3], &[3.0, 7.0, 11.0]);
    }

    #[test]
    #[should_panic]
    fn test_read_past_end_panics() {
        let mut audio = mono(&[1.0]);
        audio.reset_cursors();
        audio.advance_read_cursor(1);
        let _ = audio.sample_at_read_cursor();
    }

    #[test]
    fn test_frames_of_three_channels() {
        let audio = AudioData::from_interleaved(
            (0..6).map(|i| i as f32).collect(),
            AudioFormat::new(3, 100).unwrap(),
        )
        .unwrap();
        let frames = audio.frames().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(
            frames.collect::<Vec<_>>(),
            vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]
        );
    }

    #[test]
    fn test_frames_require_channels() {
        let audio = AudioData::new();
        assert!(matches!(
            audio.frames(),
            Err(AudioDataError::Unconfigured { .. })
        ));
    }
}
