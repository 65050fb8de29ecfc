//! `ndarray` interop for audio data.
//!
//! Analysis stages downstream of the buffer (spectral transforms, chroma
//! extraction) work on `ndarray` arrays. These conversions copy between the
//! interleaved store and a `(frames, channels)` matrix, where row `f` is frame
//! `f` and column `c` is channel `c`.
//!
//! ```rust
//! use audio_data::{AudioData, AudioFormat};
//! use ndarray::array;
//!
//! let audio = AudioData::from_frame_matrix(array![[1.0f32, 2.0], [3.0, 4.0]].view(), 44100)?;
//! assert_eq!(audio.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(audio.channel_vector(1)?, array![2.0f32, 4.0]);
//! assert_eq!(audio.format(), Some(AudioFormat::stereo(44100)?));
//! # Ok::<(), audio_data::AudioDataError>(())
//! ```

use ndarray::{Array1, Array2, ArrayView2};

use crate::{AudioData, AudioDataError, AudioDataResult, AudioFormat};

impl AudioData {
    /// Builds a configured buffer from a `(frames, channels)` matrix.
    ///
    /// # Errors
    /// - [`AudioDataError::InvalidArgument`] if the matrix has no columns or `frame_rate` is 0.
    /// - [`AudioDataError::InvalidValue`] for the first non-finite element in row-major order.
    pub fn from_frame_matrix(frames: ArrayView2<'_, f32>, frame_rate: u32) -> AudioDataResult<Self> {
        let format = AudioFormat::new(frames.ncols(), frame_rate)?;
        // Logical iteration order is row-major whatever the memory layout is.
        let samples: Vec<f32> = frames.iter().copied().collect();
        Self::from_interleaved(samples, format)
    }

    /// Copies the buffer into a `(frames, channels)` matrix.
    ///
    /// # Errors
    /// Returns [`AudioDataError::Unconfigured`] if the channel count is not set.
    pub fn to_frame_matrix(&self) -> AudioDataResult<Array2<f32>> {
        let channels = self.require_channels("build frame matrix")?;
        let frames = self.sample_count() / channels;
        Array2::from_shape_vec((frames, channels), self.to_vec())
            .map_err(|e| AudioDataError::invalid_state("build frame matrix", e.to_string()))
    }

    /// Copies one channel out of the interleaved store.
    ///
    /// # Errors
    /// - [`AudioDataError::Unconfigured`] if the channel count is not set.
    /// - [`AudioDataError::OutOfBounds`] if `channel >= channels()`.
    pub fn channel_vector(&self, channel: usize) -> AudioDataResult<Array1<f32>> {
        let channels = self.require_channels("extract channel")?;
        if channel >= channels {
            return Err(AudioDataError::out_of_bounds(
                "extract", "channel", channel, channels,
            ));
        }
        Ok(self
            .samples
            .iter()
            .skip(channel)
            .step_by(channels)
            .copied()
            .collect())
    }
}
