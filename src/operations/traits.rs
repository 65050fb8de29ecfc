//! Core trait definitions for audio data operations.
//!
//! Each trait covers one family of operations and is implemented for
//! [`AudioData`](crate::AudioData) in its own module. All of them follow the same
//! contract: preconditions are checked first, and an `Err` leaves the buffer
//! exactly as it was.

use super::types::DecimationMethod;
use crate::AudioDataResult;

/// Structural editing: concatenation, growth and trimming.
pub trait AudioEditing {
    /// Concatenates `other`'s samples after this buffer's samples.
    ///
    /// An unconfigured buffer (no channel count and no frame rate) first adopts
    /// `other`'s metadata. `other` is never modified.
    ///
    /// # Errors
    /// Returns [`AudioDataError::MetadataMismatch`](crate::AudioDataError::MetadataMismatch)
    /// if the channel counts or frame rates differ.
    fn append(&mut self, other: &Self) -> AudioDataResult<()>;

    /// Concatenates `other`'s samples before this buffer's samples.
    ///
    /// Metadata adoption and validation are the same as for [`AudioEditing::append`].
    ///
    /// # Errors
    /// Returns [`AudioDataError::MetadataMismatch`](crate::AudioDataError::MetadataMismatch)
    /// if the channel counts or frame rates differ.
    fn prepend(&mut self, other: &Self) -> AudioDataResult<()>;

    /// Grows the buffer by `samples` zero-valued samples at the end.
    ///
    /// # Errors
    /// Returns [`AudioDataError::InvalidState`](crate::AudioDataError::InvalidState) if
    /// the channel count is configured and `samples` is not a whole number of frames.
    fn add_to_sample_count(&mut self, samples: usize) -> AudioDataResult<()>;

    /// Grows the buffer by `frames` zero-valued frames at the end.
    ///
    /// # Errors
    /// Returns [`AudioDataError::Unconfigured`](crate::AudioDataError::Unconfigured) if
    /// the channel count is not set.
    fn add_to_frame_count(&mut self, frames: usize) -> AudioDataResult<()>;

    /// Removes the first `frames` frames, shifting the rest to the front.
    ///
    /// # Errors
    /// - [`AudioDataError::Unconfigured`](crate::AudioDataError::Unconfigured) if the
    ///   channel count is not set.
    /// - [`AudioDataError::OutOfBounds`](crate::AudioDataError::OutOfBounds) if
    ///   `frames > frame_count()`.
    fn discard_frames_from_front(&mut self, frames: usize) -> AudioDataResult<()>;

    /// Moves the last `samples` samples into a new, independently owned buffer.
    ///
    /// The returned buffer inherits this buffer's channel count and frame rate and
    /// holds the samples in their original order; this buffer shrinks by `samples`.
    ///
    /// # Errors
    /// - [`AudioDataError::OutOfBounds`](crate::AudioDataError::OutOfBounds) if
    ///   `samples > sample_count()`.
    /// - [`AudioDataError::InvalidState`](crate::AudioDataError::InvalidState) if the
    ///   channel count is configured and `samples` is not a whole number of frames.
    fn slice_samples_from_back(&mut self, samples: usize) -> AudioDataResult<Self>
    where
        Self: Sized;
}

/// Channel-count reduction.
pub trait AudioChannelOps {
    /// Replaces every frame with the arithmetic mean of its channels and sets the
    /// channel count to 1. Buffers with fewer than two channels are left alone.
    fn reduce_to_mono(&mut self);
}

/// Frame-rate reduction for monophonic data.
///
/// These operators do no filtering of their own. Callers apply an anti-aliasing
/// low-pass filter first.
pub trait AudioDecimation {
    /// Divides the frame rate by `factor`, keeping (`shortcut == true`) every
    /// `factor`-th sample or (`shortcut == false`) the mean of each block of
    /// `factor` samples.
    ///
    /// # Errors
    /// See [`AudioDecimation::decimate`].
    fn downsample(&mut self, factor: usize, shortcut: bool) -> AudioDataResult<()> {
        let method = if shortcut {
            DecimationMethod::Shortcut
        } else {
            DecimationMethod::BlockMean
        };
        self.decimate(factor, method)
    }

    /// Divides the frame rate by `factor` using the given method.
    ///
    /// The result holds `ceil(sample_count / factor)` samples. A factor of 1 is a
    /// no-op.
    ///
    /// # Errors
    /// - [`AudioDataError::InvalidArgument`](crate::AudioDataError::InvalidArgument) if
    ///   `factor` is 0 or the new frame rate would be below 1.
    /// - [`AudioDataError::InvalidState`](crate::AudioDataError::InvalidState) if the
    ///   buffer has more than one channel.
    fn decimate(&mut self, factor: usize, method: DecimationMethod) -> AudioDataResult<()>;
}
