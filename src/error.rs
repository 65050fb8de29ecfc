//! Error types and result utilities for audio data operations.
//!
//! Every fallible operation on [`AudioData`](crate::AudioData) reports failure
//! through [`AudioDataError`]. Operations validate all of their preconditions
//! before touching storage, so an `Err` always means the buffer is unchanged.

use thiserror::Error;

/// Convenience type alias for results that may contain an [`AudioDataError`].
pub type AudioDataResult<T> = Result<T, AudioDataError>;

/// Error types that can occur during audio data operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AudioDataError {
    /// A configuration value (channel count, frame rate, factor) is less than 1.
    #[error("Invalid argument: {parameter} must be > 0 (got {value})")]
    InvalidArgument {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// The rejected value.
        value: u64,
    },

    /// An operation that needs a known channel count was called before one was set.
    #[error("Unconfigured: cannot {operation} before the channel count is set")]
    Unconfigured {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// An index, frame, channel or count exceeds the current extent of the buffer.
    #[error("Out of bounds: cannot {operation} {target} {index} of {extent}")]
    OutOfBounds {
        /// The operation that was attempted.
        operation: &'static str,
        /// What was being addressed (sample, frame, channel, ...).
        target: &'static str,
        /// The offending index or count.
        index: usize,
        /// The extent it was checked against.
        extent: usize,
    },

    /// A sample value is NaN or infinite.
    #[error("Invalid value: cannot set sample {index} to non-finite value {value}")]
    InvalidValue {
        /// Absolute sample index of the write.
        index: usize,
        /// The rejected value.
        value: f32,
    },

    /// Two buffers disagree on channel count or frame rate.
    #[error(
        "Metadata mismatch: cannot {operation} audio data with {field} {found} to audio data with {field} {expected}"
    )]
    MetadataMismatch {
        /// The operation that was attempted.
        operation: &'static str,
        /// Which metadata field differs.
        field: &'static str,
        /// Value held by the receiving buffer.
        expected: u64,
        /// Value held by the other buffer.
        found: u64,
    },

    /// A structural precondition of an operation does not hold.
    #[error("Invalid state: cannot {operation}: {reason}")]
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// Why the current state rules the operation out.
        reason: String,
    },
}

impl AudioDataError {
    pub(crate) const fn invalid_argument(parameter: &'static str, value: u64) -> Self {
        Self::InvalidArgument { parameter, value }
    }

    pub(crate) const fn out_of_bounds(
        operation: &'static str,
        target: &'static str,
        index: usize,
        extent: usize,
    ) -> Self {
        Self::OutOfBounds {
            operation,
            target,
            index,
            extent,
        }
    }

    pub(crate) fn invalid_state(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            operation,
            reason: reason.into(),
        }
    }

    /// Builds the error for a sample count that does not split into whole frames.
    pub(crate) fn partial_frame(operation: &'static str, samples: usize, channels: usize) -> Self {
        Self::invalid_state(
            operation,
            format!("{samples} samples do not form whole frames of {channels} channels"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message_carries_values() {
        let err = AudioDataError::out_of_bounds("get", "sample", 10, 4);
        assert_eq!(err.to_string(), "Out of bounds: cannot get sample 10 of 4");
    }

    #[test]
    fn test_metadata_mismatch_message() {
        let err = AudioDataError::MetadataMismatch {
            operation: "append",
            field: "frame rate",
            expected: 44100,
            found: 48000,
        };
        let msg = err.to_string();
        assert!(msg.contains("append"));
        assert!(msg.contains("48000"));
        assert!(msg.contains("44100"));
    }

    #[test]
    fn test_partial_frame_is_invalid_state() {
        let err = AudioDataError::partial_frame("slice", 3, 2);
        assert!(matches!(
            err,
            AudioDataError::InvalidState {
                operation: "slice",
                ..
            }
        ));
        assert!(err.to_string().contains("3 samples"));
    }
}
