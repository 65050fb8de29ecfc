//! Channel count and frame rate configuration.

use crate::{AudioDataError, AudioDataResult};

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// The metadata that fixes how an [`AudioData`](crate::AudioData) buffer is interpreted.
///
/// Both values are always at least 1; an `AudioFormat` cannot describe an
/// unconfigured buffer.
///
/// ```rust
/// use audio_data::AudioFormat;
///
/// let format = AudioFormat::new(2, 44100).unwrap();
/// assert_eq!(format.channels(), 2);
/// assert_eq!(format, AudioFormat::stereo(44100).unwrap());
/// assert!(AudioFormat::new(0, 44100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(try_from = "RawAudioFormat"))]
pub struct AudioFormat {
    channels: usize,
    frame_rate: u32,
}

impl AudioFormat {
    /// Creates a format, rejecting a zero channel count or frame rate.
    ///
    /// # Errors
    /// Returns [`AudioDataError::InvalidArgument`] if either value is 0.
    pub fn new(channels: usize, frame_rate: u32) -> AudioDataResult<Self> {
        if channels < 1 {
            return Err(AudioDataError::invalid_argument("channels", channels as u64));
        }
        if frame_rate < 1 {
            return Err(AudioDataError::invalid_argument(
                "frame rate",
                u64::from(frame_rate),
            ));
        }
        Ok(Self {
            channels,
            frame_rate,
        })
    }

    /// Single-channel format at the given frame rate.
    ///
    /// # Errors
    /// Returns [`AudioDataError::InvalidArgument`] if `frame_rate` is 0.
    pub fn mono(frame_rate: u32) -> AudioDataResult<Self> {
        Self::new(1, frame_rate)
    }

    /// Two-channel format at the given frame rate.
    ///
    /// # Errors
    /// Returns [`AudioDataError::InvalidArgument`] if `frame_rate` is 0.
    pub fn stereo(frame_rate: u32) -> AudioDataResult<Self> {
        Self::new(2, frame_rate)
    }

    /// Number of interleaved channels.
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Frames per second.
    pub const fn frame_rate(&self) -> u32 {
        self.frame_rate
    }
}

// Deserialized formats go through the same validation as `AudioFormat::new`.
#[cfg(feature = "serialization")]
#[derive(Deserialize)]
struct RawAudioFormat {
    channels: usize,
    frame_rate: u32,
}

#[cfg(feature = "serialization")]
impl TryFrom<RawAudioFormat> for AudioFormat {
    type Error = AudioDataError;

    fn try_from(raw: RawAudioFormat) -> Result<Self, Self::Error> {
        Self::new(raw.channels, raw.frame_rate)
    }
}


#[cfg(all(test, feature = "serialization"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_format_serializes_fields() {
        let format = AudioFormat::stereo(44100).unwrap();
        let json = serde_json::to_string(&format).unwrap();
        assert_eq!(json, r#"{"channels":2,"frame_rate":44100}"#);
        assert_eq!(serde_json::from_str::<AudioFormat>(&json).unwrap(), format);
    }

    #[test]
    fn test_deserialize_validates() {
        let result = serde_json::from_str::<AudioFormat>(r#"{"channels":0,"frame_rate":44100}"#);
        assert!(result.is_err());
    }
}
