//! Audio data operations.
//!
//! Operations are grouped into focused traits, each implemented for
//! [`AudioData`](crate::AudioData) in its own module:
//!
//! - [`traits`] - Trait definitions
//! - [`editing`] - Concatenation, growth and trimming ([`AudioEditing`])
//! - [`channels`] - Mono reduction ([`AudioChannelOps`])
//! - [`types`] - Supporting enums
//!
//! Decimation ([`AudioDecimation`]) lives in [`crate::resampling`].
//!
//! ```rust
//! use audio_data::{AudioData, AudioFormat, operations::*};
//!
//! # fn example() -> Result<(), audio_data::AudioDataError> {
//! let mut audio = AudioData::from_interleaved(vec![1.0, 3.0, 5.0, 7.0], AudioFormat::stereo(8)?)?;
//! audio.reduce_to_mono();
//! audio.downsample(2, true)?;
//!
//! assert_eq!(audio.to_vec(), vec![2.0]);
//! assert_eq!(audio.frame_rate(), 4);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod traits;
pub mod types;

#[cfg(feature = "channels")]
pub mod channels;
#[cfg(feature = "editing")]
pub mod editing;

pub use traits::{AudioChannelOps, AudioDecimation, AudioEditing};
pub use types::DecimationMethod;
