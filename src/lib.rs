// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![deny(missing_docs)] // Documentation is a must for release

//! # AudioData
//!
//! An interleaved, multi-channel `f32` sample buffer for audio analysis
//! pipelines. Decoders fill it, preprocessing reduces it (mono downmix,
//! decimation, trimming) and analysis stages read it back by index, by
//! frame, through a pair of streaming cursors or as an `ndarray` matrix.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! audio_data = "0.1.0"
//! ```
//!
//! ## Features
//!
//! - `editing`: structural operations (append, prepend, grow, trim, slice)
//! - `channels`: mono reduction
//! - `resampling`: integer-factor decimation
//! - `serialization`: `serde` support for [`AudioFormat`]
//!
//! The first three are enabled by default.
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`AudioDataResult`]. Preconditions are
//! checked before anything is written, so a failed call leaves the buffer as
//! it was:
//!
//! ```rust
//! use audio_data::{AudioData, AudioDataError, AudioFormat};
//!
//! let mut audio = AudioData::from_interleaved(vec![0.0; 4], AudioFormat::mono(8000)?)?;
//! match audio.set_sample(1, f32::NAN) {
//!     Err(AudioDataError::InvalidValue { index, .. }) => assert_eq!(index, 1),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! assert_eq!(audio.sample(1)?, 0.0);
//! # Ok::<(), AudioDataError>(())
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use audio_data::{AudioChannelOps, AudioData, AudioDecimation, AudioEditing, AudioFormat};
//!
//! # fn example() -> Result<(), audio_data::AudioDataError> {
//! // A producer configures the buffer, grows it and writes decoded samples.
//! let mut audio = AudioData::with_format(AudioFormat::stereo(8)?);
//! audio.add_to_frame_count(4)?;
//! for frame in 0..4 {
//!     audio.set_sample_by_frame(frame, 0, frame as f32)?;
//!     audio.set_sample_by_frame(frame, 1, frame as f32 + 1.0)?;
//! }
//!
//! // Preprocessing: drop the first frame, downmix, decimate.
//! audio.discard_frames_from_front(1)?;
//! audio.reduce_to_mono();
//! audio.downsample(2, false)?;
//!
//! assert_eq!(audio.channels(), 1);
//! assert_eq!(audio.frame_rate(), 4);
//! assert_eq!(audio.to_vec(), vec![2.0, 3.5]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## License
//!
//! MIT License

mod error;
mod format;
pub mod iterators;
pub mod operations;
mod repr;
#[cfg(feature = "resampling")]
pub mod resampling;
pub mod views;

pub use crate::error::{AudioDataError, AudioDataResult};
pub use crate::format::AudioFormat;
pub use crate::iterators::FrameIterator;
pub use crate::operations::{AudioChannelOps, AudioDecimation, AudioEditing, DecimationMethod};
pub use crate::repr::AudioData;
