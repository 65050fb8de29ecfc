//! Supporting types and enums for audio operations.

/// How [`AudioDecimation::decimate`](super::AudioDecimation::decimate) turns a block
/// of `factor` input samples into one output sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimationMethod {
    /// Keep the first sample of each block and drop the rest.
    Shortcut,
    /// Arithmetic mean of the block. A trailing partial block is averaged over
    /// the samples it actually has.
    #[default]
    BlockMean,
}

impl DecimationMethod {
    /// Returns true for [`DecimationMethod::Shortcut`].
    pub const fn is_shortcut(&self) -> bool {
        matches!(self, DecimationMethod::Shortcut)
    }
}
