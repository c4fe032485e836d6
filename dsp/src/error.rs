//! Rejected configuration.

use thiserror::Error;

/// A precondition of the compressor was violated while configuring it.
///
/// These are reported once, before the block-processing path is entered.
/// Nothing on the audio path ever returns this.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    #[error("knee width must be a positive number of decibels, got {0}")]
    KneeWidth(f32),
    #[error("ratio must be at least 1, got {0}")]
    Ratio(f32),
    #[error("sample rate must be positive, got {0}")]
    SampleRate(f32),
    #[error("attack time must be a positive number of seconds, got {0}")]
    AttackTime(f32),
    #[error("release time must be a positive number of seconds, got {0}")]
    ReleaseTime(f32),
    #[error("threshold must be finite, got {0}")]
    Threshold(f32),
    #[error("output offset must be finite, got {0}")]
    OutputOffset(f32),
    #[error("threshold and output offset allow a makeup gain of {0} dB, beyond the range of f32 samples")]
    MakeupGain(f32),
}
