//! Session configuration.
//!
//! Unlike the ratio, which follows the switch on every block, these values
//! are set once at startup or replaced as a whole on reconfiguration.

use dipcomp_dsp::compressor::EnvelopeLink;
use dipcomp_dsp::error::ConfigError;
use dipcomp_dsp::parameters::{
    CompressorParameters, Ratio, DEFAULT_ATTACK_TIME, DEFAULT_KNEE_WIDTH, DEFAULT_OUTPUT_OFFSET,
    DEFAULT_RELEASE_TIME, DEFAULT_THRESHOLD,
};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    /// dBFS.
    pub threshold: f32,
    /// dB, must be positive.
    pub knee_width: f32,
    /// Seconds.
    pub attack_time: f32,
    /// Seconds.
    pub release_time: f32,
    /// dB.
    pub output_offset: f32,
    pub envelope_link: EnvelopeLink,
}

impl Configuration {
    /// Validate the configuration, pairing it with the current ratio.
    pub fn parameters(&self, ratio: Ratio) -> Result<CompressorParameters, ConfigError> {
        CompressorParameters::new(
            self.threshold,
            self.knee_width,
            ratio,
            self.attack_time,
            self.release_time,
            self.output_offset,
        )
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            knee_width: DEFAULT_KNEE_WIDTH,
            attack_time: DEFAULT_ATTACK_TIME,
            release_time: DEFAULT_RELEASE_TIME,
            output_offset: DEFAULT_OUTPUT_OFFSET,
            envelope_link: EnvelopeLink::Independent,
        }
    }
}
