//! Validated compressor settings.
//!
//! Every value reaching the block-processing path went through one of the
//! constructors here, so the path itself never has to check for division by
//! zero or non-finite coefficients.

use crate::error::ConfigError;
use crate::makeup;

pub const DEFAULT_THRESHOLD: f32 = -80.0;
pub const DEFAULT_KNEE_WIDTH: f32 = 2.4;
pub const DEFAULT_ATTACK_TIME: f32 = 0.05;
pub const DEFAULT_RELEASE_TIME: f32 = 0.2;
pub const DEFAULT_OUTPUT_OFFSET: f32 = 16.0;

/// Largest gain whose linear factor is still a finite `f32`, a little
/// under `20 * log10(f32::MAX)`. Beyond it silence would turn into NaN.
pub const MAX_MAKEUP_GAIN: f32 = 770.0;

/// Compression ratio, never below 1.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ratio(f32);

impl Ratio {
    /// Ratio passing the signal through unchanged.
    pub const UNITY: Self = Self(1.0);

    pub fn new(ratio: f32) -> Result<Self, ConfigError> {
        if ratio.is_finite() && ratio >= 1.0 {
            Ok(Self(ratio))
        } else {
            Err(ConfigError::Ratio(ratio))
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// The `1/ratio - 1` term shared by the knee and the linear region.
    pub(crate) fn slope(self) -> f32 {
        1.0 / self.0 - 1.0
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::UNITY
    }
}

/// Sample rate in Hz, always positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleRate(f32);

impl SampleRate {
    pub fn new(sample_rate: f32) -> Result<Self, ConfigError> {
        if sample_rate.is_finite() && sample_rate > 0.0 {
            Ok(Self(sample_rate))
        } else {
            Err(ConfigError::SampleRate(sample_rate))
        }
    }

    pub fn hz(self) -> f32 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompressorParameters {
    threshold: f32,
    knee_width: f32,
    ratio: Ratio,
    attack_time: f32,
    release_time: f32,
    output_offset: f32,
}

impl CompressorParameters {
    /// Threshold and offset are in dB (threshold relative to full scale),
    /// times in seconds.
    pub fn new(
        threshold: f32,
        knee_width: f32,
        ratio: Ratio,
        attack_time: f32,
        release_time: f32,
        output_offset: f32,
    ) -> Result<Self, ConfigError> {
        if !threshold.is_finite() {
            return Err(ConfigError::Threshold(threshold));
        }
        if !(knee_width.is_finite() && knee_width > 0.0) {
            return Err(ConfigError::KneeWidth(knee_width));
        }
        if !(attack_time.is_finite() && attack_time > 0.0) {
            return Err(ConfigError::AttackTime(attack_time));
        }
        if !(release_time.is_finite() && release_time > 0.0) {
            return Err(ConfigError::ReleaseTime(release_time));
        }
        if !output_offset.is_finite() {
            return Err(ConfigError::OutputOffset(output_offset));
        }
        let makeup_bound = makeup::upper_bound(threshold, knee_width, output_offset);
        if !(makeup_bound <= MAX_MAKEUP_GAIN) {
            return Err(ConfigError::MakeupGain(makeup_bound));
        }
        Ok(Self {
            threshold,
            knee_width,
            ratio,
            attack_time,
            release_time,
            output_offset,
        })
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn knee_width(&self) -> f32 {
        self.knee_width
    }

    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    pub fn attack_time(&self) -> f32 {
        self.attack_time
    }

    pub fn release_time(&self) -> f32 {
        self.release_time
    }

    pub fn output_offset(&self) -> f32 {
        self.output_offset
    }

    /// Ratio is the only parameter following the control input, it is
    /// already validated by its type.
    pub fn set_ratio(&mut self, ratio: Ratio) {
        self.ratio = ratio;
    }

    #[must_use]
    pub fn with_ratio(mut self, ratio: Ratio) -> Self {
        self.ratio = ratio;
        self
    }
}

impl Default for CompressorParameters {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            knee_width: DEFAULT_KNEE_WIDTH,
            ratio: Ratio::UNITY,
            attack_time: DEFAULT_ATTACK_TIME,
            release_time: DEFAULT_RELEASE_TIME,
            output_offset: DEFAULT_OUTPUT_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_below_one_is_rejected() {
        assert_eq!(Ratio::new(0.5), Err(ConfigError::Ratio(0.5)));
        assert!(Ratio::new(0.0).is_err());
        assert!(Ratio::new(f32::NAN).is_err());
        assert!(Ratio::new(1.0).is_ok());
    }

    #[test]
    fn non_positive_sample_rate_is_rejected() {
        assert!(SampleRate::new(0.0).is_err());
        assert!(SampleRate::new(-48_000.0).is_err());
        assert!(SampleRate::new(f32::INFINITY).is_err());
        assert_relative_eq!(SampleRate::new(48_000.0).unwrap().hz(), 48_000.0);
    }

    #[test]
    fn zero_knee_width_is_rejected() {
        let result = CompressorParameters::new(-80.0, 0.0, Ratio::UNITY, 0.05, 0.2, 16.0);
        assert_eq!(result, Err(ConfigError::KneeWidth(0.0)));
    }

    #[test]
    fn non_positive_times_are_rejected() {
        assert_eq!(
            CompressorParameters::new(-80.0, 2.4, Ratio::UNITY, 0.0, 0.2, 16.0),
            Err(ConfigError::AttackTime(0.0))
        );
        assert_eq!(
            CompressorParameters::new(-80.0, 2.4, Ratio::UNITY, 0.05, -1.0, 16.0),
            Err(ConfigError::ReleaseTime(-1.0))
        );
    }

    #[test]
    fn non_finite_levels_are_rejected() {
        assert!(CompressorParameters::new(f32::NAN, 2.4, Ratio::UNITY, 0.05, 0.2, 16.0).is_err());
        assert!(
            CompressorParameters::new(-80.0, 2.4, Ratio::UNITY, 0.05, 0.2, f32::INFINITY).is_err()
        );
    }

    #[test]
    fn threshold_too_deep_for_makeup_is_rejected() {
        assert_eq!(
            CompressorParameters::new(-2000.0, 2.4, Ratio::new(5.0).unwrap(), 0.05, 0.2, 16.0),
            Err(ConfigError::MakeupGain(2016.0))
        );
    }

    #[test]
    fn makeup_within_sample_range_is_accepted() {
        let parameters =
            CompressorParameters::new(-700.0, 2.4, Ratio::new(64.75).unwrap(), 0.05, 0.2, 60.0);
        assert!(parameters.is_ok());
    }

    #[test]
    fn narrow_knee_at_offset_is_rejected() {
        // Offset inside the knee, quadratic term over a 0.1 dB knee.
        let result = CompressorParameters::new(-20.0, 0.1, Ratio::UNITY, 0.05, 0.2, 20.0);
        assert!(matches!(result, Err(ConfigError::MakeupGain(_))));
    }

    #[test]
    fn defaults_pass_validation() {
        let defaults = CompressorParameters::default();
        let validated = CompressorParameters::new(
            defaults.threshold(),
            defaults.knee_width(),
            defaults.ratio(),
            defaults.attack_time(),
            defaults.release_time(),
            defaults.output_offset(),
        );
        assert_eq!(validated, Ok(defaults));
    }
}
