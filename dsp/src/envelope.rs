//! Attack/release smoothing of the target gain.
//!
//! The gain is smoothed at audio rate: the state moves once per sample, not
//! once per block. Time constants are calibrated so that the gain closes
//! 8/9 of the gap to its target in the given time.

use libm::expf;

use crate::parameters::SampleRate;

const LN_9: f32 = 2.197_224_6;

/// Smoothing coefficients for the current sample rate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coefficients {
    pub attack: f32,
    pub release: f32,
}

impl Coefficients {
    /// Both times are in seconds and must be positive.
    #[must_use]
    pub fn new(sample_rate: SampleRate, attack_time: f32, release_time: f32) -> Self {
        Self {
            attack: coefficient(sample_rate, attack_time),
            release: coefficient(sample_rate, release_time),
        }
    }
}

fn coefficient(sample_rate: SampleRate, time: f32) -> f32 {
    expf(-LN_9 / (sample_rate.hz() * time))
}

/// Smoothed gain of a single channel, persisting between blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelEnvelopeState {
    smoothed_gain: f32,
}

impl ChannelEnvelopeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn smoothed_gain(&self) -> f32 {
        self.smoothed_gain
    }

    pub fn reset(&mut self) {
        self.smoothed_gain = 0.0;
    }

    /// Move the smoothed gain one sample towards the target and return it.
    ///
    /// When the target asks for less reduction than is currently applied,
    /// the attack coefficient is used, otherwise the release one. The
    /// pairing is inherited from the stage multiplying the samples and must
    /// not be swapped.
    pub fn tick(&mut self, computed_gain: f32, coefficients: Coefficients) -> f32 {
        let alpha = if computed_gain > self.smoothed_gain {
            coefficients.attack
        } else {
            coefficients.release
        };
        self.smoothed_gain = self.smoothed_gain * alpha + (1.0 - alpha) * computed_gain;
        self.smoothed_gain
    }
}
