//! Soft-knee compression law.
//!
//! Maps a detected level to the gain adjustment the compressor aims for,
//! both in decibels. The knee is a quadratic blend joining the untouched
//! region with the linear one, keeping the curve and its slope continuous
//! on both knee edges.

use crate::parameters::Ratio;

/// Target gain in dB for the given input level.
///
/// Returns 0 below the knee and a non-positive value above it.
#[must_use]
pub fn computed_gain(level: f32, threshold: f32, knee_width: f32, ratio: Ratio) -> f32 {
    compressed_level(level, threshold, knee_width, ratio) - level
}

/// Level after the static curve is applied, `xsc` in the usual notation.
#[must_use]
pub fn compressed_level(level: f32, threshold: f32, knee_width: f32, ratio: Ratio) -> f32 {
    let knee_half = knee_width / 2.0;
    if level < threshold - knee_half {
        level
    } else if level <= threshold + knee_half {
        let overshoot = level - threshold + knee_half;
        level + (ratio.slope() * overshoot * overshoot) / (2.0 * knee_width)
    } else {
        threshold + (level - threshold) / ratio.value()
    }
}
