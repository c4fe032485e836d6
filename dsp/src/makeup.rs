//! Restore loudness taken by the compression.
//!
//! The static curve is evaluated at the configured output offset instead of
//! the live level, so the makeup gain does not follow the signal and is
//! computed once per block.

use crate::parameters::CompressorParameters;

#[must_use]
pub fn calculate(parameters: &CompressorParameters) -> f32 {
    let threshold = parameters.threshold();
    let knee_width = parameters.knee_width();
    let knee_half = knee_width / 2.0;
    let ratio = parameters.ratio();
    let offset = parameters.output_offset();

    let makeup = if offset <= -threshold - knee_half {
        -threshold + threshold / ratio.value()
    } else if offset <= -threshold + knee_half {
        let span = -threshold + knee_half;
        -(ratio.slope() * span * span) / (2.0 * knee_width)
    } else {
        0.0
    };

    makeup + offset
}

/// Highest makeup gain the given settings can produce with any ratio.
///
/// The reduction compensated in both curved regions grows with the ratio,
/// so the bound is the limit of an infinite ratio.
#[must_use]
pub fn upper_bound(threshold: f32, knee_width: f32, offset: f32) -> f32 {
    let knee_half = knee_width / 2.0;
    let makeup = if offset <= -threshold - knee_half {
        f32::max(-threshold, 0.0)
    } else if offset <= -threshold + knee_half {
        let span = -threshold + knee_half;
        (span * span) / (2.0 * knee_width)
    } else {
        0.0
    };
    makeup + offset
}
