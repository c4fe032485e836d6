//! Estimate block loudness.
//!
//! The block RMS is scaled by √2, reading it as the peak amplitude of a
//! sine wave with the same power, and expressed in dBFS.

use core::f32::consts::SQRT_2;

use libm::sqrtf;

use crate::decibels::amplitude_to_decibels;

#[must_use]
pub fn rms(block: &[f32]) -> f32 {
    if block.is_empty() {
        return 0.0;
    }
    let sum_of_squares: f32 = block.iter().map(|x| x * x).sum();
    sqrtf(sum_of_squares / block.len() as f32)
}

/// Level of the block in decibels, clamped to the silence floor.
#[must_use]
pub fn level_in_decibels(block: &[f32]) -> f32 {
    amplitude_to_decibels(rms(block) * SQRT_2)
}
