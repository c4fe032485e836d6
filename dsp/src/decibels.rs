use libm::{log10f, powf};

/// Level reported for blocks too quiet to be measured, including digital
/// silence.
pub const SILENCE_FLOOR_DB: f32 = -120.0;

/// Convert amplitude to decibels, never going below [`SILENCE_FLOOR_DB`].
///
/// Zero amplitude would otherwise produce negative infinity and a NaN input
/// would poison the envelope state for the rest of the session.
pub fn amplitude_to_decibels(amplitude: f32) -> f32 {
    let decibels = 20.0 * log10f(amplitude);
    // Written so that NaN falls through to the floor as well.
    if decibels > SILENCE_FLOOR_DB {
        decibels
    } else {
        SILENCE_FLOOR_DB
    }
}

pub fn decibels_to_amplitude(decibels: f32) -> f32 {
    powf(10.0, decibels / 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_is_zero_decibels() {
        assert_abs_diff_eq!(amplitude_to_decibels(1.0), 0.0);
        assert_relative_eq!(decibels_to_amplitude(0.0), 1.0);
    }

    #[test]
    fn halving_amplitude_drops_about_six_decibels() {
        assert_relative_eq!(amplitude_to_decibels(0.5), -6.020_6, epsilon = 0.001);
    }

    #[test]
    fn silence_is_clamped_to_floor() {
        assert_relative_eq!(amplitude_to_decibels(0.0), SILENCE_FLOOR_DB);
        assert_relative_eq!(amplitude_to_decibels(1.0e-9), SILENCE_FLOOR_DB);
    }

    #[test]
    fn nan_is_clamped_to_floor() {
        assert_relative_eq!(amplitude_to_decibels(f32::NAN), SILENCE_FLOOR_DB);
    }

    #[test]
    fn conversion_goes_both_ways() {
        let amplitude = decibels_to_amplitude(-18.0);
        assert_relative_eq!(amplitude_to_decibels(amplitude), -18.0, epsilon = 0.0001);
    }
}
