//! Translate the switch reading into compression ratio.

use dipcomp_dsp::parameters::Ratio;

/// Ratio rises by 1 for every 4 steps of the reading, from 1:1 at 0 up to
/// 64.75:1 at 255.
#[must_use]
pub fn ratio_from_reading(reading: u8) -> Ratio {
    // The offset keeps the ratio at 1 or above for every possible byte.
    Ratio::new(1.0 + f32::from(reading) / 4.0).unwrap_or(Ratio::UNITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_reading_means_no_compression() {
        assert_eq!(ratio_from_reading(0), Ratio::UNITY);
    }

    #[test]
    fn full_reading_reaches_maximum() {
        assert_relative_eq!(ratio_from_reading(255).value(), 64.75);
    }

    #[test]
    fn sixteen_gives_five_to_one() {
        assert_relative_eq!(ratio_from_reading(16).value(), 5.0);
    }

    #[test]
    fn every_reading_follows_the_formula() {
        for reading in 0..=u8::MAX {
            let ratio = ratio_from_reading(reading).value();
            assert_relative_eq!(ratio, 1.0 + reading as f32 / 4.0);
            assert!(ratio >= 1.0);
        }
    }
}
