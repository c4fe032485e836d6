//! Per-block diagnostics.
//!
//! A report is a plain copyable value so it can be handed over to a slower
//! loop without allocation. Formatting it is up to whoever drains it.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    /// Running maximum, in dB, of the absolute value of the first input
    /// sample of every block on either channel since start or reset. It is
    /// not the peak of the current block.
    pub input_peak: f32,
    /// First output sample of each channel, in dB.
    pub output: [f32; 2],
    /// Smoothed gain of each channel after the block, in dB.
    pub smoothed_gain: [f32; 2],
    pub ratio: f32,
    pub makeup_gain: f32,
}
