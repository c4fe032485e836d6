//! Digital control input.
//!
//! The compressor only needs a single byte per block. Where it comes from is
//! hidden behind [`DigitalInput`], so the DSP side never touches hardware.

mod debounced;
mod dip_switch;

pub use debounced::Debounced;
pub use dip_switch::{byte_from_switches, DigitalPin, DipSwitch, BCM_PINS, SWITCHES};

/// Provider of the 8-bit control reading.
///
/// It is sampled once per block from within the audio callback, so it must
/// return well within the block deadline.
pub trait DigitalInput {
    fn read_digital_byte(&mut self) -> u8;
}

impl<F> DigitalInput for F
where
    F: FnMut() -> u8,
{
    fn read_digital_byte(&mut self) -> u8 {
        self()
    }
}
