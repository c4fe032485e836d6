//! 8-way DIP switch read through individual digital pins.

use super::debounced::Debounced;
use super::DigitalInput;

pub const SWITCHES: usize = 8;

/// BCM GPIO numbers the switches are wired to on a Raspberry Pi, ordered
/// from the least significant bit.
pub const BCM_PINS: [u8; SWITCHES] = [17, 27, 22, 24, 5, 12, 13, 26];

/// A single digital input line.
pub trait DigitalPin {
    fn is_high(&mut self) -> bool;
}

/// Compose the byte out of switch positions, switch `i` being bit `i`.
#[must_use]
pub fn byte_from_switches(switch: [bool; SWITCHES]) -> u8 {
    switch
        .iter()
        .enumerate()
        .fold(0, |byte, (i, up)| byte | (u8::from(*up) << i))
}

/// Switch bank turning pin levels into the control byte.
///
/// Each pin is debounced over the last `D` reads, so a bouncing contact
/// cannot change the ratio for a single block.
#[derive(Debug)]
pub struct DipSwitch<P, const D: usize = 4> {
    pins: [P; SWITCHES],
    switch: [Debounced<D>; SWITCHES],
}

impl<P: DigitalPin, const D: usize> DipSwitch<P, D> {
    pub fn new(pins: [P; SWITCHES]) -> Self {
        Self {
            pins,
            switch: [Debounced::new(); SWITCHES],
        }
    }

    pub fn sample(&mut self) {
        for (pin, switch) in self.pins.iter_mut().zip(self.switch.iter_mut()) {
            switch.update(pin.is_high());
        }
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        byte_from_switches(self.switch.map(|s| s.value()))
    }
}

impl<P: DigitalPin, const D: usize> DigitalInput for DipSwitch<P, D> {
    fn read_digital_byte(&mut self) -> u8 {
        self.sample();
        self.value()
    }
}
