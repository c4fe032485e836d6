//! Components of user interface, passing the control input to DSP.
//!
//! The audio engine drives a [`session::Session`] once per block. The
//! session samples the DIP switch, reduces the reading into attributes for
//! the compressor and hands a report of the block to a slower loop:
//!
//! ```text
//!   [ DIP switch ] --(u8)--> [ Reducer {Cache} ] --(DSPReaction)--> [ Compressor ]
//!                                                                        |
//!                                                                     (Report)
//!                                                                        V
//!                                                               [ Diagnostics loop ]
//! ```

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

use dipcomp_dsp::compressor::Attributes;
use dipcomp_dsp::parameters::Ratio;

pub mod configuration;
pub mod diagnostics;
pub mod input;
mod log;
pub mod ratio;
pub mod session;

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlAction {
    SetReading(u8),
    SetSwitches([bool; input::SWITCHES]),
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DSPReaction {
    pub ratio: Ratio,
}

impl From<DSPReaction> for Attributes {
    fn from(other: DSPReaction) -> Self {
        Attributes { ratio: other.ratio }
    }
}

#[derive(Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cache {
    pub reading: u8,
    pub ratio: Ratio,
}

#[must_use]
pub fn reduce_control_action(action: ControlAction, cache: &mut Cache) -> DSPReaction {
    apply_control_action_in_cache(action, cache);
    cook_dsp_reaction_from_cache(cache)
}

#[must_use]
pub fn cook_dsp_reaction_from_cache(cache: &Cache) -> DSPReaction {
    DSPReaction { ratio: cache.ratio }
}

fn apply_control_action_in_cache(action: ControlAction, cache: &mut Cache) {
    let reading = match action {
        ControlAction::SetReading(x) => x,
        ControlAction::SetSwitches(switch) => input::byte_from_switches(switch),
    };
    if reading != cache.reading {
        cache.reading = reading;
        cache.ratio = ratio::ratio_from_reading(reading);
    }
}
