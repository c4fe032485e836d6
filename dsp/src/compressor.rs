//! Stereo dynamic range compressor.
//!
//! This is the entry point called once per audio block. Per channel it
//! measures the block level, looks up the target gain on the soft-knee
//! curve, smooths it sample by sample and applies it together with the
//! makeup gain.
//!
//! The path does not allocate, block or fail. All the inputs it accepts
//! are validated when constructed.

use libm::fabsf;

use crate::decibels::{amplitude_to_decibels, decibels_to_amplitude};
use crate::envelope::{ChannelEnvelopeState, Coefficients};
use crate::gain_curve;
use crate::level;
use crate::makeup;
use crate::parameters::{CompressorParameters, Ratio, SampleRate};
use crate::report::Report;

pub const CHANNELS: usize = 2;

/// How the envelope state is distributed between channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnvelopeLink {
    /// Each channel smooths its own gain.
    #[default]
    Independent,
    /// A single state is run through the left channel and then the right
    /// one, each overwriting the history of the other. Kept to reproduce
    /// the behaviour of the first hardware build bit for bit.
    Shared,
}

/// Attributes following the control loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attributes {
    pub ratio: Ratio,
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Compressor {
    parameters: CompressorParameters,
    link: EnvelopeLink,
    envelope: [ChannelEnvelopeState; CHANNELS],
    input_peak: f32,
}

impl Compressor {
    #[must_use]
    pub fn new(parameters: CompressorParameters, link: EnvelopeLink) -> Self {
        Self {
            parameters,
            link,
            envelope: [ChannelEnvelopeState::new(); CHANNELS],
            input_peak: 0.0,
        }
    }

    pub fn parameters(&self) -> &CompressorParameters {
        &self.parameters
    }

    pub fn link(&self) -> EnvelopeLink {
        self.link
    }

    pub fn envelope(&self, channel: usize) -> &ChannelEnvelopeState {
        &self.envelope[self.state_index(channel)]
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.parameters.set_ratio(attributes.ratio);
    }

    /// Replace all parameters at once. Envelope state is kept.
    pub fn set_parameters(&mut self, parameters: CompressorParameters) {
        self.parameters = parameters;
    }

    /// Forget the envelope history, as after a restart.
    pub fn reset(&mut self) {
        for state in &mut self.envelope {
            state.reset();
        }
        self.input_peak = 0.0;
    }

    /// Compress a block of both channels from `input` to `output`.
    ///
    /// Input and output of a channel are expected to be of the same length,
    /// only the common part is written otherwise. The sample rate may differ
    /// from the previous call, coefficients are derived from it every block.
    pub fn process(
        &mut self,
        input: [&[f32]; CHANNELS],
        output: [&mut [f32]; CHANNELS],
        sample_rate: SampleRate,
    ) -> Report {
        let block = self.prepare_block(sample_rate);
        let mut heads = [0.0; CHANNELS];

        for (channel, (input, output)) in input.into_iter().zip(output).enumerate() {
            debug_assert_eq!(input.len(), output.len());
            let computed_gain = self.computed_gain(input);
            let index = self.state_index(channel);
            let state = &mut self.envelope[index];
            for (x, y) in input.iter().zip(output.iter_mut()) {
                *y = *x * block.tick(state, computed_gain);
            }
            heads[channel] = output.first().copied().unwrap_or(0.0);
            self.track_input_peak(input);
        }

        self.report(&block, heads)
    }

    /// Same as [`Compressor::process`], overwriting the input buffers.
    pub fn process_in_place(
        &mut self,
        buffers: [&mut [f32]; CHANNELS],
        sample_rate: SampleRate,
    ) -> Report {
        let block = self.prepare_block(sample_rate);
        let mut heads = [0.0; CHANNELS];

        for (channel, buffer) in buffers.into_iter().enumerate() {
            self.track_input_peak(buffer);
            let computed_gain = self.computed_gain(buffer);
            let index = self.state_index(channel);
            let state = &mut self.envelope[index];
            for x in buffer.iter_mut() {
                *x *= block.tick(state, computed_gain);
            }
            heads[channel] = buffer.first().copied().unwrap_or(0.0);
        }

        self.report(&block, heads)
    }

    fn prepare_block(&self, sample_rate: SampleRate) -> Block {
        Block {
            coefficients: Coefficients::new(
                sample_rate,
                self.parameters.attack_time(),
                self.parameters.release_time(),
            ),
            makeup_gain: makeup::calculate(&self.parameters),
        }
    }

    fn computed_gain(&self, input: &[f32]) -> f32 {
        gain_curve::computed_gain(
            level::level_in_decibels(input),
            self.parameters.threshold(),
            self.parameters.knee_width(),
            self.parameters.ratio(),
        )
    }

    fn state_index(&self, channel: usize) -> usize {
        match self.link {
            EnvelopeLink::Independent => channel,
            EnvelopeLink::Shared => 0,
        }
    }

    fn track_input_peak(&mut self, input: &[f32]) {
        if let Some(first) = input.first() {
            self.input_peak = f32::max(self.input_peak, fabsf(*first));
        }
    }

    fn report(&self, block: &Block, heads: [f32; CHANNELS]) -> Report {
        Report {
            input_peak: amplitude_to_decibels(self.input_peak),
            output: heads.map(|x| amplitude_to_decibels(fabsf(x))),
            smoothed_gain: [
                self.envelope(0).smoothed_gain(),
                self.envelope(1).smoothed_gain(),
            ],
            ratio: self.parameters.ratio().value(),
            makeup_gain: block.makeup_gain,
        }
    }
}

/// Values shared by all samples of a block.
struct Block {
    coefficients: Coefficients,
    makeup_gain: f32,
}

impl Block {
    /// Advance the envelope by one sample and return the linear gain to
    /// multiply that sample with.
    fn tick(&self, state: &mut ChannelEnvelopeState, computed_gain: f32) -> f32 {
        let smoothed_gain = state.tick(computed_gain, self.coefficients);
        decibels_to_amplitude(self.makeup_gain + smoothed_gain)
    }
}
