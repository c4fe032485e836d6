//! Block-processing entry point tying the control input to the compressor.
//!
//! The audio engine calls [`Session::process_block`] once per block from its
//! real-time context. Everything else here is meant to be called between
//! blocks: startup, reconfiguration, sample rate notifications.

use dipcomp_dsp::compressor::{Compressor, CHANNELS};
use dipcomp_dsp::error::ConfigError;
use dipcomp_dsp::parameters::SampleRate;
use dipcomp_dsp::report::Report;

use crate::configuration::Configuration;
use crate::diagnostics::ReportProducer;
use crate::input::DigitalInput;
use crate::log;
use crate::{reduce_control_action, Cache, ControlAction};

pub struct Session<'a, I, const N: usize> {
    input: I,
    compressor: Compressor,
    cache: Cache,
    configuration: Configuration,
    sample_rate: SampleRate,
    diagnostics: Option<ReportProducer<'a, N>>,
}

impl<'a, I: DigitalInput, const N: usize> Session<'a, I, N> {
    /// Validate the configuration and the initial sample rate, failing
    /// before any audio is processed.
    pub fn new(
        input: I,
        configuration: Configuration,
        sample_rate: f32,
    ) -> Result<Self, ConfigError> {
        let cache = Cache::default();
        let parameters = configuration
            .parameters(cache.ratio)
            .map_err(reject)?;
        let sample_rate = SampleRate::new(sample_rate).map_err(reject)?;
        log::info!("Session configured at {} Hz", sample_rate.hz());
        Ok(Self {
            input,
            compressor: Compressor::new(parameters, configuration.envelope_link),
            cache,
            configuration,
            sample_rate,
            diagnostics: None,
        })
    }

    /// Send a report of every processed block to the given queue.
    #[must_use]
    pub fn with_diagnostics(mut self, producer: ReportProducer<'a, N>) -> Self {
        self.diagnostics = Some(producer);
        self
    }

    pub fn compressor(&self) -> &Compressor {
        &self.compressor
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Replace the configuration as a whole. On error the previous one is
    /// kept. Envelope state survives, unless the linking mode changes.
    pub fn reconfigure(&mut self, configuration: Configuration) -> Result<(), ConfigError> {
        let parameters = configuration
            .parameters(self.cache.ratio)
            .map_err(reject)?;
        if configuration.envelope_link == self.configuration.envelope_link {
            self.compressor.set_parameters(parameters);
        } else {
            self.compressor = Compressor::new(parameters, configuration.envelope_link);
        }
        self.configuration = configuration;
        log::info!("Session reconfigured");
        Ok(())
    }

    /// Record a sample rate change announced by the audio engine.
    pub fn set_sample_rate(&mut self, sample_rate: f32) -> Result<(), ConfigError> {
        self.sample_rate = SampleRate::new(sample_rate).map_err(reject)?;
        log::info!("Sample rate is now {} Hz", sample_rate);
        Ok(())
    }

    /// Restart the envelopes from 0 dB.
    pub fn reset(&mut self) {
        self.compressor.reset();
    }

    /// Process a block at the last recorded sample rate.
    pub fn process_block(
        &mut self,
        input: [&[f32]; CHANNELS],
        output: [&mut [f32]; CHANNELS],
    ) -> Report {
        self.process_block_at(input, output, self.sample_rate)
    }

    /// Read the switch, update the ratio and compress the block.
    pub fn process_block_at(
        &mut self,
        input: [&[f32]; CHANNELS],
        output: [&mut [f32]; CHANNELS],
        sample_rate: SampleRate,
    ) -> Report {
        let reading = self.input.read_digital_byte();
        let reaction = reduce_control_action(ControlAction::SetReading(reading), &mut self.cache);
        self.compressor.set_attributes(reaction.into());

        let report = self.compressor.process(input, output, sample_rate);
        if let Some(diagnostics) = self.diagnostics.as_mut() {
            diagnostics.push(report);
        }
        report
    }
}

fn reject(error: ConfigError) -> ConfigError {
    log::warn!("Configuration rejected: {}", error);
    error
}
