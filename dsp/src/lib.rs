//! Digital signal processing components that must run in real-time.
//!
//! The crate implements a feed-forward stereo compressor with a soft knee.
//! Loudness is measured per block, the gain is smoothed per sample.

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod compressor;
pub mod decibels;
pub mod envelope;
pub mod error;
pub mod gain_curve;
pub mod level;
pub mod makeup;
pub mod parameters;
pub mod report;
