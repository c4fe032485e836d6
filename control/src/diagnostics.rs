//! Hand per-block reports over from the audio callback to a slower loop.
//!
//! The audio side only ever enqueues into a fixed-size single-producer
//! single-consumer queue. When the consumer falls behind, reports are
//! dropped and counted instead of waiting for space.

use core::sync::atomic::{AtomicU32, Ordering};

use heapless::spsc::{Consumer, Producer, Queue};

use dipcomp_dsp::report::Report;

use crate::log;

/// Storage of the report queue. Holds up to `N - 1` reports.
pub struct Diagnostics<const N: usize> {
    queue: Queue<Report, N>,
    dropped: AtomicU32,
}

impl<const N: usize> Diagnostics<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: Queue::new(),
            dropped: AtomicU32::new(0),
        }
    }

    pub fn split(&mut self) -> (ReportProducer<'_, N>, ReportConsumer<'_, N>) {
        let (producer, consumer) = self.queue.split();
        let dropped = &self.dropped;
        (
            ReportProducer { producer, dropped },
            ReportConsumer {
                consumer,
                dropped,
                last_ratio: None,
            },
        )
    }
}

impl<const N: usize> Default for Diagnostics<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// The audio side of the queue.
pub struct ReportProducer<'a, const N: usize> {
    producer: Producer<'a, Report, N>,
    dropped: &'a AtomicU32,
}

impl<'a, const N: usize> ReportProducer<'a, N> {
    /// Enqueue without blocking. Returns `false` if the report was dropped.
    pub fn push(&mut self, report: Report) -> bool {
        if self.producer.enqueue(report).is_ok() {
            true
        } else {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            false
        }
    }
}

/// The slow side of the queue, never to be used from the audio callback.
pub struct ReportConsumer<'a, const N: usize> {
    consumer: Consumer<'a, Report, N>,
    dropped: &'a AtomicU32,
    last_ratio: Option<f32>,
}

impl<'a, const N: usize> ReportConsumer<'a, N> {
    pub fn pop(&mut self) -> Option<Report> {
        self.consumer.dequeue()
    }

    /// Number of reports lost since start because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Log every pending report. Returns how many were drained.
    pub fn drain(&mut self) -> usize {
        let mut drained = 0;
        while let Some(report) = self.consumer.dequeue() {
            if self.last_ratio != Some(report.ratio) {
                log::info!("Ratio changed to {}", report.ratio);
                self.last_ratio = Some(report.ratio);
            }
            log::info!(
                "Input: {}, output: {}, SG: {}, ratio: {}, MakeUpGain: {}",
                report.input_peak,
                report.output[0],
                report.smoothed_gain[0],
                report.ratio,
                report.makeup_gain
            );
            drained += 1;
        }
        let dropped = self.dropped();
        if dropped > 0 {
            log::warn!("{} reports dropped so far", dropped);
        }
        drained
    }
}
