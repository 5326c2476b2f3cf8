use std::time::Duration;

use super::snapshot::CpuSnapshot;
use crate::error::Result;

pub trait CpuCounterSource {
    fn cpu_snapshot(&mut self) -> Result<CpuSnapshot>;
}

impl<T: CpuCounterSource + ?Sized> CpuCounterSource for &mut T {
    fn cpu_snapshot(&mut self) -> Result<CpuSnapshot> {
        (**self).cpu_snapshot()
    }
}

/// Measures CPU busy percentage over an explicit sampling delay.
pub struct CpuSampler<S> {
    source: S,
    sleep: fn(Duration),
}

impl<S: CpuCounterSource> CpuSampler<S> {
    pub fn new(source: S) -> Self {
        CpuSampler {
            source,
            sleep: std::thread::sleep,
        }
    }

    /// Replace the blocking sleep between the two snapshots.
    pub fn with_sleep(mut self, sleep: fn(Duration)) -> Self {
        self.sleep = sleep;
        self
    }

    /// Snapshot, sleep for `delay`, snapshot again, and report the busy share
    /// of the elapsed ticks. Not clamped and never retried.
    pub fn percentage(&mut self, delay: Duration) -> Result<f64> {
        let _span = tracing::debug_span!("cpu.sample", delay_us = delay.as_micros() as u64)
            .entered();

        let before = self.source.cpu_snapshot()?;
        (self.sleep)(delay);
        let after = self.source.cpu_snapshot()?;

        let percentage = after.busy_percentage_since(&before);
        tracing::debug!(
            busy_delta = after.busy_ticks.saturating_sub(before.busy_ticks),
            idle_delta = after.idle_ticks.saturating_sub(before.idle_ticks),
            percentage,
            "cpu sample complete"
        );
        Ok(percentage)
    }
}
