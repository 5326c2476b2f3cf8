use sysinfo::System;

use super::cpu::CpuCounterSource;
use super::load::{LoadAverageSource, MAX_AVERAGES};
use super::memory::MemoryCounterSource;
use super::platform;
use super::snapshot::{CpuSnapshot, MemoryBytes};
use crate::error::{Result, StatsError};

/// Ticks per percentage point when counters are synthesized from sysinfo.
const SYNTHETIC_TICKS_PER_PERCENT: f64 = 100.0;

/// Host-backed counter source for all three readers.
///
/// Direct OS counters are preferred. Where the platform has none, CPU ticks
/// are accumulated from sysinfo's usage-since-last-refresh so that deltas
/// between two snapshots still describe the interval between them.
pub struct HostCollector {
    sys: System,
    synthetic: CpuSnapshot,
}

impl Default for HostCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl HostCollector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        HostCollector {
            sys,
            synthetic: CpuSnapshot::default(),
        }
    }

    fn synthetic_cpu_snapshot(&mut self) -> Result<CpuSnapshot> {
        self.sys.refresh_cpu_usage();
        if self.sys.cpus().is_empty() {
            return Err(StatsError::SamplingUnavailable(
                "no CPUs reported by the host".to_string(),
            ));
        }

        let busy = f64::from(self.sys.global_cpu_usage()).clamp(0.0, 100.0);
        self.synthetic.busy_ticks += (busy * SYNTHETIC_TICKS_PER_PERCENT) as u64;
        self.synthetic.idle_ticks += ((100.0 - busy) * SYNTHETIC_TICKS_PER_PERCENT) as u64;
        Ok(self.synthetic)
    }
}

impl CpuCounterSource for HostCollector {
    fn cpu_snapshot(&mut self) -> Result<CpuSnapshot> {
        match platform::cpu_ticks() {
            Some(snapshot) => Ok(snapshot),
            None => self.synthetic_cpu_snapshot(),
        }
    }
}

impl MemoryCounterSource for HostCollector {
    fn memory_bytes(&mut self) -> Result<MemoryBytes> {
        self.sys.refresh_memory();
        Ok(MemoryBytes {
            total: self.sys.total_memory(),
            used: self.sys.used_memory(),
            free: self.sys.available_memory(),
        })
    }
}

impl LoadAverageSource for HostCollector {
    fn load_average(&mut self) -> Option<[f64; MAX_AVERAGES]> {
        if let Some(averages) = platform::load_average() {
            return Some(averages);
        }
        let load = System::load_average();
        let averages = [load.one, load.five, load.fifteen];
        averages
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
            .then_some(averages)
    }

    fn core_count(&self) -> usize {
        self.sys.cpus().len().max(1)
    }
}
