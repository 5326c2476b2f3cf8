use crate::units::UnitConverter;

/// Raw memory counters as reported by the host, in bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryBytes {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// Memory usage in megabytes. Built once per invocation and never mutated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemoryStatus {
    pub total_mem: f64,
    pub used_mem: f64,
    pub free_mem: f64,
}

impl MemoryStatus {
    pub fn from_bytes(bytes: MemoryBytes, units: &UnitConverter) -> Self {
        MemoryStatus {
            total_mem: units.bytes_to_megabytes(bytes.total),
            used_mem: units.bytes_to_megabytes(bytes.used),
            free_mem: units.bytes_to_megabytes(bytes.free),
        }
    }
}

/// Cumulative busy and idle CPU counters at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub busy_ticks: u64,
    pub idle_ticks: u64,
}

impl CpuSnapshot {
    pub fn new(busy_ticks: u64, idle_ticks: u64) -> Self {
        CpuSnapshot {
            busy_ticks,
            idle_ticks,
        }
    }

    /// Busy share of the ticks elapsed since `earlier`, as a percentage.
    ///
    /// Counters that went backwards contribute nothing. An interval with no
    /// elapsed ticks reads as idle.
    pub fn busy_percentage_since(&self, earlier: &CpuSnapshot) -> f64 {
        let busy = self.busy_ticks.saturating_sub(earlier.busy_ticks);
        let idle = self.idle_ticks.saturating_sub(earlier.idle_ticks);
        let total = busy.saturating_add(idle);
        if total == 0 {
            return 0.0;
        }
        busy as f64 / total as f64 * 100.0
    }
}
