use crate::error::{Result, StatsError};
use crate::system::load::LoadAverages;
use crate::system::snapshot::MemoryStatus;
use crate::units::{MemoryUnit, UnitConverter};

/// Memory segment layout, selected by `--mem-mode`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemoryMode {
    /// `0`: used/total in whole megabytes, e.g. `11156/16003MB`.
    UsedTotal,
    /// `1`: free memory in GB, or MB below one gigabyte.
    #[default]
    FreeMemory,
    /// `2`: used share of total, e.g. `50.00%`.
    UsagePercentage,
}

impl MemoryMode {
    pub fn from_index(index: i64) -> Result<Self> {
        match index {
            0 => Ok(MemoryMode::UsedTotal),
            1 => Ok(MemoryMode::FreeMemory),
            2 => Ok(MemoryMode::UsagePercentage),
            i if i < 0 => Err(StatsError::InvalidArgument(
                "Memory mode argument must be zero or greater.".to_string(),
            )),
            _ => Err(StatsError::InvalidArgument(
                "Valid mem-mode arguments are: 0, 1, 2".to_string(),
            )),
        }
    }
}

/// CPU segment scale, selected by `--cpu-mode`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CpuMode {
    /// `0`: whole host, tops out at 100.
    #[default]
    Total,
    /// `1`: scaled by core count, tops out at 100 per core.
    PerCore,
}

impl CpuMode {
    pub fn from_index(index: i64) -> Result<Self> {
        match index {
            0 => Ok(CpuMode::Total),
            1 => Ok(CpuMode::PerCore),
            _ => Err(StatsError::InvalidArgument(
                "Valid cpu-mode arguments are: 0, 1".to_string(),
            )),
        }
    }

    pub fn multiplier(self, core_count: usize) -> f64 {
        match self {
            CpuMode::Total => 1.0,
            CpuMode::PerCore => core_count.max(1) as f64,
        }
    }
}

pub fn mem_string(status: &MemoryStatus, mode: MemoryMode, units: &UnitConverter) -> String {
    match mode {
        MemoryMode::UsedTotal => format!(
            "{}/{}{}",
            status.used_mem as u64,
            status.total_mem as u64,
            MemoryUnit::Megabytes.suffix()
        ),
        MemoryMode::FreeMemory => {
            let free_gb = units.convert(
                status.free_mem,
                MemoryUnit::Megabytes,
                MemoryUnit::Gigabytes,
            );
            if free_gb < 1.0 {
                format!("{:.2}{}", status.free_mem, MemoryUnit::Megabytes.suffix())
            } else {
                format!("{:.2}{}", free_gb, MemoryUnit::Gigabytes.suffix())
            }
        }
        MemoryMode::UsagePercentage => {
            let percentage = if status.total_mem > 0.0 {
                status.used_mem / status.total_mem * 100.0
            } else {
                0.0
            };
            format!("{percentage:.2}%")
        }
    }
}

/// Drops the decimal once the scaled value reaches three digits.
///
/// The threshold is checked before rounding, so `99.96` renders as `100.0`.
pub fn cpu_string(percentage: f64, multiplier: f64) -> String {
    let scaled = percentage * multiplier;
    if scaled >= 100.0 {
        format!(" {scaled:.0}")
    } else {
        format!(" {scaled:.1}")
    }
}

pub fn load_string(loads: &LoadAverages) -> String {
    loads.values().iter().map(|v| format!(" {v:.2}")).collect()
}

/// Renders memory, CPU and load segments, in that order, into one line.
#[derive(Clone, Copy, Debug)]
pub struct Formatter {
    memory_mode: MemoryMode,
    cpu_multiplier: f64,
    units: UnitConverter,
}

impl Formatter {
    pub fn new(memory_mode: MemoryMode, cpu_multiplier: f64, units: UnitConverter) -> Self {
        Formatter {
            memory_mode,
            cpu_multiplier,
            units,
        }
    }

    pub fn render(
        &self,
        memory: &MemoryStatus,
        cpu_percentage: f64,
        loads: &LoadAverages,
    ) -> String {
        let mut line = mem_string(memory, self.memory_mode, &self.units);
        line.push_str(&cpu_string(cpu_percentage, self.cpu_multiplier));
        line.push_str(&load_string(loads));
        line
    }
}
