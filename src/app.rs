use std::time::Duration;

use crate::config::Settings;
use crate::error::Result;
use crate::format::Formatter;
use crate::system::cpu::{CpuCounterSource, CpuSampler};
use crate::system::load::{LoadAverageReader, LoadAverageSource};
use crate::system::memory::{MemoryCounterSource, MemoryReader};

/// One full sample-and-render cycle: memory, then the CPU sample (which
/// blocks for `settings.cpu_delay` via `sleep`), then load averages.
pub fn render_status_line<S>(
    settings: &Settings,
    source: &mut S,
    sleep: fn(Duration),
) -> Result<String>
where
    S: CpuCounterSource + MemoryCounterSource + LoadAverageSource,
{
    let memory = MemoryReader::new(&mut *source, settings.units).read()?;
    let cpu_percentage = CpuSampler::new(&mut *source)
        .with_sleep(sleep)
        .percentage(settings.cpu_delay)?;
    let loads = LoadAverageReader::new(&mut *source).read(settings.averages_count);

    let multiplier = settings.cpu_mode.multiplier(source.core_count());
    let formatter = Formatter::new(settings.memory_mode, multiplier, settings.units);
    let line = formatter.render(&memory, cpu_percentage, &loads);
    tracing::debug!(%line, "status line rendered");
    Ok(line)
}
