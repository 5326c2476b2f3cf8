use super::snapshot::{MemoryBytes, MemoryStatus};
use crate::error::{Result, StatsError};
use crate::units::UnitConverter;

pub trait MemoryCounterSource {
    fn memory_bytes(&mut self) -> Result<MemoryBytes>;
}

impl<T: MemoryCounterSource + ?Sized> MemoryCounterSource for &mut T {
    fn memory_bytes(&mut self) -> Result<MemoryBytes> {
        (**self).memory_bytes()
    }
}

pub struct MemoryReader<S> {
    source: S,
    units: UnitConverter,
}

impl<S: MemoryCounterSource> MemoryReader<S> {
    pub fn new(source: S, units: UnitConverter) -> Self {
        MemoryReader { source, units }
    }

    /// Single query of the host counters, converted to megabytes.
    ///
    /// A host reporting no memory at all is treated as a failed query rather
    /// than rendered as `0/0MB`.
    pub fn read(&mut self) -> Result<MemoryStatus> {
        let _span = tracing::debug_span!("memory.read").entered();

        let bytes = self.source.memory_bytes()?;
        if bytes.total == 0 {
            return Err(StatsError::MemoryUnavailable(
                "host reported zero total memory".to_string(),
            ));
        }

        let status = MemoryStatus::from_bytes(bytes, &self.units);
        tracing::debug!(
            total_mb = status.total_mem,
            used_mb = status.used_mem,
            free_mb = status.free_mem,
            "memory read complete"
        );
        Ok(status)
    }
}
