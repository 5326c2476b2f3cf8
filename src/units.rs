/// Conversion factor between adjacent memory units.
pub const DEFAULT_UNIT_FACTOR: f64 = 1024.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MemoryUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl MemoryUnit {
    fn rank(self) -> i32 {
        match self {
            MemoryUnit::Bytes => 0,
            MemoryUnit::Kilobytes => 1,
            MemoryUnit::Megabytes => 2,
            MemoryUnit::Gigabytes => 3,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            MemoryUnit::Bytes => "B",
            MemoryUnit::Kilobytes => "KB",
            MemoryUnit::Megabytes => "MB",
            MemoryUnit::Gigabytes => "GB",
        }
    }
}

/// Linear conversion between memory units sharing one multiplicative factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitConverter {
    factor: f64,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new(DEFAULT_UNIT_FACTOR)
    }
}

impl UnitConverter {
    pub fn new(factor: f64) -> Self {
        UnitConverter { factor }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Negative values pass through unvalidated.
    pub fn convert(&self, value: f64, from: MemoryUnit, to: MemoryUnit) -> f64 {
        let steps = from.rank() - to.rank();
        value * self.factor.powi(steps)
    }

    pub fn bytes_to_megabytes(&self, bytes: u64) -> f64 {
        self.convert(bytes as f64, MemoryUnit::Bytes, MemoryUnit::Megabytes)
    }
}
