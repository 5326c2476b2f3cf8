use crate::error::{Result, StatsError};

pub const MAX_AVERAGES: usize = 3;

pub trait LoadAverageSource {
    /// The 1, 5 and 15 minute averages, or `None` when the host query fails.
    fn load_average(&mut self) -> Option<[f64; MAX_AVERAGES]>;

    fn core_count(&self) -> usize;
}

impl<T: LoadAverageSource + ?Sized> LoadAverageSource for &mut T {
    fn load_average(&mut self) -> Option<[f64; MAX_AVERAGES]> {
        (**self).load_average()
    }

    fn core_count(&self) -> usize {
        (**self).core_count()
    }
}

/// How many load averages to display, always within `0..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AveragesCount(usize);

impl AveragesCount {
    pub fn new(count: i64) -> Result<Self> {
        match usize::try_from(count) {
            Ok(n) if n <= MAX_AVERAGES => Ok(AveragesCount(n)),
            _ => Err(StatsError::InvalidArgument(
                "Valid averages-count arguments are: 0, 1, 2, 3".to_string(),
            )),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for AveragesCount {
    fn default() -> Self {
        AveragesCount(MAX_AVERAGES)
    }
}

/// Load averages rounded to two decimals, in 1/5/15 minute order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadAverages {
    values: Vec<f64>,
}

impl LoadAverages {
    pub fn empty() -> Self {
        LoadAverages { values: Vec::new() }
    }

    /// Placeholder shown when the host cannot report load.
    pub fn unavailable() -> Self {
        LoadAverages {
            values: vec![0.0; MAX_AVERAGES],
        }
    }

    pub fn from_raw(raw: &[f64]) -> Self {
        LoadAverages {
            values: raw.iter().take(MAX_AVERAGES).map(|&v| round_2(v)).collect(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First average relative to half the core count, truncated and capped at 100.
    pub fn load_percent(&self, core_count: usize) -> u32 {
        let Some(&first) = self.values.first() else {
            return 0;
        };
        let cores = core_count.max(1) as f64;
        let percent = (first / cores * 0.5 * 100.0) as u32;
        percent.min(100)
    }
}

/// Round to two decimals, halves away from zero.
///
/// Operates on the binary value, so a literal such as `1.005` (stored as
/// 1.00499...) rounds down to `1.0`.
pub fn round_2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub struct LoadAverageReader<S> {
    source: S,
}

impl<S: LoadAverageSource> LoadAverageReader<S> {
    pub fn new(source: S) -> Self {
        LoadAverageReader { source }
    }

    /// Never fails: a host query failure yields three zeros whatever `count` is.
    pub fn read(&mut self, count: AveragesCount) -> LoadAverages {
        let _span = tracing::debug_span!("load.read", count = count.get()).entered();

        if count.get() == 0 {
            return LoadAverages::empty();
        }

        match self.source.load_average() {
            Some(raw) => {
                let loads = LoadAverages::from_raw(&raw[..count.get()]);
                tracing::debug!(
                    values = ?loads.values(),
                    load_percent = loads.load_percent(self.source.core_count()),
                    "load read complete"
                );
                loads
            }
            None => {
                tracing::warn!("load averages unavailable, showing zeros");
                LoadAverages::unavailable()
            }
        }
    }
}
