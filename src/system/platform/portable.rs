use super::{MAX_AVERAGES, PlatformCounters};
use crate::system::snapshot::CpuSnapshot;

pub struct Platform;

impl PlatformCounters for Platform {
    fn cpu_ticks() -> Option<CpuSnapshot> {
        None
    }

    fn load_average() -> Option<[f64; MAX_AVERAGES]> {
        None
    }
}
