use super::load::MAX_AVERAGES;
use super::snapshot::CpuSnapshot;

/// Raw counters read directly from the OS, where the OS exposes them.
///
/// `None` means the platform has no direct reading and the caller should use
/// its portable fallback.
pub trait PlatformCounters {
    fn cpu_ticks() -> Option<CpuSnapshot>;
    fn load_average() -> Option<[f64; MAX_AVERAGES]>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(not(target_os = "linux"))]
mod portable;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(not(target_os = "linux"))]
use portable as platform_impl;

pub fn cpu_ticks() -> Option<CpuSnapshot> {
    platform_impl::Platform::cpu_ticks()
}

pub fn load_average() -> Option<[f64; MAX_AVERAGES]> {
    platform_impl::Platform::load_average()
}
