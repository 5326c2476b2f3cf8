use super::{MAX_AVERAGES, PlatformCounters};
use crate::system::snapshot::CpuSnapshot;

pub struct Platform;

impl PlatformCounters for Platform {
    fn cpu_ticks() -> Option<CpuSnapshot> {
        let contents = std::fs::read_to_string("/proc/stat").ok()?;
        parse_proc_stat(&contents)
    }

    fn load_average() -> Option<[f64; MAX_AVERAGES]> {
        let contents = std::fs::read_to_string("/proc/loadavg").ok()?;
        parse_loadavg(&contents)
    }
}

/// Aggregate `cpu` line of /proc/stat:
/// user nice system idle iowait irq softirq steal guest guest_nice.
/// Guest time is already counted in user and nice.
fn parse_proc_stat(contents: &str) -> Option<CpuSnapshot> {
    let line = contents.lines().find(|l| l.starts_with("cpu "))?;
    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|f| f.parse().ok())
        .collect::<Option<_>>()?;
    if fields.len() < 4 {
        return None;
    }
    let field = |i: usize| fields.get(i).copied().unwrap_or(0);

    let busy = field(0) + field(1) + field(2) + field(5) + field(6) + field(7);
    let idle = field(3) + field(4);
    Some(CpuSnapshot::new(busy, idle))
}

/// First three fields of /proc/loadavg, e.g. `0.52 0.58 0.59 1/467 12345`.
fn parse_loadavg(contents: &str) -> Option<[f64; MAX_AVERAGES]> {
    let mut fields = contents.split_whitespace();
    let mut averages = [0.0; MAX_AVERAGES];
    for slot in &mut averages {
        let value: f64 = fields.next()?.parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        *slot = value;
    }
    Some(averages)
}
