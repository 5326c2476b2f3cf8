use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    /// Out-of-range interval, display mode or averages count.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("CPU counters unavailable: {0}")]
    SamplingUnavailable(String),

    #[error("memory counters unavailable: {0}")]
    MemoryUnavailable(String),
}
