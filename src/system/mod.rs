pub mod collector;
pub mod cpu;
pub mod load;
pub mod memory;
pub mod platform;
pub mod snapshot;
