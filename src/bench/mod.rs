//! Benchmark harness - input generation, drivers, and rendering

pub mod gen;
pub mod render;
pub mod run;
