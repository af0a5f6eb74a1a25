//! Operation counting and benchmark result export

pub mod counter;
pub mod csv;
