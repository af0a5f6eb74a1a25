//! Algorithm core

pub mod vote;
