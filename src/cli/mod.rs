//! Command orchestration, independent of argument parsing.

pub mod orchestration;
