//! Command implementations behind the `pgraph` binary.

pub mod commands;
