//! Command implementations for the FanC CLI.

pub mod check;
pub mod init;
