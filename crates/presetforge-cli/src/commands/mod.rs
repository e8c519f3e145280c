//! CLI command implementations

pub mod bank;
pub mod clean;
pub mod generate;
pub mod styles;
