//! Reporting utilities: plain-text tables for terminal output.

pub mod format;

pub use format::*;
