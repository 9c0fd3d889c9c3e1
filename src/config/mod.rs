//! Configuration and constants
//!
//! Process-wide values that never change after startup.

pub mod defaults;
pub mod urls;
