//! Shared helpers used across service modules.

pub mod math;
