//! Utility functions and helpers.
//!
//! This module contains helpers used throughout the application, such as
//! byte-size conversions.

pub mod size;

pub use size::{BYTES_PER_KB, BYTES_PER_MB, kilobytes, megabytes};
