//! The tools module provides helper functions for huffpack.
//!
//! The tools are:
//! - cli: Command line interface and the options it produces.
//! - freq_count: Byte frequency count in first-occurrence order.
//!
pub mod cli;
pub mod freq_count;
