//! Report output.
//!
//! This module handles:
//! - Colored console output and progress bars
//! - JSON output formatting

pub mod console;

pub use console::ConsoleOutput;
