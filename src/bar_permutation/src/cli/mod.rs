//! Command-line adapter: argument parsing and JSON passthrough of bars.

pub mod args;
pub mod io;
