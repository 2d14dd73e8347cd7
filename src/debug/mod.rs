// src/debug/mod.rs

//! The `debug` module is printer macros for stderr and functions for
//! printing in debug builds and test builds.

pub mod printers;
