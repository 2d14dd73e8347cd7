// src/printer/mod.rs

//! The `printer` module is for writing user-facing output: passing lines,
//! per-line parse failure diagnostics, and the `--summary`.

pub mod printers;
pub mod summary;
