// src/tests/mod.rs

//! Tests for _dflib_.
//!
//! Tests are placed at `src/tests/`, inside the `dflib`. The author concluded
//! this is a reasonable trade-off of separation and access.
//!
//! Tests placed at top-level path `tests/` do not have crate-internal
//! visibility.

pub mod common;
pub mod window_tests;
