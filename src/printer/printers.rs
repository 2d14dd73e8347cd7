// src/printer/printers.rs

//! Helper functions for writing passing lines and per-line diagnostics.
//!
//! Byte-oriented printing (no `char`s).

use crate::common::{LineNumber, NLu8a};
use crate::data::datetime::DateParseError;
use crate::debug::printers::de_err;

use std::io::{Result, Write};

/// Write the `line` then a newline to `writer`.
///
/// Lines are written as-is; no UTF-8 interpretation is done.
#[inline(always)]
pub fn write_line<W: Write>(
    writer: &mut W,
    line: &[u8],
) -> Result<()> {
    writer.write_all(line)?;
    writer.write_all(&NLu8a)
}

/// Write a per-line parse failure diagnostic `#<line_number>: <reason>`
/// then a newline to `writer`.
pub fn write_parse_failure<W: Write>(
    writer: &mut W,
    line_number: LineNumber,
    err: &DateParseError,
) -> Result<()> {
    match writeln!(writer, "#{}: {}", line_number, err) {
        Ok(_) => Ok(()),
        Err(err_) => {
            // XXX: this will print when this program stderr is truncated
            de_err!("writeln!(#{}) error {}", line_number, err_);

            Err(err_)
        }
    }
}
