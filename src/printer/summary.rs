// src/printer/summary.rs

//! CLI option `--summary` printing functions.
//! Only used by `date_filter.rs`.

use crate::readers::linefilter::FilterSettings;
use crate::readers::summary::FilterSummary;

use std::io::{Result, Write};

use ::si_trace_print::defñ;

/// Summary `--summary` indentation
const OPT_SUMMARY_PRINT_INDENT1: &str = "  ";

/// Write the `--summary` of one run to `writer`.
pub fn print_summary<W: Write>(
    writer: &mut W,
    summary: &FilterSummary,
    settings: &FilterSettings,
) -> Result<()> {
    defñ!("({:?})", summary);
    let indent: &str = OPT_SUMMARY_PRINT_INDENT1;
    writeln!(writer, "Summary:")?;
    writeln!(writer, "{}delimiter         : {:?}", indent, String::from_utf8_lossy(&settings.delimiter))?;
    writeln!(writer, "{}elements          : {:?}", indent, settings.positions)?;
    writeln!(writer, "{}regexp            : {:?}", indent, settings.pattern.as_str())?;
    writeln!(writer, "{}after             : {}", indent, settings.window.after)?;
    writeln!(writer, "{}before            : {}", indent, settings.window.before)?;
    writeln!(writer, "{}tz offset         : {}", indent, settings.tz_offset)?;
    writeln!(writer, "{}lines read        : {}", indent, summary.lines_read)?;
    writeln!(writer, "{}bytes read        : {}", indent, summary.bytes_read)?;
    writeln!(writer, "{}lines emitted     : {}", indent, summary.lines_emitted)?;
    writeln!(writer, "{}lines outside     : {}", indent, summary.lines_outside)?;
    writeln!(writer, "{}lines parse failed: {}", indent, summary.lines_parse_failed)?;
    match (summary.dt_first, summary.dt_last) {
        (Some(dt_first), Some(dt_last)) => {
            writeln!(writer, "{}datetime first    : {}", indent, dt_first)?;
            writeln!(writer, "{}datetime last     : {}", indent, dt_last)?;
        }
        _ => {
            writeln!(writer, "{}datetime first    : None", indent)?;
            writeln!(writer, "{}datetime last     : None", indent)?;
        }
    }
    if let Some(err) = &summary.read_error {
        writeln!(writer, "{}read error        : {}", indent, err)?;
    }
    if let Some(err) = &summary.write_error {
        writeln!(writer, "{}write error       : {}", indent, err)?;
    }

    Ok(())
}
