// src/readers/summary.rs

//! Implements `FilterSummary` statistics tracking struct.

use crate::common::Count;
use crate::data::datetime::{DateTimeL, DateTimeLOpt};

use std::fmt;

use ::more_asserts::debug_assert_ge;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FilterSummary
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Accumulated statistics about one run of a [`LineFilter`].
///
/// For CLI option `--summary`.
///
/// [`LineFilter`]: crate::readers::linefilter::LineFilter
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterSummary {
    /// `Count` of lines read from input
    pub lines_read: Count,
    /// `Count` of bytes read from input, including line terminators
    pub bytes_read: Count,
    /// `Count` of lines written to output
    pub lines_emitted: Count,
    /// `Count` of lines with a datetime outside the window
    pub lines_outside: Count,
    /// `Count` of lines where no datetime could be parsed
    pub lines_parse_failed: Count,
    /// earliest datetime parsed from any line
    pub dt_first: DateTimeLOpt,
    /// latest datetime parsed from any line
    pub dt_last: DateTimeLOpt,
    /// The input read [`Error`] that stopped the run, if any, as a `String`.
    ///
    /// [`Error`]: std::io::Error
    pub read_error: Option<String>,
    /// The output write [`Error`] that stopped the run, if any, as a `String`.
    ///
    /// [`Error`]: std::io::Error
    pub write_error: Option<String>,
}

impl FilterSummary {
    /// Lines are emitted, outside the window, or failed to parse.
    /// A write error may stop the run after a line was read but before it
    /// was written.
    pub fn debug_check(&self) {
        debug_assert_ge!(
            self.lines_read,
            self.lines_emitted + self.lines_outside + self.lines_parse_failed,
            "more lines processed than read"
        );
        if self.write_error.is_none() {
            debug_assert_eq!(
                self.lines_read,
                self.lines_emitted + self.lines_outside + self.lines_parse_failed,
                "lines read does not match lines processed"
            );
        }
    }

    /// Update `dt_first` and `dt_last` with a newly parsed datetime.
    pub fn track_datetime(
        &mut self,
        dt: &DateTimeL,
    ) {
        match self.dt_first {
            Some(dt_first) if &dt_first <= dt => {}
            _ => self.dt_first = Some(*dt),
        }
        match self.dt_last {
            Some(dt_last) if &dt_last >= dt => {}
            _ => self.dt_last = Some(*dt),
        }
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines read {}, bytes read {}, lines emitted {}, lines outside window {}, lines failed to parse {}",
            self.lines_read,
            self.bytes_read,
            self.lines_emitted,
            self.lines_outside,
            self.lines_parse_failed,
        )
    }
}
