// src/readers/linefilter.rs

//! Implements a [`LineFilter`], the driver of filtering lines by the
//! datetime found within each line.
//!
//! Each line passes through [`LineFilter::process_line`]:
//! 1. split into fields, collapse repeated delimiters, select fields
//! 2. join the selected fields, find the datetime text with a regular
//!    expression
//! 3. parse the datetime text, compare it to the [`TimeWindow`]
//!
//! [`LineFilter::run`] drives `process_line` for every line of a
//! [`BufRead`] and writes passing lines.
//!
//! [`BufRead`]: std::io::BufRead

use crate::common::{LineNumber, ResultS3, SettingsError};
use crate::data::datetime::{
    parse_datetime,
    DateParseError,
    DateTime,
    DateTimeL,
    FixedOffset,
    Utc,
};
use crate::data::fields::{
    collapse_separators,
    compile_pattern,
    extract_date_text,
    join_fields,
    parse_positions,
    select_fields,
    split_fields,
    FieldPositions,
    Fields,
};
use crate::data::window::{process_window, Result_Filter_DateTime2, TimeWindow};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::buffer_to_String_noraw;
use crate::printer::printers::{write_line, write_parse_failure};
use crate::readers::linereader::LineReader;
use crate::readers::summary::FilterSummary;

use std::fmt;
use std::io::{BufRead, Write};

use ::regex::bytes::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Default field delimiter
pub const DELIMITER_DEFAULT: &str = " ";
/// Default 1-based field positions
pub const ELEMENTS_DEFAULT: &str = "1,2";
/// Default datetime extraction regular expression; matches everything
pub const REGEXP_DEFAULT: &str = ".+";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FilterSettings
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Immutable configuration of a [`LineFilter`]. Built once before any line
/// is read.
#[derive(Clone)]
pub struct FilterSettings {
    /// field delimiter, never empty
    pub delimiter: Vec<u8>,
    /// 1-based field positions
    pub positions: FieldPositions,
    /// datetime extraction regular expression
    pub pattern: Regex,
    /// lines with a datetime within this window pass
    pub window: TimeWindow,
    /// timezone of datetimes without a timezone
    pub tz_offset: FixedOffset,
    /// report lines where no datetime could be parsed
    pub verbose: bool,
}

impl fmt::Debug for FilterSettings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FilterSettings")
            .field("delimiter", &String::from_utf8_lossy(&self.delimiter))
            .field("positions", &self.positions)
            .field("pattern", &self.pattern.as_str())
            .field("window", &self.window)
            .field("tz_offset", &self.tz_offset)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl FilterSettings {
    /// Create a `FilterSettings` from already-processed values.
    ///
    /// Returns `Err` for an empty `delimiter`.
    pub fn new(
        delimiter: &[u8],
        positions: FieldPositions,
        pattern: Regex,
        window: TimeWindow,
        tz_offset: FixedOffset,
        verbose: bool,
    ) -> Result<FilterSettings, SettingsError> {
        if delimiter.is_empty() {
            return Err(SettingsError::EmptyDelimiter);
        }

        Ok(FilterSettings {
            delimiter: delimiter.to_vec(),
            positions,
            pattern,
            window,
            tz_offset,
            verbose,
        })
    }

    /// Create a `FilterSettings` from user-passed strings.
    ///
    /// - `delimiter` field delimiter, backslash escapes already processed
    /// - `elements` comma-separated 1-based field positions, e.g. `"1,2"`
    /// - `regexp` datetime extraction regular expression
    /// - `after`, `before` the window bounds, see [`process_window`]
    /// - `tz_offset` timezone of datetimes without a timezone
    /// - `now_utc` the program start time
    ///
    /// Any `Err` is a fatal configuration error.
    #[allow(clippy::too_many_arguments)]
    pub fn from_strs(
        delimiter: &str,
        elements: &str,
        regexp: &str,
        after: Option<&str>,
        before: Option<&str>,
        tz_offset: FixedOffset,
        verbose: bool,
        now_utc: &DateTime<Utc>,
    ) -> Result<FilterSettings, SettingsError> {
        defn!("({:?}, {:?}, {:?}, {:?}, {:?}, {:?}, {:?})", delimiter, elements, regexp, after, before, tz_offset, verbose);
        let pattern: Regex = compile_pattern(regexp)?;
        let positions: FieldPositions = parse_positions(elements)?;
        let window: TimeWindow = process_window(after, before, &tz_offset, now_utc)?;
        let settings = FilterSettings::new(
            delimiter.as_bytes(),
            positions,
            pattern,
            window,
            tz_offset,
            verbose,
        )?;
        defx!("return {:?}", settings);

        Ok(settings)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LineFilter
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Outcome of [`LineFilter::process_line`] for one line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LineResult {
    /// the line datetime is within the window; emit the line
    Pass(DateTimeL),
    /// the line datetime is outside the window; drop the line
    OutsideWindow(DateTimeL, Result_Filter_DateTime2),
    /// no datetime could be parsed; drop the line
    ParseFailed(DateParseError),
}

impl LineResult {
    #[inline(always)]
    pub const fn is_pass(&self) -> bool {
        matches!(*self, LineResult::Pass(_))
    }
}

/// Filters lines by the datetime within each line.
///
/// _XXX: not a rust "Reader"; does not implement trait [`Read`]._
///
/// [`Read`]: std::io::Read
#[derive(Debug)]
pub struct LineFilter {
    settings: FilterSettings,
}

impl LineFilter {
    pub fn new(settings: FilterSettings) -> LineFilter {
        LineFilter { settings }
    }

    pub const fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    /// The selected fields of `line` joined with the delimiter.
    pub fn joined_fields(
        &self,
        line: &[u8],
    ) -> Vec<u8> {
        let delimiter: &[u8] = self.settings.delimiter.as_slice();
        let fields: Fields = split_fields(line, delimiter);
        let fields: Fields = collapse_separators(&fields);
        let selected: Fields = select_fields(&fields, &self.settings.positions);

        join_fields(&selected, delimiter)
    }

    /// Find the datetime text within `joined`, from
    /// [`joined_fields`](LineFilter::joined_fields). May be empty.
    pub fn date_text<'a>(
        &self,
        joined: &'a [u8],
    ) -> &'a [u8] {
        extract_date_text(joined, &self.settings.pattern)
    }

    /// Evaluate one line without its line terminator.
    pub fn process_line(
        &self,
        line: &[u8],
    ) -> LineResult {
        defn!("({:?})", buffer_to_String_noraw(line));
        let joined: Vec<u8> = self.joined_fields(line);
        let text: &[u8] = self.date_text(joined.as_slice());
        let dt: DateTimeL = match parse_datetime(text, &self.settings.tz_offset) {
            Ok(dt) => dt,
            Err(err) => {
                defx!("return ParseFailed({})", err);
                return LineResult::ParseFailed(err);
            }
        };
        let result: LineResult = match self.settings.window.compare(&dt) {
            Result_Filter_DateTime2::InRange => LineResult::Pass(dt),
            result_filter => LineResult::OutsideWindow(dt, result_filter),
        };
        defx!("return {:?}", result);

        result
    }

    /// Filter every line of `reader`. Passing lines are written to `writer`
    /// followed by a newline. When `verbose` then lines where no datetime
    /// could be parsed are reported to `diagnostics` as
    /// `#<line number>: <reason>`.
    ///
    /// The run ends at the end of input, at an input read error, or at an
    /// output write error. Read and write errors are recorded in the
    /// returned [`FilterSummary`].
    pub fn run<R, W, D>(
        &self,
        reader: R,
        writer: &mut W,
        diagnostics: &mut D,
    ) -> FilterSummary
    where
        R: BufRead,
        W: Write,
        D: Write,
    {
        defn!();
        let mut summary = FilterSummary::default();
        let mut linereader = LineReader::new(reader);
        let mut line_number: LineNumber = 0;
        loop {
            let line: &[u8] = match linereader.next_line() {
                ResultS3::Found(line) => line,
                ResultS3::Done => break,
                ResultS3::Err(err) => {
                    defo!("read error {}", err);
                    summary.read_error = Some(err.to_string());
                    break;
                }
            };
            line_number += 1;
            match self.process_line(line) {
                LineResult::Pass(dt) => {
                    summary.track_datetime(&dt);
                    if let Err(err) = write_line(writer, line) {
                        defo!("write error {}", err);
                        summary.write_error = Some(err.to_string());
                        break;
                    }
                    summary.lines_emitted += 1;
                }
                LineResult::OutsideWindow(dt, _result_filter) => {
                    summary.track_datetime(&dt);
                    summary.lines_outside += 1;
                }
                LineResult::ParseFailed(err) => {
                    summary.lines_parse_failed += 1;
                    if self.settings.verbose {
                        // diagnostics are best-effort
                        let _ = write_parse_failure(diagnostics, line_number, &err);
                    }
                }
            }
        }
        if summary.write_error.is_none() {
            if let Err(err) = writer.flush() {
                summary.write_error = Some(err.to_string());
            }
        }
        let _ = diagnostics.flush();
        summary.lines_read = linereader.count_lines_processed();
        summary.bytes_read = linereader.count_bytes_processed();
        summary.debug_check();
        defx!("return {:?}", summary);

        summary
    }
}
