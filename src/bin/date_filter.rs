// src/bin/date_filter.rs
//
// … ≤ ≥ ≠

//! Driver program _date-filter_ drives the [_dflib_].
//!
//! Processes user-passed command-line arguments into a [`FilterSettings`].
//! Then reads lines from STDIN with a [`LineFilter`]. Lines with a datetime
//! within the window are printed to STDOUT.
//!
//! Configuration errors are printed to STDERR and exit with code `1` before
//! any input is read. Lines without a parseable datetime are skipped; they
//! are reported to STDERR when passed `--verbose`.
//!
//! If passed CLI option `--summary`, a [`FilterSummary`] is printed to
//! STDERR at the end.
//!
//! [_dflib_]: dflib
//! [`FilterSettings`]: dflib::readers::linefilter::FilterSettings
//! [`LineFilter`]: dflib::readers::linefilter::LineFilter
//! [`FilterSummary`]: dflib::readers::summary::FilterSummary

#![allow(non_camel_case_types)]

use std::io::{BufWriter, Write};
use std::process::ExitCode;
use std::thread_local;

use ::anyhow::Context;
use ::chrono::{DateTime, FixedOffset, Utc};
use ::clap::Parser;
use ::const_format::concatcp;
use ::dflib::common::SettingsError;
use ::dflib::data::datetime::{datetime_parse_from_str_w_tz, local_offset, MAP_TZZ_TO_TZz};
use ::dflib::debug::printers::{e_err, e_wrn};
use ::dflib::printer::summary::print_summary;
use ::dflib::readers::linefilter::{
    FilterSettings,
    LineFilter,
    DELIMITER_DEFAULT,
    ELEMENTS_DEFAULT,
    REGEXP_DEFAULT,
};
use ::dflib::readers::summary::FilterSummary;
#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
    stack::stack_offset_set,
};

// --------------------
// command-line parsing

/// general error exit value
const EXIT_ERR: u8 = 1;

thread_local! {
    /// program start time; for user-passed relative offsets from now and
    /// for the default `--before`.
    static UTC_NOW: DateTime<Utc> = {
        defo!("thread_local! UTC_NOW::new()");

        Utc::now()
    };
    static LOCAL_NOW_OFFSET: FixedOffset = {
        defo!("thread_local! LOCAL_NOW_OFFSET::new()");

        UTC_NOW.with(local_offset)
    };
}

#[cfg(debug_assertions)]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "\nDEBUG BUILD";
#[cfg(not(debug_assertions))]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "";

/// `--help` _afterword_ message.
const CLI_HELP_AFTER: &str = concatcp!(
    r#"Each line of STDIN is split into fields by DELIMITER. Repeated
DELIMITERs count as one empty field. The fields at the 1-based positions
ELEMENTS are joined by DELIMITER. The first match of REGEXP within the joined
fields is parsed as a datetime. Lines with a datetime after AFTER and before
BEFORE are printed. Lines with a datetime equal to AFTER or BEFORE are not
printed.

The default REGEXP ".+" matches all of the joined fields. Meaningful filtering
usually requires both --elements and --regexp.

Datetimes of lines and of --after and --before may be:
    RFC 3339, e.g. "2006-01-02T15:04:05Z" or "2006-01-02T15:04:05.123-07:00"
    RFC 2822, e.g. "Mon, 02 Jan 2006 15:04:05 -0700"
    "2006-01-02 15:04:05", "2006-01-02 15:04", "2006-01-02"
    "2006/01/02 15:04:05", "01/02/2006 15:04:05", "02.01.2006 15:04:05"
    "Jan 2 2006 15:04:05", "2 Jan 2006 15:04", "January 2, 2006 3:04 PM"
    "Jan 2 15:04:05 2006", "Mon Jan 2 15:04:05 MST 2006", "02-Jan-2006 15:04"
    "02/Jan/2006:15:04:05 -0700"
    "20060102T150405", "20060102150405", "200601021504", "20060102"
Each clock time may have fractional seconds, e.g. "15:04:05.123" or
"15:04:05,123", and a timezone, e.g. "Z", "-07", "-0700", "-07:00", or "MST".
Ambiguous named timezones, e.g. "IST", use TZ_OFFSET.
A string of 9 or 10, 13, 16, or 19 digits is a Unix epoch timestamp in seconds,
milliseconds, microseconds, or nanoseconds. Pattern "+%s" is a Unix epoch
timestamp in seconds with a preceding "+", e.g. "+946684800".

Dates without a month-day order hint are read as month first,
e.g. "01/02/2006" is January 2.

--after and --before may also be a clock time of today, e.g. "12:05" or
"12:05:30", or a custom relative offset pattern:
    "+DwDdDhDmDs" or "-DwDdDhDmDs"
    "@+DwDdDhDmDs" or "@-DwDdDhDmDs"

Custom relative offset pattern "+DwDdDhDmDs" and "-DwDdDhDmDs" is the offset
from now (program start time) where "D" is a decimal number.
Each lowercase identifier is an offset duration:
"w" is weeks, "d" is days, "h" is hours, "m" is minutes, "s" is seconds.
For example, value "-1w22h" is one week and twenty-two hours in the past.

Custom relative offset pattern "@+DwDdDhDmDs" and "@-DwDdDhDmDs" is relative
offset from the other datetime.
Arguments "-a 20220102 -b @+1d" are equivalent to "-a 20220102 -b 20220103".
To pass a value with leading "-" use "=" notation, e.g. "-a=-1d".

--delimiter accepts backslash escape sequences:
    ""#, unescape::BACKSLASH_ESCAPE_SEQUENCES0, "\", \
 \"", unescape::BACKSLASH_ESCAPE_SEQUENCES1, "\", \
 \"", unescape::BACKSLASH_ESCAPE_SEQUENCES2, "\", \
 \"", unescape::BACKSLASH_ESCAPE_SEQUENCES3, "\", \
 \"", unescape::BACKSLASH_ESCAPE_SEQUENCES4, "\", \
 \"", unescape::BACKSLASH_ESCAPE_SEQUENCES5, "\", \
 \"", unescape::BACKSLASH_ESCAPE_SEQUENCES6, "\", \
 \"", unescape::BACKSLASH_ESCAPE_SEQUENCES7, "\", \
 \"", unescape::BACKSLASH_ESCAPE_SEQUENCES8, "\", \
  \"", unescape::BACKSLASH_ESCAPE_SEQUENCES9, r#""

Example:
    cat /var/log/pacman.log | date-filter --after="2019-09-16 17:20" \
        --before="2019-09-16 17:22" --regexp='[^\[].+[^\]]' --delimiter=" "

DateTime strftime specifiers are described at
https://docs.rs/chrono/latest/chrono/format/strftime/

---

Version: "#, env!("CARGO_PKG_VERSION"), r#"
MSRV: "#, env!("CARGO_PKG_RUST_VERSION"), r#"
License: "#, env!("CARGO_PKG_LICENSE"), r#"
"#,
    CLI_HELP_AFTER_NOTE_DEBUG,
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = "date-filter",
    version = env!("CARGO_PKG_VERSION"),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Field delimiter of each line.
    /// Accepts a basic set of backslash escape sequences,
    /// e.g. "\t" for tab.
    #[clap(
        short = 'd',
        long,
        verbatim_doc_comment,
        default_value_t = String::from(DELIMITER_DEFAULT),
    )]
    delimiter: String,

    /// Comma-separated 1-based positions of the fields that contain the
    /// datetime, e.g. "1,2". Positions beyond the fields of a line are
    /// ignored.
    #[clap(
        short = 'e',
        long,
        verbatim_doc_comment,
        default_value_t = String::from(ELEMENTS_DEFAULT),
    )]
    elements: String,

    /// Regular expression that finds the datetime within the selected
    /// fields joined by the delimiter, e.g. "[^\[].+[^\]]" for a datetime
    /// within square brackets.
    #[clap(
        short = 'r',
        long,
        verbatim_doc_comment,
        default_value_t = String::from(REGEXP_DEFAULT),
    )]
    regexp: String,

    /// DateTime Filter Before: print lines with a datetime that is before
    /// this datetime. For example, "2019-09-16 17:22" or "@+1d".
    /// If not passed then now.
    #[clap(
        short = 'b',
        long,
        verbatim_doc_comment,
    )]
    before: Option<String>,

    /// DateTime Filter After: print lines with a datetime that is after
    /// this datetime. For example, "2019-09-16 17:20" or "-5d".
    /// If not passed then the earliest datetime.
    #[clap(
        short = 'a',
        long,
        verbatim_doc_comment,
    )]
    after: Option<String>,

    /// Default timezone offset for datetimes without a timezone.
    /// Example values, "+12", "-0800", "+02:00", or "EDT".
    /// To pass a value with leading "-" use "=" notation, e.g. "-t=-0800".
    /// If not passed then the local system timezone offset is used.
    #[clap(
        short = 't',
        long,
        verbatim_doc_comment,
        value_parser = cli_process_tz_offset,
        default_value_t = LOCAL_NOW_OFFSET.with(|lno| *lno),
    )]
    tz_offset: FixedOffset,

    /// Print each line number where no datetime could be parsed to
    /// stderr.
    #[clap(
        short,
        long,
        verbatim_doc_comment,
    )]
    verbose: bool,

    /// Print a summary of lines processed to stderr.
    #[clap(
        short,
        long,
        verbatim_doc_comment,
    )]
    summary: bool,
}

/// CLI argument processing
fn cli_process_tz_offset(tzo: &str) -> std::result::Result<FixedOffset, String> {
    defn!("({:?})", tzo);
    let tzo_ = match MAP_TZZ_TO_TZz.get(tzo) {
        Some(tz_offset) => {
            match tz_offset.is_empty() {
                // an empty value signifies an ambiguous named timezone
                true => {
                    defx!("ambiguous {:?}", tzo);
                    return Err(format!(
                        "Given ambiguous timezone {:?} (this timezone abbreviation refers to several timezone offsets)",
                        tzo
                    ));
                }
                // unambiguous named timezone passed
                false => tz_offset,
            }
        }
        // no entry found, `tzo` is probably a numeric timezone offset,
        // e.g. `+01:00`
        None => tzo,
    };
    // transform the timezone string to a `FixedOffset` instance
    // using a dummy `DateTimeL`
    let mut data: String = String::from("2000-01-02 03:04:05 ");
    data.push_str(tzo_);
    for pattern in [
        "%Y-%m-%d %H:%M:%S %:z",
        "%Y-%m-%d %H:%M:%S %z",
        "%Y-%m-%d %H:%M:%S %#z",
    ] {
        let dt = datetime_parse_from_str_w_tz(data.as_str(), pattern);
        defo!("datetime_parse_from_str_w_tz({:?}, {:?}) returned {:?}", data, pattern, dt);
        if let Some(dt_) = dt {
            defx!("return {:?}", dt_.offset());
            return Ok(*dt_.offset());
        }
    }
    defx!("return Err");

    Err(SettingsError::TzOffset(String::from(tzo)).to_string())
}

mod unescape {
    // this mod ripped from https://stackoverflow.com/a/58555097/471376

    #[derive(Debug, PartialEq)]
    pub(super) enum EscapeError {
        EscapeAtEndOfString,
        InvalidEscapedChar(char),
    }

    impl std::fmt::Display for EscapeError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                EscapeError::EscapeAtEndOfString => write!(f, "backslash at end of string"),
                EscapeError::InvalidEscapedChar(c) => write!(f, "unknown escape sequence \"\\{}\"", c),
            }
        }
    }

    struct InterpretEscapedString<'a> {
        s: std::str::Chars<'a>,
    }

    impl Iterator for InterpretEscapedString<'_> {
        type Item = Result<char, EscapeError>;

        fn next(&mut self) -> Option<Self::Item> {
            self.s.next().map(
                |c| match c {
                    '\\' => match self.s.next() {
                        None => Err(EscapeError::EscapeAtEndOfString),
                        Some('0') => Ok('\0'), // null
                        Some('a') => Ok('\u{07}'), // alert
                        Some('b') => Ok('\u{08}'), // backspace
                        Some('e') => Ok('\u{1B}'), // escape
                        Some('f') => Ok('\u{0C}'), // form feed
                        Some('n') => Ok('\n'), // newline
                        Some('r') => Ok('\r'), // carriage return
                        Some('\\') => Ok('\\'), // backslash
                        Some('t') => Ok('\t'), // horizontal tab
                        Some('v') => Ok('\u{0B}'), // vertical tab
                        Some(c) => Err(EscapeError::InvalidEscapedChar(c)),
                    },
                    c => Ok(c),
                }
            )
        }
    }

    // XXX: these must agree with match statement in prior
    //      `Iterator for InterpretEscapedString`
    pub(super) const BACKSLASH_ESCAPE_SEQUENCES0: &str = r"\0";
    pub(super) const BACKSLASH_ESCAPE_SEQUENCES1: &str = r"\a";
    pub(super) const BACKSLASH_ESCAPE_SEQUENCES2: &str = r"\b";
    pub(super) const BACKSLASH_ESCAPE_SEQUENCES3: &str = r"\e";
    pub(super) const BACKSLASH_ESCAPE_SEQUENCES4: &str = r"\f";
    pub(super) const BACKSLASH_ESCAPE_SEQUENCES5: &str = r"\n";
    pub(super) const BACKSLASH_ESCAPE_SEQUENCES6: &str = r"\r";
    pub(super) const BACKSLASH_ESCAPE_SEQUENCES7: &str = r"\\";
    pub(super) const BACKSLASH_ESCAPE_SEQUENCES8: &str = r"\t";
    pub(super) const BACKSLASH_ESCAPE_SEQUENCES9: &str = r"\v";

    pub(super) fn unescape_str(s: &str) -> Result<String, EscapeError> {
        (InterpretEscapedString { s: s.chars() }).collect()
    }
}

/// Processed command-line arguments.
#[derive(Debug)]
struct CLI_Settings {
    filter_settings: FilterSettings,
    summary: bool,
}

/// Process user-passed CLI argument strings into expected types.
///
/// Any `Err` is a fatal configuration error.
fn cli_process_args(
    args: CLI_Args,
    now_utc: &DateTime<Utc>,
) -> anyhow::Result<CLI_Settings> {
    defn!("({:?}, {:?})", args, now_utc);

    let delimiter: String = unescape::unescape_str(args.delimiter.as_str())
        .map_err(|err| SettingsError::Escape(err.to_string()))?;
    defo!("delimiter {:?}", delimiter);

    let filter_settings = FilterSettings::from_strs(
        delimiter.as_str(),
        args.elements.as_str(),
        args.regexp.as_str(),
        args.after.as_deref(),
        args.before.as_deref(),
        args.tz_offset,
        args.verbose,
        now_utc,
    )?;

    if filter_settings.window.is_empty() {
        e_wrn!(
            "--after {} is not before --before {}; no lines will be printed",
            filter_settings.window.after,
            filter_settings.window.before,
        );
    }
    let cli_settings = CLI_Settings {
        filter_settings,
        summary: args.summary,
    };
    defx!("return {:?}", cli_settings);

    Ok(cli_settings)
}

/// Filter STDIN to STDOUT.
fn run(cli_settings: CLI_Settings) -> anyhow::Result<FilterSummary> {
    defn!();
    let linefilter = LineFilter::new(cli_settings.filter_settings);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let mut diagnostics = std::io::stderr();
    let summary: FilterSummary = linefilter.run(stdin.lock(), &mut writer, &mut diagnostics);
    // read errors and write errors end the run quietly
    if let Some(_err) = summary.read_error.as_ref() {
        defo!("read_error {}", _err);
    }
    if let Some(_err) = summary.write_error.as_ref() {
        defo!("write_error {}", _err);
    }
    if cli_settings.summary {
        let mut stderr = std::io::stderr().lock();
        print_summary(&mut stderr, &summary, linefilter.settings())
            .context("printing --summary")?;
        stderr.flush().context("printing --summary")?;
    }
    defx!();

    Ok(summary)
}

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let now_utc: DateTime<Utc> = UTC_NOW.with(|utc_now| *utc_now);
    let cli_settings: CLI_Settings = match cli_process_args(CLI_Args::parse(), &now_utc) {
        Ok(val) => val,
        Err(err) => {
            e_err!("{}", err);
            defx!("exit {}", EXIT_ERR);
            return ExitCode::from(EXIT_ERR);
        }
    };

    match run(cli_settings) {
        Ok(_summary) => {
            defx!("{}", _summary);

            ExitCode::SUCCESS
        }
        Err(err) => {
            e_err!("{:#}", err);
            defx!("exit {}", EXIT_ERR);

            ExitCode::from(EXIT_ERR)
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use ::chrono::TimeZone;
    use ::dflib::data::fields::FieldPositions;
    use ::test_case::test_case;

    use super::*;

    const FIXEDOFFSET0: FixedOffset = match FixedOffset::east_opt(0) {
        Some(fo) => fo,
        None => panic!("bad offset"),
    };

    fn now_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 6, 15, 12, 0, 0).unwrap()
    }

    fn args(argv: &[&str]) -> CLI_Args {
        let mut argv_: Vec<&str> = vec!["date-filter"];
        argv_.extend_from_slice(argv);

        CLI_Args::try_parse_from(argv_).unwrap()
    }

    #[test_case("+00:00", Some(0); "zero colon")]
    #[test_case("+0900", Some(9 * 3600); "plus nine")]
    #[test_case("-07:00", Some(-7 * 3600); "minus seven")]
    #[test_case("+05:30", Some(5 * 3600 + 30 * 60); "plus five thirty")]
    #[test_case("-08", Some(-8 * 3600); "minus eight hours only")]
    #[test_case("PDT", Some(-7 * 3600); "named PDT")]
    #[test_case("JST", Some(9 * 3600); "named JST")]
    #[test_case("IST", None; "ambiguous IST")]
    #[test_case("SST", None; "ambiguous SST")]
    #[test_case("FOO", None; "unknown name")]
    #[test_case("", None; "empty")]
    fn test_cli_process_tz_offset(
        tzo: &str,
        expect: Option<i32>,
    ) {
        let result = cli_process_tz_offset(tzo);
        match expect {
            Some(secs) => assert_eq!(result, Ok(FixedOffset::east_opt(secs).unwrap())),
            None => assert!(result.is_err(), "expected Err for {:?}, got {:?}", tzo, result),
        }
    }

    #[test_case(r"", Some(""))]
    #[test_case(r" ", Some(" "))]
    #[test_case(r"\t", Some("\t"))]
    #[test_case(r"\\", Some("\\"))]
    #[test_case(r"a\tb", Some("a\tb"))]
    #[test_case(r"\0", Some("\0"))]
    #[test_case(r"\", None; "trailing backslash")]
    #[test_case(r"\q", None; "unknown escape")]
    fn test_unescape_str(
        input: &str,
        expect: Option<&str>,
    ) {
        let result = unescape::unescape_str(input);
        match expect {
            Some(val) => assert_eq!(result, Ok(String::from(val))),
            None => assert!(result.is_err()),
        }
    }

    #[test]
    fn test_cli_args_defaults() {
        let args_ = args(&[]);
        assert_eq!(args_.delimiter, DELIMITER_DEFAULT);
        assert_eq!(args_.elements, ELEMENTS_DEFAULT);
        assert_eq!(args_.regexp, REGEXP_DEFAULT);
        assert_eq!(args_.after, None);
        assert_eq!(args_.before, None);
        assert!(!args_.verbose);
        assert!(!args_.summary);
    }

    #[test]
    fn test_cli_args_short() {
        let args_ = args(&[
            "-d", r"\t",
            "-e", "2,3",
            "-r", ".+",
            "-a", "2019-09-16 17:20",
            "-b", "2019-09-16 17:22",
            "-t", "+01:00",
            "-v",
            "-s",
        ]);
        assert_eq!(args_.delimiter, r"\t");
        assert_eq!(args_.elements, "2,3");
        assert_eq!(args_.after.as_deref(), Some("2019-09-16 17:20"));
        assert_eq!(args_.before.as_deref(), Some("2019-09-16 17:22"));
        assert_eq!(args_.tz_offset, FixedOffset::east_opt(3600).unwrap());
        assert!(args_.verbose);
        assert!(args_.summary);
    }

    #[test]
    fn test_cli_args_bad_tz_offset() {
        assert!(CLI_Args::try_parse_from(["date-filter", "--tz-offset", "IST"]).is_err());
    }

    #[test]
    fn test_cli_process_args_defaults() {
        let cli_settings = cli_process_args(args(&["-t", "+00:00"]), &now_utc()).unwrap();
        let settings = &cli_settings.filter_settings;
        assert_eq!(settings.delimiter, b" ".to_vec());
        assert_eq!(settings.positions, FieldPositions::from([1, 2]));
        assert_eq!(settings.pattern.as_str(), ".+");
        assert_eq!(settings.window.before, now_utc().with_timezone(&FIXEDOFFSET0));
        assert_eq!(settings.window.after, DateTime::<Utc>::MIN_UTC.with_timezone(&FIXEDOFFSET0));
        assert!(!cli_settings.summary);
    }

    #[test]
    fn test_cli_process_args_delimiter_escape() {
        let cli_settings = cli_process_args(args(&["-d", r"\t", "-t", "+00:00"]), &now_utc()).unwrap();
        assert_eq!(cli_settings.filter_settings.delimiter, b"\t".to_vec());
    }

    #[test_case(&["-d", r"\q"], "invalid delimiter"; "bad escape")]
    #[test_case(&["-d", ""], "delimiter must not be empty"; "empty delimiter")]
    #[test_case(&["-e", "1,x"], "failed to convert x to number"; "bad element")]
    #[test_case(&["-r", "("], "invalid regular expression"; "bad regexp")]
    #[test_case(&["-a", "not a date"], "failed to parse date 'not a date' for --after"; "bad after")]
    #[test_case(&["-b", "not a date"], "failed to parse date 'not a date' for --before"; "bad before")]
    #[test_case(&["-a", "@-1d", "-b", "@+1d"], "cannot pass both"; "both relative")]
    fn test_cli_process_args_err(
        argv: &[&str],
        expect_msg: &str,
    ) {
        let result = cli_process_args(args(argv), &now_utc());
        match result {
            Ok(val) => panic!("expected Err, got {:?}", val),
            Err(err) => {
                let msg = err.to_string();
                assert!(msg.contains(expect_msg), "message {:?} does not contain {:?}", msg, expect_msg);
            }
        }
    }

    #[test]
    fn test_cli_process_args_relative() {
        let cli_settings = cli_process_args(
            args(&["-t", "+00:00", "-a", "2022-01-02", "-b", "@+1d"]),
            &now_utc(),
        ).unwrap();
        let window = cli_settings.filter_settings.window;
        assert_eq!(window.after, FIXEDOFFSET0.with_ymd_and_hms(2022, 1, 2, 0, 0, 0).unwrap());
        assert_eq!(window.before, FIXEDOFFSET0.with_ymd_and_hms(2022, 1, 3, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_cli_process_args_empty_window_warns() {
        // an empty window is a warning, not an error
        let cli_settings = cli_process_args(
            args(&["-t", "+00:00", "-a", "2022-01-02", "-b", "2022-01-01"]),
            &now_utc(),
        ).unwrap();
        assert!(cli_settings.filter_settings.window.is_empty());
    }
}
