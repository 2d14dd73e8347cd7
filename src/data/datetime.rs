// src/data/datetime.rs

//! Functions to transform a free-form datetime substring into a chrono
//! [`DateTime`] instance without being told the datetime format in advance.
//!
//! The most relevant function is [`parse_datetime`] which tries, in order:
//! 1. chrono RFC 3339 and RFC 2822 parsers
//! 2. all-digit strings, see [`digits_to_datetime`]
//! 3. every entry of [`DATETIME_LAYOUTS`], most specific layout first
//!
//! The most relevant documents to understand this file are:
//! - `chrono` crate [`strftime`] format.
//!
//! [`DateTime`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html
//! [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

#[cfg(any(debug_assertions, test))]
use crate::debug::printers::{buffer_to_String_noraw, str_to_String_noraw};

use std::collections::BTreeMap;
use std::fmt;

#[doc(hidden)]
pub use ::chrono::{
    DateTime,
    Datelike, // adds method `.year()` onto `DateTime`
    Duration,
    FixedOffset,
    Local,
    NaiveDate,
    NaiveDateTime,
    Offset,
    TimeZone,
    Timelike,
    Utc,
};
use ::lazy_static::lazy_static;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DateTime types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Crate `chrono` [`strftime`] formatting pattern, passed to
/// chrono [`DateTime::parse_from_str`].
///
/// [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
/// [`DateTime::parse_from_str`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html#method.parse_from_str
pub type DateTimePattern_str = str;

/// A chrono [`DateTime`] type used in _dflib_.
///
/// [`DateTime`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html
pub type DateTimeL = DateTime<FixedOffset>;
pub type DateTimeLOpt = Option<DateTimeL>;

/// Count of datetime fields a [`DateTimeLayout`] populates.
pub type Specificity = u8;

/// A datetime substring could not be interpreted as any known datetime
/// format.
///
/// This is an expected outcome for many lines of a log and is not fatal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DateParseError {
    /// the text that failed to parse
    pub text: String,
}

impl DateParseError {
    pub fn new(text: &str) -> Self {
        DateParseError { text: String::from(text) }
    }
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse date '{}'", self.text)
    }
}

impl std::error::Error for DateParseError {}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DateTime layouts
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One strftime pattern tried by [`parse_datetime`], with flags describing
/// which datetime fields the pattern populates.
///
/// Every layout has a date (year, month, day).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DateTimeLayout {
    pub pattern: String,
    /// has hour and minute
    pub has_time: bool,
    /// has seconds
    pub has_sec: bool,
    /// has required fractional seconds
    pub has_frac: bool,
    /// has a numeric timezone offset
    pub has_tz: bool,
    /// has a full year `%Y`, not a two-digit year `%y`
    pub has_year4: bool,
}

impl DateTimeLayout {
    fn new(
        pattern: String,
        has_time: bool,
        has_sec: bool,
        has_frac: bool,
        has_tz: bool,
    ) -> Self {
        let has_year4: bool = pattern.contains("%Y");
        DateTimeLayout {
            pattern,
            has_time,
            has_sec,
            has_frac,
            has_tz,
            has_year4,
        }
    }

    /// Count of datetime fields this layout populates. Year, month and day
    /// are always populated.
    pub const fn specificity(&self) -> Specificity {
        3 + (self.has_time as Specificity) * 2
            + (self.has_sec as Specificity)
            + (self.has_frac as Specificity)
            + (self.has_tz as Specificity)
    }
}

/// Years below this parsed by a `%Y` layout were written with one or two
/// digits. chrono `%Y` accepts any digit count so such text must match a
/// `%y` layout instead.
const YEAR4_MIN: i32 = 100;

/// Date portion of a layout, and whether the date may be joined to the time
/// with a `T`, e.g. `2006-01-02T15:04:05`.
///
/// Order matters for ambiguous dates: month-first `%m/%d/%Y` comes before
/// day-first `%d/%m/%Y`. Two-digit year `%y` parts come before the
/// matching `%Y` part; `%y` takes at most two digits so it never matches a
/// four-digit year. chrono maps `%y` 70 to 99 onto 1970 to 1999, and 00 to 69
/// onto 2000 to 2069.
const DATE_PARTS: [(&DateTimePattern_str, bool); 17] = [
    ("%Y-%m-%d", true),
    ("%Y/%m/%d", false),
    ("%Y.%m.%d", false),
    ("%Y%m%d", true),
    ("%Y-%B-%d", false),
    ("%m/%d/%y", false),
    ("%d/%m/%y", false),
    ("%m/%d/%Y", false),
    ("%d/%m/%Y", false),
    ("%d.%m.%y", false),
    ("%d.%m.%Y", false),
    // `%B` also parses abbreviated month names, e.g. "Jan"
    ("%B %d %Y", false),
    ("%B %d, %Y", false),
    ("%d %B %y", false),
    ("%d %B %Y", false),
    ("%d-%B-%y", false),
    ("%d-%B-%Y", false),
];

/// Time portion of a layout (pattern, has_sec, has_frac).
///
/// `%.f` parses optional fractional seconds, so it does not count toward
/// `has_frac`.
const TIME_PARTS: [(&DateTimePattern_str, bool, bool); 6] = [
    ("%H:%M:%S%.f", true, false),
    ("%H:%M:%S,%3f", true, true),
    ("%H:%M:%S,%6f", true, true),
    ("%H:%M", false, false),
    ("%I:%M:%S%.f %p", true, false),
    ("%I:%M %p", false, false),
];

/// Timezone suffix of a layout (pattern, has_tz).
///
/// `%#z` parses `Z`, `+09`, `+0900`, and `+09:00`.
const TZ_PARTS: [(&DateTimePattern_str, bool); 3] = [
    ("", false),
    (" %#z", true),
    ("%#z", true),
];

/// Layouts that are not a simple date-time-timezone concatenation
/// (pattern, has_time, has_sec, has_frac, has_tz).
const OTHER_LAYOUTS: [(&DateTimePattern_str, bool, bool, bool, bool); 8] = [
    // `Jan 2 15:04:05 2006`, weekday already removed
    ("%B %d %H:%M:%S%.f %Y", true, true, false, false),
    // `Jan 2 15:04:05 MST 2006` after named timezone replacement
    ("%B %d %H:%M:%S%.f %#z %Y", true, true, false, true),
    // Apache common log `10/Oct/2000:13:55:36 -0700`
    ("%d/%B/%Y:%H:%M:%S %#z", true, true, false, true),
    ("%d/%B/%Y:%H:%M:%S", true, true, false, false),
    ("%Y%m%dT%H%M%S%.f", true, true, false, false),
    ("%Y%m%dT%H%M%S%.f%#z", true, true, false, true),
    // `12 Feb 2006, 19:17:22`
    ("%d %B %Y, %H:%M:%S%.f", true, true, false, false),
    ("%d %B %Y, %H:%M", true, false, false, false),
];

lazy_static! {
    /// All layouts tried by [`parse_datetime`], sorted from most specific to
    /// least specific. Layouts of equal [`Specificity`] keep the order of
    /// [`DATE_PARTS`] then [`TIME_PARTS`].
    pub static ref DATETIME_LAYOUTS: Vec<DateTimeLayout> = {
        defñ!("lazy_static! DATETIME_LAYOUTS");

        let mut layouts: Vec<DateTimeLayout> = Vec::with_capacity(512);
        for (date_part, allow_t) in DATE_PARTS.iter() {
            let seps: &[&str] = if *allow_t { &[" ", "T"] } else { &[" "] };
            for (time_part, has_sec, has_frac) in TIME_PARTS.iter() {
                for sep in seps.iter() {
                    for (tz_part, has_tz) in TZ_PARTS.iter() {
                        let pattern = format!("{}{}{}{}", date_part, sep, time_part, tz_part);
                        layouts.push(DateTimeLayout::new(pattern, true, *has_sec, *has_frac, *has_tz));
                    }
                }
            }
        }
        for (pattern, has_time, has_sec, has_frac, has_tz) in OTHER_LAYOUTS.iter() {
            layouts.push(
                DateTimeLayout::new(String::from(*pattern), *has_time, *has_sec, *has_frac, *has_tz)
            );
        }
        for (date_part, _) in DATE_PARTS.iter() {
            layouts.push(DateTimeLayout::new(String::from(*date_part), false, false, false, false));
        }
        // stable sort keeps the relative order of equal specificity
        layouts.sort_by_key(|layout| std::cmp::Reverse(layout.specificity()));

        layouts
    };
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// named timezones
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Named timezone abbreviations and their numeric offsets.
/// Repeated abbreviations are ambiguous.
///
/// Taken from <https://en.wikipedia.org/wiki/List_of_time_zone_abbreviations>
const TZZ_ALL: [(&str, &str); 64] = [
    ("ACDT", "+10:30"),
    ("ACST", "+09:30"),
    ("ADT", "-03:00"),
    ("AEDT", "+11:00"),
    ("AEST", "+10:00"),
    ("AKDT", "-08:00"),
    ("AKST", "-09:00"),
    ("ART", "-03:00"),
    ("AST", "+03:00"),
    ("AST", "-04:00"),
    ("AWST", "+08:00"),
    ("BRT", "-03:00"),
    ("BST", "+06:00"),
    ("BST", "+11:00"),
    ("BST", "+01:00"),
    ("CAT", "+02:00"),
    ("CDT", "-05:00"),
    ("CDT", "-04:00"),
    ("CEST", "+02:00"),
    ("CET", "+01:00"),
    ("CLT", "-04:00"),
    ("CST", "-06:00"),
    ("CST", "+08:00"),
    ("CST", "-05:00"),
    ("EAT", "+03:00"),
    ("EDT", "-04:00"),
    ("EEST", "+03:00"),
    ("EET", "+02:00"),
    ("EST", "-05:00"),
    ("GMT", "-00:00"),
    ("GST", "-02:00"),
    ("GST", "+04:00"),
    ("HKT", "+08:00"),
    ("HST", "-10:00"),
    ("ICT", "+07:00"),
    ("IST", "+05:30"),
    ("IST", "+01:00"),
    ("IST", "+02:00"),
    ("JST", "+09:00"),
    ("KST", "+09:00"),
    ("MDT", "-06:00"),
    ("MSK", "+03:00"),
    ("MST", "+08:00"),
    ("MST", "-07:00"),
    ("NDT", "-02:30"),
    ("NPT", "+05:45"),
    ("NST", "-03:30"),
    ("NZDT", "+13:00"),
    ("NZST", "+12:00"),
    ("PDT", "-07:00"),
    ("PHT", "+08:00"),
    ("PKT", "+05:00"),
    ("PST", "-08:00"),
    ("SAST", "+02:00"),
    ("SGT", "+08:00"),
    ("SST", "-11:00"),
    ("SST", "+08:00"),
    ("UTC", "-00:00"),
    ("WAT", "+01:00"),
    ("WEST", "+01:00"),
    ("WET", "-00:00"),
    ("WIB", "+07:00"),
    ("Z", "+00:00"),
    ("UT", "+00:00"),
];

type Map_TZZ_to_TZz<'a> = BTreeMap<&'a str, &'a str>;

lazy_static! {
    /// Map named timezone abbreviation to numeric offset, e.g. `"PDT"` to
    /// `"-07:00"`.
    ///
    /// Ambiguous duplicate timezones are set to empty string, e.g. `"SST"`.
    pub static ref MAP_TZZ_TO_TZz: Map_TZZ_to_TZz<'static> = {
        let mut map = Map_TZZ_to_TZz::new();
        #[allow(non_snake_case)]
        for tzZ_zc in TZZ_ALL.iter() {
            if map.insert(tzZ_zc.0, tzZ_zc.1).is_some() {
                // duplicate key entries are set to empty string
                map.insert(tzZ_zc.0, "");
            }
        }

        map
    };
}

/// Weekday names, lowercase, full and abbreviated.
const WEEKDAYS: [&str; 14] = [
    "monday", "mon",
    "tuesday", "tue",
    "wednesday", "wed",
    "thursday", "thu",
    "friday", "fri",
    "saturday", "sat",
    "sunday", "sun",
];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Convert a [`NaiveDateTime`] to a [`DateTimeL`] in timezone `tz_offset`.
#[inline(always)]
pub fn naive_to_datetimel(
    dt_naive: &NaiveDateTime,
    tz_offset: &FixedOffset,
) -> DateTimeLOpt {
    tz_offset
        .from_local_datetime(dt_naive)
        .earliest()
}

/// Convert a [`&str`] to a chrono [`Option<DateTime<FixedOffset>>`]
/// instance.
///
/// Compensate for a missing timezone or a missing time.
///
/// - `data` to parse that has a datetime string
/// - strftime `pattern` to use for parsing
/// - `has_tz`, the `pattern` has a timezone (`%z`, `%#z`, etc.)?
/// - `has_time`, the `pattern` has a clock time? Without a clock time the
///   datetime is midnight.
/// - `tz_offset` fallback timezone offset when `!has_tz`
///
/// [`&str`]: str
/// [`Option<DateTime<FixedOffset>>`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html
pub fn datetime_parse_from_str(
    data: &str,
    pattern: &DateTimePattern_str,
    has_tz: bool,
    has_time: bool,
    tz_offset: &FixedOffset,
) -> DateTimeLOpt {
    if has_tz {
        match DateTime::parse_from_str(data, pattern) {
            Ok(val) => {
                defñ!("DateTime::parse_from_str({:?}, {:?}) returned {:?}", str_to_String_noraw(data), pattern, val);

                Some(val)
            }
            Err(_err) => None,
        }
    } else if has_time {
        // no timezone in `pattern` so first convert to a `NaiveDateTime`
        // instance, then give it `tz_offset`
        match NaiveDateTime::parse_from_str(data, pattern) {
            Ok(dt_naive) => {
                defñ!("NaiveDateTime::parse_from_str({:?}, {:?}) returned {:?}", str_to_String_noraw(data), pattern, dt_naive);

                naive_to_datetimel(&dt_naive, tz_offset)
            }
            Err(_err) => None,
        }
    } else {
        match NaiveDate::parse_from_str(data, pattern) {
            Ok(date) => {
                defñ!("NaiveDate::parse_from_str({:?}, {:?}) returned {:?}", str_to_String_noraw(data), pattern, date);

                date.and_hms_opt(0, 0, 0)
                    .and_then(|dt_naive| naive_to_datetimel(&dt_naive, tz_offset))
            }
            Err(_err) => None,
        }
    }
}

/// Call [`datetime_parse_from_str`] with a `pattern` containing a timezone
/// and a clock time.
pub fn datetime_parse_from_str_w_tz(
    data: &str,
    pattern: &DateTimePattern_str,
) -> DateTimeLOpt {
    datetime_parse_from_str(data, pattern, true, true, &Utc.fix())
}

/// Unix epoch `value` in units of `1 / per_sec` seconds.
fn epoch_to_datetime(
    value: i64,
    per_sec: i64,
    tz_offset: &FixedOffset,
) -> DateTimeLOpt {
    let secs: i64 = value.div_euclid(per_sec);
    let nanos: i64 = value.rem_euclid(per_sec) * (1_000_000_000 / per_sec);
    let nanos: u32 = u32::try_from(nanos).ok()?;
    let dt_utc: DateTime<Utc> = DateTime::<Utc>::from_timestamp(secs, nanos)?;

    Some(dt_utc.with_timezone(tz_offset))
}

/// Interpret an all-digit string.
///
/// - `+<digits>` is a Unix epoch timestamp in seconds
/// - 8 digits `%Y%m%d`, 12 digits `%Y%m%d%H%M`, 14 digits `%Y%m%d%H%M%S`
/// - 9 or 10 digits are Unix epoch seconds, 13 digits milliseconds,
///   16 digits microseconds, 19 digits nanoseconds
///
/// Returns `None` for any other string.
pub fn digits_to_datetime(
    data: &str,
    tz_offset: &FixedOffset,
) -> DateTimeLOpt {
    let (plus, digits) = match data.strip_prefix('+') {
        Some(digits) => (true, digits),
        None => (false, data),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if plus {
        return epoch_to_datetime(digits.parse::<i64>().ok()?, 1, tz_offset);
    }
    match digits.len() {
        8 => datetime_parse_from_str(digits, "%Y%m%d", false, false, tz_offset),
        12 => datetime_parse_from_str(digits, "%Y%m%d%H%M", false, true, tz_offset),
        14 => datetime_parse_from_str(digits, "%Y%m%d%H%M%S", false, true, tz_offset),
        9 | 10 => epoch_to_datetime(digits.parse::<i64>().ok()?, 1, tz_offset),
        13 => epoch_to_datetime(digits.parse::<i64>().ok()?, 1_000, tz_offset),
        16 => epoch_to_datetime(digits.parse::<i64>().ok()?, 1_000_000, tz_offset),
        19 => epoch_to_datetime(digits.parse::<i64>().ok()?, 1_000_000_000, tz_offset),
        _ => None,
    }
}

/// Is `token` a numeric timezone offset, e.g. `+0900`, `-07:00`, `+09`?
fn is_numeric_tz(token: &str) -> bool {
    let rest = match token.strip_prefix(['+', '-']) {
        Some(rest) => rest,
        None => return false,
    };

    rest.len() >= 2 && rest.bytes().all(|b| b.is_ascii_digit() || b == b':')
}

/// Prepare a datetime string for matching against [`DATETIME_LAYOUTS`].
///
/// - whitespace runs become one space, leading and trailing whitespace is
///   removed
/// - a leading weekday name is removed, e.g. `"Mon,"`
/// - named timezones become numeric offsets, see [`MAP_TZZ_TO_TZz`];
///   an ambiguous name becomes `tz_offset`; a name directly after a numeric
///   offset is removed, e.g. `"+0000 UTC"`
pub fn normalize_datetime_str(
    data: &str,
    tz_offset: &FixedOffset,
) -> String {
    let mut tokens: Vec<String> = Vec::with_capacity(8);
    for (index, token) in data.split_whitespace().enumerate() {
        if index == 0 {
            let weekday = token
                .trim_end_matches([',', '.'])
                .to_ascii_lowercase();
            if WEEKDAYS.contains(&weekday.as_str()) {
                continue;
            }
        }
        match MAP_TZZ_TO_TZz.get(token) {
            Some(tz_offset_val) => {
                if let Some(prior) = tokens.last() {
                    if is_numeric_tz(prior) {
                        continue;
                    }
                }
                match tz_offset_val.is_empty() {
                    // ambiguous named timezone, fallback to passed TZ offset
                    true => tokens.push(tz_offset.to_string()),
                    false => tokens.push(String::from(*tz_offset_val)),
                }
            }
            None => tokens.push(String::from(token)),
        }
    }

    tokens.join(" ")
}

/// Attempt to transform `data` into a [`DateTimeL`] by heuristics.
///
/// Datetimes without a timezone are presumed to be in timezone `tz_offset`.
/// Datetimes without a clock time are presumed to be midnight.
///
/// Among the [`DATETIME_LAYOUTS`] that parse `data`, the most specific one
/// is used; ties go to the layout listed first. A one or two digit year is
/// read by the `%y` layouts only, e.g. `3/31/14` is 2014-03-31.
pub fn parse_datetime_str(
    data: &str,
    tz_offset: &FixedOffset,
) -> Result<DateTimeL, DateParseError> {
    defn!("({:?}, {:?})", str_to_String_noraw(data), tz_offset);
    let trimmed: &str = data.trim();
    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        defx!("no digits, return Err");
        return Err(DateParseError::new(data));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        defx!("parse_from_rfc3339 return {:?}", dt);
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        defx!("parse_from_rfc2822 return {:?}", dt);
        return Ok(dt);
    }
    if let Some(dt) = digits_to_datetime(trimmed, tz_offset) {
        defx!("digits_to_datetime return {:?}", dt);
        return Ok(dt);
    }
    let normalized: String = normalize_datetime_str(trimmed, tz_offset);
    defo!("normalized {:?}", normalized);
    for layout in DATETIME_LAYOUTS.iter() {
        if let Some(dt) = datetime_parse_from_str(
            normalized.as_str(),
            layout.pattern.as_str(),
            layout.has_tz,
            layout.has_time,
            tz_offset,
        ) {
            if layout.has_year4 && dt.year() < YEAR4_MIN {
                defo!("layout {:?} short year {}, skip", layout.pattern, dt.year());
                continue;
            }
            defx!("layout {:?} return {:?}", layout.pattern, dt);
            return Ok(dt);
        }
    }
    defx!("return Err");

    Err(DateParseError::new(data))
}

/// Attempt to transform bytes `data` into a [`DateTimeL`].
/// See [`parse_datetime_str`].
///
/// `data` that is not valid UTF-8 is a [`DateParseError`].
pub fn parse_datetime(
    data: &[u8],
    tz_offset: &FixedOffset,
) -> Result<DateTimeL, DateParseError> {
    match std::str::from_utf8(data) {
        Ok(text) => parse_datetime_str(text, tz_offset),
        Err(_err) => {
            defñ!("from_utf8({:?}) failed {}", buffer_to_String_noraw(data), _err);

            Err(DateParseError::new(&String::from_utf8_lossy(data)))
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// other miscellaneous DateTime function helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The earliest representable [`DateTimeL`].
pub fn datetime_min() -> DateTimeL {
    DateTime::<Utc>::MIN_UTC.with_timezone(&Utc.fix())
}

/// The local system timezone offset at `now`.
pub fn local_offset(now_utc: &DateTime<Utc>) -> FixedOffset {
    now_utc
        .with_timezone(&Local)
        .offset()
        .fix()
}

/// Create a [`DateTimeL`] from the passed values. Returns `None` for
/// impossible values, e.g. month `13`.
pub fn ymdhms(
    fixedoffset: &FixedOffset,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTimeLOpt {
    fixedoffset
        .with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
}
