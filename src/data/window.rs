// src/data/window.rs

//! A [`TimeWindow`] is an open time interval `(after, before)` that parsed
//! line datetimes are compared against.
//!
//! The window bounds are user-passed strings processed by [`process_dt`].
//! Besides any datetime accepted by [`parse_datetime_str`], a bound may be
//! a clock time of today, e.g. `"12:30"`, or a relative offset:
//!
//! - `-1w2d3h4m5s` or `+1d` is an offset from now
//! - `@-1d` or `@+1h30m` is an offset from the other bound
//!
//! [`parse_datetime_str`]: crate::data::datetime::parse_datetime_str

#![allow(non_camel_case_types)]

use crate::common::SettingsError;
use crate::data::datetime::{
    datetime_min,
    datetime_parse_from_str,
    parse_datetime_str,
    DateTime,
    DateTimeL,
    DateTimeLOpt,
    DateTimePattern_str,
    Duration,
    FixedOffset,
    Offset,
    TimeZone,
    Utc,
};

use std::fmt;

use ::chrono::SubsecRound;
use ::const_format::concatcp;
use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Result of comparing a datetime to a [`TimeWindow`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Result_Filter_DateTime2 {
    /// like Pass
    InRange,
    /// like Fail; at or before `after`
    BeforeRange,
    /// like Fail; at or after `before`
    AfterRange,
}

impl Result_Filter_DateTime2 {
    #[inline(always)]
    pub const fn is_pass(&self) -> bool {
        matches!(*self, Result_Filter_DateTime2::InRange)
    }

    #[inline(always)]
    pub const fn is_fail(&self) -> bool {
        matches!(*self, Result_Filter_DateTime2::AfterRange | Result_Filter_DateTime2::BeforeRange)
    }
}

/// Open time interval. Both bounds are exclusive; a datetime equal to
/// `after` or to `before` is outside the window.
///
/// `after >= before` is allowed and is an empty window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeWindow {
    /// exclusive lower bound
    pub after: DateTimeL,
    /// exclusive upper bound
    pub before: DateTimeL,
}

impl TimeWindow {
    pub const fn new(
        after: DateTimeL,
        before: DateTimeL,
    ) -> Self {
        TimeWindow { after, before }
    }

    /// The widest window that ends at `now`; `after` is the earliest
    /// representable datetime.
    pub fn until(now: &DateTime<Utc>) -> Self {
        TimeWindow {
            after: datetime_min(),
            before: now.with_timezone(&Utc.fix()),
        }
    }

    /// Is `dt` before ([`BeforeRange`]), after ([`AfterRange`]), or in
    /// between ([`InRange`]) the bounds?
    ///
    /// [`AfterRange`]: Result_Filter_DateTime2::AfterRange
    /// [`BeforeRange`]: Result_Filter_DateTime2::BeforeRange
    /// [`InRange`]: Result_Filter_DateTime2::InRange
    pub fn compare(
        &self,
        dt: &DateTimeL,
    ) -> Result_Filter_DateTime2 {
        if dt <= &self.after {
            defñ!("{:?} <= after {:?}; return BeforeRange", dt, self.after);
            return Result_Filter_DateTime2::BeforeRange;
        }
        if dt >= &self.before {
            defñ!("{:?} >= before {:?}; return AfterRange", dt, self.before);
            return Result_Filter_DateTime2::AfterRange;
        }
        defñ!("{:?}; return InRange", dt);

        Result_Filter_DateTime2::InRange
    }

    #[inline(always)]
    pub fn contains(
        &self,
        dt: &DateTimeL,
    ) -> bool {
        self.compare(dt).is_pass()
    }

    /// No datetime can be within this window.
    pub fn is_empty(&self) -> bool {
        self.after >= self.before
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.after, self.before)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// user-passed window bounds
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Duration offset type of a relative offset bound.
/// Either relative offset from now (program run-time) or relative offset
/// from the other bound.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum DUR_OFFSET_TYPE {
    Now,
    Other,
}

/// Duration offset is added or subtracted from a `DateTime`?
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
enum DUR_OFFSET_ADDSUB {
    Add = 1,
    Sub = -1,
}

const CGN_DUR_OFFSET_TYPE: &str = "offset_type";
const CGN_DUR_OFFSET_ADDSUB: &str = "offset_addsub";
const CGN_DUR_OFFSET_WEEKS: &str = "weeks";
const CGN_DUR_OFFSET_DAYS: &str = "days";
const CGN_DUR_OFFSET_HOURS: &str = "hours";
const CGN_DUR_OFFSET_MINUTES: &str = "minutes";
const CGN_DUR_OFFSET_SECONDS: &str = "seconds";

const CGP_DUR_OFFSET_TYPE: &str = concatcp!("(?P<", CGN_DUR_OFFSET_TYPE, ">@?)");
const CGP_DUR_OFFSET_ADDSUB: &str = concatcp!("(?P<", CGN_DUR_OFFSET_ADDSUB, r">[+\-])");
const CGP_DUR_OFFSET_WEEKS: &str = concatcp!("(?P<", CGN_DUR_OFFSET_WEEKS, r">[\d]+w)");
const CGP_DUR_OFFSET_DAYS: &str = concatcp!("(?P<", CGN_DUR_OFFSET_DAYS, r">[\d]+d)");
const CGP_DUR_OFFSET_HOURS: &str = concatcp!("(?P<", CGN_DUR_OFFSET_HOURS, r">[\d]+h)");
const CGP_DUR_OFFSET_MINUTES: &str = concatcp!("(?P<", CGN_DUR_OFFSET_MINUTES, r">[\d]+m)");
const CGP_DUR_OFFSET_SECONDS: &str = concatcp!("(?P<", CGN_DUR_OFFSET_SECONDS, r">[\d]+s)");

/// Regular expression pattern of a relative offset, e.g. `"@-1d12h"`.
/// Units may be in any order. A repeated unit uses the last value.
pub const RP_DUR_OFFSET: &str = concatcp!(
    "^",
    CGP_DUR_OFFSET_TYPE,
    CGP_DUR_OFFSET_ADDSUB, "(",
    CGP_DUR_OFFSET_WEEKS, "|",
    CGP_DUR_OFFSET_DAYS, "|",
    CGP_DUR_OFFSET_HOURS, "|",
    CGP_DUR_OFFSET_MINUTES, "|",
    CGP_DUR_OFFSET_SECONDS,
    ")+$",
);

lazy_static! {
    /// user-passed strings of a duration that is a relative offset.
    static ref REGEX_DUR_OFFSET: Regex = {
        defñ!("lazy_static! REGEX_DUR_OFFSET::new()");

        Regex::new(RP_DUR_OFFSET).unwrap()
    };
}

/// Clock time patterns of a bound without a date; the date is today.
const BOUND_TIME_PATTERNS: [&DateTimePattern_str; 2] = [
    "%H:%M:%S",
    "%H:%M",
];

/// Date pattern prepended to a [`BOUND_TIME_PATTERNS`] value.
const BOUND_PREPEND_DATE_PATTERN: &DateTimePattern_str = "%Y%m%dT";

/// Regular expression processing of a user-passed duration string like
/// `"-4m2s"` becomes duration of 4 minutes + 2 seconds.
///
/// Returns `Ok(None)` if `val` is not a relative offset string.
/// Returns `Err` if `val` is a relative offset string that is too large.
pub fn string_wdhms_to_duration(
    val: &str,
) -> Result<Option<(Duration, DUR_OFFSET_TYPE)>, SettingsError> {
    defn!("({:?})", val);

    let captures: ::regex::Captures = match REGEX_DUR_OFFSET.captures(val) {
        Some(caps) => caps,
        None => {
            defx!("REGEX_DUR_OFFSET.captures(…) None");
            return Ok(None);
        }
    };

    let duration_offset_type: DUR_OFFSET_TYPE = match captures.name(CGN_DUR_OFFSET_TYPE) {
        Some(match_) if match_.as_str() == "@" => DUR_OFFSET_TYPE::Other,
        _ => DUR_OFFSET_TYPE::Now,
    };
    let duration_addsub: DUR_OFFSET_ADDSUB = match captures.name(CGN_DUR_OFFSET_ADDSUB) {
        Some(match_) if match_.as_str() == "-" => DUR_OFFSET_ADDSUB::Sub,
        _ => DUR_OFFSET_ADDSUB::Add,
    };
    let addsub: i64 = duration_addsub as i64;

    let mut counts: [i64; 5] = [0; 5];
    for (index, name) in [
        CGN_DUR_OFFSET_WEEKS,
        CGN_DUR_OFFSET_DAYS,
        CGN_DUR_OFFSET_HOURS,
        CGN_DUR_OFFSET_MINUTES,
        CGN_DUR_OFFSET_SECONDS,
    ].iter().enumerate() {
        if let Some(match_) = captures.name(name) {
            defo!("matched named group {:?}, match {:?}", name, match_.as_str());
            // remove the trailing unit letter
            let digits: &str = &match_.as_str()[..match_.as_str().len() - 1];
            match digits.parse::<i64>() {
                Ok(count) => counts[index] = count * addsub,
                Err(_err) => {
                    defx!("parse {:?} failed {}", digits, _err);
                    return Err(SettingsError::Duration(String::from(val)));
                }
            }
        }
    }

    let duration: Duration = match (
        Duration::try_weeks(counts[0]),
        Duration::try_days(counts[1]),
        Duration::try_hours(counts[2]),
        Duration::try_minutes(counts[3]),
        Duration::try_seconds(counts[4]),
    ) {
        (Some(w), Some(d), Some(h), Some(m), Some(s)) => {
            match w
                .checked_add(&d)
                .and_then(|dur| dur.checked_add(&h))
                .and_then(|dur| dur.checked_add(&m))
                .and_then(|dur| dur.checked_add(&s))
            {
                Some(dur) => dur,
                None => return Err(SettingsError::Duration(String::from(val))),
            }
        }
        _ => {
            defx!("Duration::try_… failed");
            return Err(SettingsError::Duration(String::from(val)));
        }
    };
    defx!("return {:?}, {:?}", duration, duration_offset_type);

    Ok(Some((duration, duration_offset_type)))
}

/// Is `val` a relative offset from the other bound, e.g. `"@+1d"`?
pub fn is_rel_offset_other(val: &str) -> bool {
    matches!(
        string_wdhms_to_duration(val),
        Ok(Some((_, DUR_OFFSET_TYPE::Other)))
    )
}

/// Process duration string like `"-4m2s"` as relative offset of now,
/// or relative offset of the other bound (`dt_other`).
/// `val="-1d"` is one day ago.
/// `val="@+1m"` is one minute added to `dt_other`.
///
/// Returns `Ok(None)` if `val` is not a relative offset string.
pub fn string_to_rel_offset_datetime(
    val: &str,
    tz_offset: &FixedOffset,
    dt_other: &DateTimeL,
    now_utc: &DateTime<Utc>,
) -> Result<DateTimeLOpt, SettingsError> {
    defn!("({:?}, {:?}, {:?}, {:?})", val, tz_offset, dt_other, now_utc);
    let (duration, duration_offset_type) = match string_wdhms_to_duration(val)? {
        Some((dur, dur_type)) => (dur, dur_type),
        None => {
            defx!("return None");
            return Ok(None);
        }
    };
    let base: DateTimeL = match duration_offset_type {
        DUR_OFFSET_TYPE::Now => {
            // drop fractional seconds
            let now_utc_: DateTime<Utc> = now_utc.trunc_subsecs(0);
            tz_offset.from_utc_datetime(&now_utc_.naive_utc())
        }
        DUR_OFFSET_TYPE::Other => *dt_other,
    };
    defo!("base {:?}", base);
    match base.checked_add_signed(duration) {
        Some(dt) => {
            defx!("return {:?}", dt);

            Ok(Some(dt))
        }
        None => {
            defx!("checked_add_signed({:?}) failed", duration);

            Err(SettingsError::Duration(String::from(val)))
        }
    }
}

/// Transform a user-passed window bound string into a [`DateTimeL`].
///
/// - `option` names the bound for error messages, e.g. `"--after"`
/// - `dts` the user-passed string
/// - `tz_offset` for datetimes without a timezone
/// - `dt_other` the other bound, used by `@` relative offsets
/// - `now_utc` the program start time, used by relative offsets and
///   clock times without a date
pub fn process_dt(
    option: &'static str,
    dts: &str,
    tz_offset: &FixedOffset,
    dt_other: &DateTimeL,
    now_utc: &DateTime<Utc>,
) -> Result<DateTimeL, SettingsError> {
    defn!("({:?}, {:?}, {:?}, {:?}, {:?})", option, dts, tz_offset, dt_other, now_utc);
    if let Ok(dt) = parse_datetime_str(dts, tz_offset) {
        defx!("parse_datetime_str return {:?}", dt);
        return Ok(dt);
    }
    // clock time without a date is today in `tz_offset`
    let today: String = now_utc
        .with_timezone(tz_offset)
        .format(BOUND_PREPEND_DATE_PATTERN)
        .to_string();
    for pattern_ in BOUND_TIME_PATTERNS.iter() {
        let mut pattern: String = String::from(BOUND_PREPEND_DATE_PATTERN);
        pattern.push_str(pattern_);
        let mut dts_: String = today.clone();
        dts_.push_str(dts.trim());
        if let Some(dt) = datetime_parse_from_str(dts_.as_str(), pattern.as_str(), false, true, tz_offset) {
            defx!("pattern {:?} return {:?}", pattern, dt);
            return Ok(dt);
        }
    }
    // try relative offset pattern matching, e.g. `"-30m5s"`, `"+2d"`
    match string_to_rel_offset_datetime(dts, tz_offset, dt_other, now_utc)? {
        Some(dt) => {
            defx!("string_to_rel_offset_datetime return {:?}", dt);

            Ok(dt)
        }
        None => {
            defx!("return Err");

            Err(SettingsError::DateTime {
                option,
                value: String::from(dts),
            })
        }
    }
}

/// Transform the optional user-passed `after` and `before` strings into a
/// [`TimeWindow`].
///
/// A missing `after` is the earliest representable datetime. A missing
/// `before` is `now_utc`. At most one bound may be relative to the other;
/// that bound is processed last.
pub fn process_window(
    after: Option<&str>,
    before: Option<&str>,
    tz_offset: &FixedOffset,
    now_utc: &DateTime<Utc>,
) -> Result<TimeWindow, SettingsError> {
    defn!("({:?}, {:?}, {:?}, {:?})", after, before, tz_offset, now_utc);
    let mut window: TimeWindow = TimeWindow::until(now_utc);
    let after_other: bool = after.map_or(false, is_rel_offset_other);
    let before_other: bool = before.map_or(false, is_rel_offset_other);
    if after_other && before_other {
        defx!("return Err RelativeBoth");
        return Err(SettingsError::RelativeBoth);
    }
    if after_other {
        if let Some(dts) = before {
            window.before = process_dt(OPTION_BEFORE, dts, tz_offset, &window.after, now_utc)?;
        }
        if let Some(dts) = after {
            window.after = process_dt(OPTION_AFTER, dts, tz_offset, &window.before, now_utc)?;
        }
    } else {
        if let Some(dts) = after {
            window.after = process_dt(OPTION_AFTER, dts, tz_offset, &window.before, now_utc)?;
        }
        if let Some(dts) = before {
            window.before = process_dt(OPTION_BEFORE, dts, tz_offset, &window.after, now_utc)?;
        }
    }
    defx!("return {:?}", window);

    Ok(window)
}

/// name of the lower bound option, used in error messages
pub const OPTION_AFTER: &str = "--after";
/// name of the upper bound option, used in error messages
pub const OPTION_BEFORE: &str = "--before";
