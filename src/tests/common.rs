// src/tests/common.rs

//! Common globals for tests.

#![allow(non_upper_case_globals)]

use crate::data::datetime::{DateTime, FixedOffset, TimeZone, Utc};

use ::lazy_static::lazy_static;

lazy_static! {
    /// FixedOffset `+00:00`
    pub static ref FO_0: FixedOffset = FixedOffset::east_opt(0).unwrap();
    /// FixedOffset `+01:00`
    pub static ref FO_P1: FixedOffset = FixedOffset::east_opt(3600).unwrap();
    /// FixedOffset `+09:00`
    pub static ref FO_P9: FixedOffset = FixedOffset::east_opt(9 * 3600).unwrap();
    /// FixedOffset `+05:30`
    pub static ref FO_P5_30: FixedOffset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    /// FixedOffset `-07:00`
    pub static ref FO_M7: FixedOffset = FixedOffset::east_opt(-7 * 3600).unwrap();
    /// FixedOffset `-08:00`
    pub static ref FO_M8: FixedOffset = FixedOffset::east_opt(-8 * 3600).unwrap();

    /// a fixed "now" for tests, 2020-06-15 12:00:00 UTC
    pub static ref NOW_UTC: DateTime<Utc> = Utc.with_ymd_and_hms(2020, 6, 15, 12, 0, 0).unwrap();
}

/// Lines of a pacman log.
pub const PACMAN_LOG: &str = "\
[2019-09-16 17:19] [PACMAN] Running 'pacman -Syu'
[2019-09-16 17:20] [PACMAN] synchronizing package lists
[2019-09-16 17:21] [ALPM] upgraded linux (5.2.14.arch2-1 -> 5.2.14.arch2-2)
[2019-09-16 17:21] [ALPM] running '60-linux.hook'...
[2019-09-16 17:22] [ALPM] transaction completed
[2019-09-16 17:23] [PACMAN] Running 'pacman -S vim'
";

/// pacman log datetime extraction regular expression
pub const PACMAN_REGEXP: &str = r"[^\[].+[^\]]";
