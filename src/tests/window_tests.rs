// src/tests/window_tests.rs

//! tests for `window.rs` functions

#![allow(non_snake_case)]

use crate::common::SettingsError;
use crate::data::datetime::{
    datetime_min,
    ymdhms,
    DateTime,
    DateTimeL,
    Duration,
    FixedOffset,
    TimeZone,
    Utc,
};
use crate::data::window::{
    is_rel_offset_other,
    process_dt,
    process_window,
    string_to_rel_offset_datetime,
    string_wdhms_to_duration,
    Result_Filter_DateTime2,
    TimeWindow,
    DUR_OFFSET_TYPE,
    OPTION_AFTER,
    OPTION_BEFORE,
};
use crate::tests::common::{FO_0, FO_M7, FO_P9, NOW_UTC};

use ::more_asserts::assert_lt;
use ::si_trace_print::stack::stack_offset_set;
use ::test_case::test_case;

fn dt0(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTimeL {
    ymdhms(&FO_0, year, month, day, hour, min, sec).unwrap()
}

fn window_2019() -> TimeWindow {
    TimeWindow::new(dt0(2019, 9, 16, 17, 20, 0), dt0(2019, 9, 16, 17, 22, 0))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TimeWindow
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case(dt0(2019, 9, 16, 17, 19, 59), Result_Filter_DateTime2::BeforeRange; "before after")]
#[test_case(dt0(2019, 9, 16, 17, 20, 0), Result_Filter_DateTime2::BeforeRange; "equal after")]
#[test_case(dt0(2019, 9, 16, 17, 20, 1), Result_Filter_DateTime2::InRange; "just after after")]
#[test_case(dt0(2019, 9, 16, 17, 21, 0), Result_Filter_DateTime2::InRange; "middle")]
#[test_case(dt0(2019, 9, 16, 17, 21, 59), Result_Filter_DateTime2::InRange; "just before before")]
#[test_case(dt0(2019, 9, 16, 17, 22, 0), Result_Filter_DateTime2::AfterRange; "equal before")]
#[test_case(dt0(2020, 1, 1, 0, 0, 0), Result_Filter_DateTime2::AfterRange; "after before")]
fn test_TimeWindow_compare(
    dt: DateTimeL,
    expect: Result_Filter_DateTime2,
) {
    stack_offset_set(Some(2));
    let window = window_2019();
    let result = window.compare(&dt);
    assert_eq!(result, expect, "{} compare {}", window, dt);
    assert_eq!(window.contains(&dt), expect.is_pass());
    assert_eq!(result.is_fail(), !result.is_pass());
}

#[test]
fn test_TimeWindow_compare_other_offset() {
    // 17:21 UTC is 10:21 at -07:00
    let window = window_2019();
    let dt = ymdhms(&FO_M7, 2019, 9, 16, 10, 21, 0).unwrap();
    assert!(window.contains(&dt));
    // 17:22 UTC is 02:22 the next day at +09:00
    let dt = ymdhms(&FO_P9, 2019, 9, 17, 2, 22, 0).unwrap();
    assert_eq!(window.compare(&dt), Result_Filter_DateTime2::AfterRange);
}

#[test]
fn test_TimeWindow_is_empty() {
    assert!(!window_2019().is_empty());
    let dt = dt0(2019, 9, 16, 17, 20, 0);
    let window = TimeWindow::new(dt, dt);
    assert!(window.is_empty());
    assert!(!window.contains(&dt));
    let window = TimeWindow::new(dt0(2019, 9, 16, 17, 22, 0), dt0(2019, 9, 16, 17, 20, 0));
    assert!(window.is_empty());
    assert!(!window.contains(&dt0(2019, 9, 16, 17, 21, 0)));
}

#[test]
fn test_TimeWindow_until() {
    let window = TimeWindow::until(&NOW_UTC);
    assert_eq!(window.after, datetime_min());
    assert_eq!(window.before, *NOW_UTC);
    assert!(window.contains(&dt0(1970, 1, 1, 0, 0, 0)));
    assert!(window.contains(&dt0(1, 1, 1, 0, 0, 0)));
    assert!(!window.contains(&NOW_UTC.with_timezone(&*FO_0)));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// relative offsets
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case("-1s", Some((-1, DUR_OFFSET_TYPE::Now)); "sub seconds")]
#[test_case("+1s", Some((1, DUR_OFFSET_TYPE::Now)); "add seconds")]
#[test_case("-4m2s", Some((-242, DUR_OFFSET_TYPE::Now)); "sub minutes seconds")]
#[test_case("+1h30m", Some((5400, DUR_OFFSET_TYPE::Now)); "add hours minutes")]
#[test_case("-1d", Some((-86400, DUR_OFFSET_TYPE::Now)); "sub day")]
#[test_case("-1w22h", Some((-(604800 + 22 * 3600), DUR_OFFSET_TYPE::Now)); "sub week hours")]
#[test_case("@+1d", Some((86400, DUR_OFFSET_TYPE::Other)); "other add day")]
#[test_case("@-4h1d", Some((-(86400 + 4 * 3600), DUR_OFFSET_TYPE::Other)); "units any order")]
#[test_case("-", None; "sign only")]
#[test_case("@+", None; "at sign only")]
#[test_case("1d", None; "no sign")]
#[test_case("-1x", None; "bad unit")]
#[test_case("-1d ", None; "trailing space")]
#[test_case("", None; "empty")]
#[test_case("2019-09-16", None; "a date")]
fn test_string_wdhms_to_duration(
    val: &str,
    expect: Option<(i64, DUR_OFFSET_TYPE)>,
) {
    stack_offset_set(Some(2));
    let result = string_wdhms_to_duration(val).unwrap();
    let expect_ = expect.map(|(secs, type_)| (Duration::try_seconds(secs).unwrap(), type_));
    assert_eq!(result, expect_, "val {:?}", val);
    assert_eq!(
        is_rel_offset_other(val),
        matches!(expect, Some((_, DUR_OFFSET_TYPE::Other))),
    );
}

#[test_case("-99999999999999999999s"; "too many digits")]
#[test_case("+999999999999999w"; "too many weeks")]
fn test_string_wdhms_to_duration_err(val: &str) {
    match string_wdhms_to_duration(val) {
        Err(SettingsError::Duration(val_)) => assert_eq!(val_, val),
        result => panic!("expected Err(Duration), got {:?}", result),
    }
}

#[test]
fn test_string_to_rel_offset_datetime_now_truncated() {
    // fractional seconds of now are dropped
    let now = Utc.with_ymd_and_hms(2020, 6, 15, 12, 0, 0).unwrap() + Duration::try_milliseconds(500).unwrap();
    let other = dt0(2000, 1, 2, 3, 4, 5);
    let dt = string_to_rel_offset_datetime("-1s", &FO_0, &other, &now).unwrap();
    assert_eq!(dt, Some(dt0(2020, 6, 15, 11, 59, 59)));
    let dt = string_to_rel_offset_datetime("@+1s", &FO_0, &other, &now).unwrap();
    assert_eq!(dt, Some(dt0(2000, 1, 2, 3, 4, 6)));
    let dt = string_to_rel_offset_datetime("2020-01-01", &FO_0, &other, &now).unwrap();
    assert_eq!(dt, None);
}

#[test]
fn test_string_to_rel_offset_datetime_overflow() {
    let other = datetime_min();
    let result = string_to_rel_offset_datetime("@-1d", &FO_0, &other, &NOW_UTC);
    assert!(matches!(result, Err(SettingsError::Duration(_))), "{:?}", result);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// bounds
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case("2019-09-16 17:20", &FO_0, dt0(2019, 9, 16, 17, 20, 0); "datetime")]
#[test_case("2019-09-16 17:20", &FO_M7, ymdhms(&FO_M7, 2019, 9, 16, 17, 20, 0).unwrap(); "datetime tz offset")]
#[test_case("20220102", &FO_0, dt0(2022, 1, 2, 0, 0, 0); "date only")]
#[test_case("+946684800", &FO_0, dt0(2000, 1, 1, 0, 0, 0); "epoch")]
#[test_case("12:30", &FO_0, dt0(2020, 6, 15, 12, 30, 0); "clock time")]
#[test_case("12:30:15", &FO_0, dt0(2020, 6, 15, 12, 30, 15); "clock time seconds")]
#[test_case("12:30", &FO_P9, ymdhms(&FO_P9, 2020, 6, 15, 12, 30, 0).unwrap(); "clock time tz offset")]
#[test_case("-1d", &FO_0, dt0(2020, 6, 14, 12, 0, 0); "relative now")]
#[test_case("+1h30m", &FO_0, dt0(2020, 6, 15, 13, 30, 0); "relative now future")]
#[test_case("-1w", &FO_0, dt0(2020, 6, 8, 12, 0, 0); "relative now week")]
#[test_case("@+1s", &FO_0, dt0(2000, 1, 2, 3, 4, 6); "relative other")]
#[test_case("@-4h1d", &FO_0, dt0(2000, 1, 1, 23, 4, 5); "relative other sub")]
fn test_process_dt(
    dts: &str,
    tz_offset: &FixedOffset,
    expect: DateTimeL,
) {
    stack_offset_set(Some(2));
    let other = dt0(2000, 1, 2, 3, 4, 5);
    let dt = process_dt(OPTION_AFTER, dts, tz_offset, &other, &NOW_UTC).unwrap();
    assert_eq!(dt, expect, "dts {:?}", dts);
}

#[test_case("not a date"; "words")]
#[test_case(""; "empty")]
#[test_case("-"; "sign only")]
#[test_case("1d"; "no sign")]
#[test_case("25:00"; "bad clock time")]
fn test_process_dt_err(dts: &str) {
    let other = dt0(2000, 1, 2, 3, 4, 5);
    match process_dt(OPTION_BEFORE, dts, &FO_0, &other, &NOW_UTC) {
        Err(err @ SettingsError::DateTime { .. }) => {
            assert_eq!(err.to_string(), format!("failed to parse date '{}' for --before", dts));
        }
        result => panic!("expected Err(DateTime), got {:?}", result),
    }
}

#[test]
fn test_process_window_defaults() {
    let window = process_window(None, None, &FO_0, &NOW_UTC).unwrap();
    assert_eq!(window, TimeWindow::until(&NOW_UTC));
}

#[test_case(Some("2019-09-16 17:20"), Some("2019-09-16 17:22"), dt0(2019, 9, 16, 17, 20, 0), dt0(2019, 9, 16, 17, 22, 0); "absolute")]
#[test_case(Some("20220102"), Some("@+1d"), dt0(2022, 1, 2, 0, 0, 0), dt0(2022, 1, 3, 0, 0, 0); "before relative to after")]
#[test_case(Some("@-6h"), Some("20220101T120000"), dt0(2022, 1, 1, 6, 0, 0), dt0(2022, 1, 1, 12, 0, 0); "after relative to before")]
#[test_case(Some("@-1d"), None, dt0(2020, 6, 14, 12, 0, 0), dt0(2020, 6, 15, 12, 0, 0); "after relative to now before")]
#[test_case(Some("-2d"), Some("-1d"), dt0(2020, 6, 13, 12, 0, 0), dt0(2020, 6, 14, 12, 0, 0); "both relative to now")]
fn test_process_window(
    after: Option<&str>,
    before: Option<&str>,
    expect_after: DateTimeL,
    expect_before: DateTimeL,
) {
    stack_offset_set(Some(2));
    let window = process_window(after, before, &FO_0, &NOW_UTC).unwrap();
    assert_eq!(window.after, expect_after);
    assert_eq!(window.before, expect_before);
}

#[test]
fn test_process_window_before_only() {
    let window = process_window(None, Some("2019-09-16 17:22"), &FO_0, &NOW_UTC).unwrap();
    assert_eq!(window.after, datetime_min());
    assert_eq!(window.before, dt0(2019, 9, 16, 17, 22, 0));
    assert_lt!(window.after, window.before);
}

#[test]
fn test_process_window_relative_both() {
    match process_window(Some("@-1d"), Some("@+1d"), &FO_0, &NOW_UTC) {
        Err(err @ SettingsError::RelativeBoth) => {
            assert_eq!(err.to_string(), "cannot pass both --after and --before as relative to the other");
        }
        result => panic!("expected Err(RelativeBoth), got {:?}", result),
    }
}

#[test_case(Some("bad"), None, OPTION_AFTER; "bad after")]
#[test_case(None, Some("bad"), OPTION_BEFORE; "bad before")]
#[test_case(Some("2019-09-16"), Some("bad"), OPTION_BEFORE; "good after bad before")]
fn test_process_window_err(
    after: Option<&str>,
    before: Option<&str>,
    expect_option: &str,
) {
    match process_window(after, before, &FO_0, &NOW_UTC) {
        Err(SettingsError::DateTime { option, value }) => {
            assert_eq!(option, expect_option);
            assert_eq!(value, "bad");
        }
        result => panic!("expected Err(DateTime), got {:?}", result),
    }
}

#[test]
fn test_process_window_utc_now_type() {
    // the window is independent of the `now` timezone
    let now: DateTime<Utc> = *NOW_UTC;
    let window = process_window(Some("-1h"), None, &FO_P9, &now).unwrap();
    assert_eq!(window.after, now - Duration::try_hours(1).unwrap());
    assert_eq!(window.after.offset(), &*FO_P9);
}
