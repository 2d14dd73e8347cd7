// src/data/fields.rs

//! Functions to split a line of bytes into fields, select fields by
//! position, and find the datetime substring among the selected fields.
//!
//! The per-line order of operations is:
//! 1. [`split_fields`] on the delimiter
//! 2. [`collapse_separators`] so runs of repeated delimiters do not
//!    shift field positions further
//! 3. [`select_fields`] by 1-based [`FieldPosition`]s
//! 4. [`join_fields`] with the delimiter, then [`extract_date_text`] with the
//!    user regular expression
//!
//! All functions borrow from the passed line; no field is copied until
//! `join_fields`.

use crate::common::{Bytes, SettingsError};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::buffer_to_String_noraw;

use ::bstr::ByteSlice; // provides `.find()` on `&[u8]`
use ::regex::bytes::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Fields
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One substring of a line, between delimiters.
pub type Field<'a> = &'a [u8];

/// Ordered sequence of [`Field`]s of one line.
pub type Fields<'a> = Vec<Field<'a>>;

/// 1-based position of a [`Field`]. Values `≤ 0` are permitted and are
/// ignored by [`select_fields`].
pub type FieldPosition = i64;

/// Ordered sequence of [`FieldPosition`]s; order and duplicates are kept.
pub type FieldPositions = Vec<FieldPosition>;

/// Separator between [`FieldPosition`]s in a user-passed string, e.g. `"1,2"`.
pub const FIELD_POSITIONS_SEP: char = ',';

/// Split `line` on every occurrence of `delimiter`.
///
/// An empty `line` returns one empty [`Field`]. A line of `n` delimiters
/// returns `n + 1` empty `Field`s. Joining the returned `Fields` with
/// `delimiter` reproduces `line`.
///
/// `delimiter` must not be empty; [`FilterSettings`] refuses an empty
/// delimiter.
///
/// [`FilterSettings`]: crate::readers::linefilter::FilterSettings
pub fn split_fields<'a>(
    line: &'a [u8],
    delimiter: &[u8],
) -> Fields<'a> {
    debug_assert!(!delimiter.is_empty(), "split_fields passed an empty delimiter");
    let mut fields: Fields<'a> = Fields::with_capacity(8);
    if delimiter.is_empty() {
        fields.push(line);
        return fields;
    }
    let mut rest: &'a [u8] = line;
    while let Some(at) = rest.find(delimiter) {
        fields.push(&rest[..at]);
        rest = &rest[at + delimiter.len()..];
    }
    fields.push(rest);

    fields
}

/// Reduce every run of consecutive empty [`Field`]s to a single empty
/// `Field` at the start of the run.
///
/// A leading run, or a run that is the entire sequence, still leaves one
/// empty placeholder. Non-empty `Field`s keep their relative order.
///
/// ```
/// use dflib::data::fields::collapse_separators;
/// let fields: Vec<&[u8]> = vec![b"a", b"", b"", b"b"];
/// let expect: Vec<&[u8]> = vec![b"a", b"", b"b"];
/// assert_eq!(collapse_separators(&fields), expect);
/// ```
pub fn collapse_separators<'a>(fields: &[Field<'a>]) -> Fields<'a> {
    let mut collapsed: Fields<'a> = Fields::with_capacity(fields.len());
    let mut prior_empty: bool = false;
    for field in fields.iter() {
        if field.is_empty() {
            if prior_empty {
                continue;
            }
            prior_empty = true;
        } else {
            prior_empty = false;
        }
        collapsed.push(*field);
    }

    collapsed
}

/// Select [`Field`]s at the 1-based `positions`, in the order of
/// `positions`.
///
/// Positions `≤ 0` or beyond `fields.len()` are skipped; this is not an
/// error. The returned `Fields` may be empty.
pub fn select_fields<'a>(
    fields: &[Field<'a>],
    positions: &[FieldPosition],
) -> Fields<'a> {
    let mut selected: Fields<'a> = Fields::with_capacity(positions.len());
    for position in positions.iter() {
        if *position < 1 {
            continue;
        }
        let index: usize = match usize::try_from(*position - 1) {
            Ok(val) => val,
            Err(_) => continue,
        };
        if let Some(field) = fields.get(index) {
            selected.push(*field);
        }
    }

    selected
}

/// Join `fields` with `delimiter` into one new buffer.
pub fn join_fields(
    fields: &[Field],
    delimiter: &[u8],
) -> Bytes {
    ::bstr::join(delimiter, fields.iter())
}

/// Return the leftmost-first match of `regex` within `joined`, or an empty
/// slice if there is no match.
pub fn extract_date_text<'a>(
    joined: &'a [u8],
    regex: &Regex,
) -> &'a [u8] {
    match regex.find(joined) {
        Some(match_) => {
            defñ!("regex {:?} matched {:?}", regex.as_str(), buffer_to_String_noraw(match_.as_bytes()));

            match_.as_bytes()
        }
        None => {
            defñ!("regex {:?} no match in {:?}", regex.as_str(), buffer_to_String_noraw(joined));

            &joined[..0]
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// user-passed configuration strings
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Parse a comma-separated list of field positions, e.g. `"1,2"`.
///
/// Empty list entries are skipped, so `""` is an empty list and `"1,,3"` is
/// `[1, 3]`. Any other entry that is not an integer is an error.
pub fn parse_positions(elements: &str) -> Result<FieldPositions, SettingsError> {
    defn!("({:?})", elements);
    let mut positions = FieldPositions::new();
    for element in elements
        .split(FIELD_POSITIONS_SEP)
        .filter(|s| !s.is_empty())
    {
        match element.parse::<FieldPosition>() {
            Ok(val) => positions.push(val),
            Err(_err) => {
                defx!("parse {:?} failed {}", element, _err);
                return Err(SettingsError::InvalidPosition(String::from(element)));
            }
        }
    }
    defx!("return {:?}", positions);

    Ok(positions)
}

/// Compile the user-passed datetime extraction regular expression.
pub fn compile_pattern(pattern: &str) -> Result<Regex, SettingsError> {
    defñ!("({:?})", pattern);

    Regex::new(pattern).map_err(SettingsError::Pattern)
}
