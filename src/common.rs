// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// custom Results enums
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `Result` Extended
/// for line reading functions
#[derive(Debug, PartialEq)]
pub enum ResultS3<T, E> {
    /// Contains the success data
    Found(T),
    /// Input is exhausted, nothing to return, but no bad errors happened
    Done,
    /// Contains the error value, something bad happened
    Err(E),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Lines
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A general-purpose counting type
pub type Count = u64;

/// 1-based count of a line read from input, used in diagnostics
pub type LineNumber = u64;

/// Sequence of Bytes
pub type Bytes = Vec<u8>;

/// Single-byte newLine char as u8
#[allow(non_upper_case_globals)]
pub const NLu8: u8 = 10;
/// Newline in a byte buffer
#[allow(non_upper_case_globals)]
pub const NLu8a: [u8; 1] = [NLu8];
/// Carriage Return char as u8, stripped from the end of `"\r\n"` lines
#[allow(non_upper_case_globals)]
pub const CRu8: u8 = 13;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// configuration errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A fatal error in user-passed configuration. Occurs only before any input
/// line is read.
#[derive(Debug)]
pub enum SettingsError {
    /// the field delimiter was empty
    EmptyDelimiter,
    /// the field delimiter had a bad backslash escape sequence
    Escape(String),
    /// a field position could not be parsed as an integer
    InvalidPosition(String),
    /// the datetime extraction regular expression failed to compile
    Pattern(::regex::Error),
    /// a `--after` or `--before` datetime could not be parsed
    DateTime {
        option: &'static str,
        value: String,
    },
    /// a relative offset duration could not be represented
    Duration(String),
    /// `--after` and `--before` were both relative to the other
    RelativeBoth,
    /// a timezone offset could not be parsed
    TzOffset(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::EmptyDelimiter => write!(f, "delimiter must not be empty"),
            SettingsError::Escape(err) => write!(f, "invalid delimiter: {}", err),
            SettingsError::InvalidPosition(val) => write!(f, "failed to convert {} to number", val),
            SettingsError::Pattern(err) => write!(f, "invalid regular expression: {}", err),
            SettingsError::DateTime { option, value } => {
                write!(f, "failed to parse date '{}' for {}", value, option)
            }
            SettingsError::Duration(val) => write!(f, "unable to represent a duration from {:?}", val),
            SettingsError::RelativeBoth => {
                write!(f, "cannot pass both --after and --before as relative to the other")
            }
            SettingsError::TzOffset(val) => write!(f, "unable to parse a timezone offset from {:?}", val),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Pattern(err) => Some(err),
            _ => None,
        }
    }
}
