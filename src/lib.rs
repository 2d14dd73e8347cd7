// src/lib.rs

//! _dflib_ is the library of the _date-filter_ program. It filters lines of
//! text by a datetime found within each line.
//!
//! A line is split into fields by a delimiter, fields are selected by
//! position, and a regular expression finds the datetime text within the
//! selected fields. Lines with a datetime within an open time window
//! `(after, before)` are written.
//!
//! ```
//! use dflib::data::datetime::{DateTime, FixedOffset, Utc};
//! use dflib::readers::linefilter::{FilterSettings, LineFilter};
//!
//! let now = DateTime::<Utc>::from_timestamp(1700000000, 0).unwrap();
//! let settings = FilterSettings::from_strs(
//!     " ",
//!     "1,2",
//!     r"[^\[].+[^\]]",
//!     Some("2019-09-16 17:20"),
//!     Some("2019-09-16 17:22"),
//!     FixedOffset::east_opt(0).unwrap(),
//!     false,
//!     &now,
//! ).unwrap();
//! let filter = LineFilter::new(settings);
//! assert!(filter.process_line(b"[2019-09-16 17:21] [ALPM] upgraded a").is_pass());
//! assert!(!filter.process_line(b"[2019-09-16 17:22] [ALPM] upgraded b").is_pass());
//! ```

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
