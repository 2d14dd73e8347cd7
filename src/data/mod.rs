// src/data/mod.rs

//! The `data` module is functions and containers for the data of one line:
//! its [`Field`]s, the datetime parsed from the fields, and the
//! [`TimeWindow`] the datetime is compared to.
//!
//! ## Definitions of data
//!
//! ### Line
//!
//! A "line" is a sequence of bytes that:
//!
//! * begin after a prior "line" or the beginning of input.
//! * end with a newline character `'\n'` or the end of input.
//!
//! The newline, and a `'\r'` directly before it, are not part of the line.
//! A "line" is found by a [`LineReader`].
//!
//! ### Field
//!
//! A "field" is a substring of a "line" between delimiters. Fields are
//! selected by 1-based position.
//!
//! ### Datetime
//!
//! A "datetime" is parsed from the text matched by a regular expression
//! within the selected fields joined by the delimiter.
//!
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`Field`]: crate::data::fields::Field
//! [`TimeWindow`]: crate::data::window::TimeWindow

pub mod datetime;
pub mod fields;
pub mod window;
