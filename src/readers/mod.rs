// src/readers/mod.rs

//! "Readers" for _dflib_.
//!
//! ## Overview of readers
//!
//! * A [`LineFilter`] drives a [`LineReader`] to read lines, and decides
//!   which lines are written.
//! * A `LineReader` reads [`Line`s] from a [`BufRead`].
//!
//! <br/>
//!
//! * A `LineReader` only handles `u8` bytes.
//! * A `LineFilter` converts to `char` only for the datetime text of a line.
//!
//! <br/>
//!
//! Also see [_Definitions of data_].
//!
//! <br/>
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [_Definitions of data_]: crate::data
//! [`Read`]: std::io::Read
//! [`BufRead`]: std::io::BufRead
//! [`Line`s]: crate::data
//! [`LineFilter`]: crate::readers::linefilter::LineFilter
//! [`LineReader`]: crate::readers::linereader::LineReader

pub mod linefilter;
pub mod linereader;
pub mod summary;
