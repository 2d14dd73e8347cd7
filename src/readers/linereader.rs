// src/readers/linereader.rs

//! Implements a [`LineReader`], the driver of reading [`Line`s] from a
//! [`BufRead`] stream.
//!
//! [`Line`s]: crate::data
//! [`BufRead`]: std::io::BufRead

use crate::common::{Bytes, Count, CRu8, NLu8, ResultS3};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::buffer_to_String_noraw;

use std::fmt;
use std::io::{BufRead, Error, ErrorKind};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// [`LineReader.next_line()`] results.
///
/// `Found` is the line without its terminating `'\n'` or `"\r\n"`. A final
/// line without `'\n'` also drops a trailing `'\r'`.
///
/// [`LineReader.next_line()`]: self::LineReader#method.next_line
pub type ResultS3LineNext<'a> = ResultS3<&'a [u8], Error>;

/// A reader of lines from an underlying [`BufRead`]. Reuses one line buffer
/// for every line.
///
/// Line data are bytes; no UTF-8 interpretation is done.
///
/// _XXX: not a rust "Reader"; does not implement trait [`Read`]._
///
/// [`Read`]: std::io::Read
pub struct LineReader<R: BufRead> {
    reader: R,
    /// reused buffer holding the most recent line
    buffer: Bytes,
    /// `Count` of lines returned by `next_line`
    pub(super) lines_processed: Count,
    /// `Count` of bytes read, including line terminators
    pub(super) bytes_processed: Count,
}

impl<R: BufRead> fmt::Debug for LineReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("lines_processed", &self.lines_processed)
            .field("bytes_processed", &self.bytes_processed)
            .finish()
    }
}

impl<R: BufRead> LineReader<R> {
    /// Default capacity of the reused line buffer
    pub const LINE_BUFFER_SZ: usize = 0x400;

    pub fn new(reader: R) -> LineReader<R> {
        LineReader {
            reader,
            buffer: Bytes::with_capacity(Self::LINE_BUFFER_SZ),
            lines_processed: 0,
            bytes_processed: 0,
        }
    }

    /// Read the next line.
    ///
    /// Returns `Done` at the end of input. A final line without a
    /// terminating newline is still `Found`, less any trailing `'\r'`.
    /// An `Interrupted` read is retried; other read errors are returned as
    /// `Err`.
    pub fn next_line(&mut self) -> ResultS3LineNext<'_> {
        self.buffer.clear();
        let read_sz: usize = loop {
            match self.reader.read_until(NLu8, &mut self.buffer) {
                Ok(sz) => break sz,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    defñ!("read_until error {}", err);
                    return ResultS3::Err(err);
                }
            }
        };
        if read_sz == 0 {
            defñ!("Done; lines_processed {}", self.lines_processed);
            return ResultS3::Done;
        }
        self.bytes_processed += read_sz as Count;
        self.lines_processed += 1;

        let mut end: usize = self.buffer.len();
        if self.buffer[end - 1] == NLu8 {
            end -= 1;
        }
        // one `'\r'` before the `'\n'` or before the end of input
        if end > 0 && self.buffer[end - 1] == CRu8 {
            end -= 1;
        }
        let line: &[u8] = &self.buffer[..end];
        defñ!("line {} {:?}", self.lines_processed, buffer_to_String_noraw(line));

        ResultS3::Found(line)
    }

    /// `Count` of lines returned so far
    pub const fn count_lines_processed(&self) -> Count {
        self.lines_processed
    }

    /// `Count` of bytes read so far
    pub const fn count_bytes_processed(&self) -> Count {
        self.bytes_processed
    }
}
