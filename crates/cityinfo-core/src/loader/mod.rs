// crates/cityinfo-core/src/loader/mod.rs

//! # Line Source
//!
//! Handles the physical layer: opening the backing data (optionally gzip
//! compressed) and handing out one record line at a time. Blank lines are
//! not records and are skipped both when reading and when counting.

use crate::common::MAX_LINE_LEN;
use crate::error::{CityInfoError, Result};
use std::io::{BufRead, Seek, SeekFrom};
use std::path::Path;

mod common_io;

pub use common_io::{open_stream, SeekBufRead};

/// Sequential reader of record lines.
pub struct LineSource<R> {
    reader: R,
    raw: Vec<u8>,
    line: String,
    /// Physical line number of the last line read, 1-based.
    line_no: usize,
}

impl LineSource<Box<dyn SeekBufRead>> {
    /// Open the backing data at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("opening city database {}", path.display());
        Ok(Self::new(open_stream(path)?))
    }
}

impl<R: BufRead + Seek> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            raw: Vec::with_capacity(MAX_LINE_LEN),
            line: String::with_capacity(MAX_LINE_LEN),
            line_no: 0,
        }
    }

    /// Physical line number of the last line returned, 1-based.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Read the next record, without its line terminator.
    ///
    /// Returns `Ok(None)` at end of data. A line that does not fit in
    /// [`MAX_LINE_LEN`] is consumed and reported as
    /// [`CityInfoError::LineTooLong`]; reading may continue after it.
    pub fn next_record(&mut self) -> Result<Option<&str>> {
        loop {
            self.raw.clear();
            let n = self.reader.read_until(b'\n', &mut self.raw)?;
            if n == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            if n >= MAX_LINE_LEN {
                return Err(CityInfoError::LineTooLong {
                    line: self.line_no,
                    len: n,
                });
            }

            let content = trim_terminator(&self.raw);
            if content.is_empty() {
                continue;
            }
            self.line.clear();
            self.line.push_str(&String::from_utf8_lossy(content));
            return Ok(Some(self.line.as_str()));
        }
    }

    /// Skip `n` records, returning how many were actually skipped.
    ///
    /// Lines that are too long still occupy a position and are skipped too.
    pub fn skip_records(&mut self, n: usize) -> Result<usize> {
        let mut skipped = 0;
        while skipped < n {
            match self.next_record() {
                Ok(Some(_)) => skipped += 1,
                Ok(None) => break,
                Err(e) if e.is_record_local() => skipped += 1,
                Err(e) => return Err(e),
            }
        }
        Ok(skipped)
    }

    /// Count all records in the data.
    ///
    /// The count covers the whole source regardless of the current read
    /// position, which is restored afterwards.
    pub fn count_records(&mut self) -> Result<usize> {
        let pos = self.reader.stream_position()?;
        self.reader.rewind()?;

        let mut count = 0;
        let mut raw = Vec::with_capacity(MAX_LINE_LEN);
        loop {
            raw.clear();
            if self.reader.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            if !trim_terminator(&raw).is_empty() {
                count += 1;
            }
        }

        self.reader.seek(SeekFrom::Start(pos))?;
        Ok(count)
    }
}

fn trim_terminator(raw: &[u8]) -> &[u8] {
    let mut end = raw.len();
    while end > 0 && matches!(raw[end - 1], b'\n' | b'\r') {
        end -= 1;
    }
    &raw[..end]
}
