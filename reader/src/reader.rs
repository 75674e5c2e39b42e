//! File-backed CSV reading: header extraction and the lazy row stream.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv2sql_core::{Dialect, Header, Row};
use tracing::debug;

use crate::error::{ReadError, Result};
use crate::parse::RecordParser;

/// Opens `path` and returns its header plus a lazy stream of data rows.
///
/// The first record of the file becomes the header; the remaining records
/// are exposed through [`Rows`], which reads from the same open handle and
/// therefore never yields the header row. The stream is forward-only and
/// not restartable — call `read` again to iterate a second time.
///
/// # Errors
///
/// Returns [`ReadError::NotFound`] if the path does not exist (checked
/// before any open or parse), [`ReadError::MissingHeader`] if the file
/// contains no records at all, and [`ReadError::Parse`] if the header
/// record is malformed under a strict dialect.
pub fn read(path: impl AsRef<Path>, dialect: &Dialect) -> Result<(Header, Rows)> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ReadError::NotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "reading CSV input");
    let file = File::open(path)?;
    let mut rows = Rows {
        reader: BufReader::new(file),
        parser: RecordParser::new(dialect.clone()),
        line_no: 0,
    };

    let header = rows
        .next()
        .transpose()?
        .ok_or_else(|| ReadError::MissingHeader(path.to_path_buf()))?;

    Ok((header, rows))
}

/// Lazy, forward-only stream of data rows.
///
/// Owns the open file handle for the duration of iteration; the handle is
/// released when the stream is dropped or exhausted. Each item is a parsed
/// [`Row`], or an error for I/O failures and strict-mode parse failures.
#[derive(Debug)]
pub struct Rows {
    reader: BufReader<File>,
    parser: RecordParser,
    line_no: u64,
}

impl Iterator for Rows {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = match next_line(&mut self.reader)? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        self.line_no += 1;

        let Self {
            reader,
            parser,
            line_no,
        } = self;
        Some(parser.parse_record(first, line_no, || next_line(reader)))
    }
}

/// Reads one physical line with its terminator stripped (`\n`, or `\r\n`
/// collapsed). Returns `None` at end of input.
fn next_line<R: BufRead>(reader: &mut R) -> Option<std::io::Result<String>> {
    let mut buf = String::new();
    match reader.read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => {
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Some(Ok(buf))
        }
        Err(e) => Some(Err(e)),
    }
}
