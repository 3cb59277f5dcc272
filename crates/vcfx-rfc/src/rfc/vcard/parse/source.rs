//! Seekable physical-line sources.
//!
//! Every pass over a source starts with [`LineSource::rewind`]. A source
//! that is read twice without rewinding yields nothing the second time.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

use crate::error::RfcResult;

/// A source of physical lines that can be restarted from line 0.
pub trait LineSource {
    /// Reads the next physical line, terminator included.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidSource` if the underlying read fails.
    fn next_line(&mut self) -> RfcResult<Option<String>>;

    /// Moves the cursor back to the first line.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidSource` if the source cannot be rewound.
    fn rewind(&mut self) -> RfcResult<()>;
}

/// Line source over any buffered, seekable reader.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead + Seek> ReaderSource<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl ReaderSource<Cursor<String>> {
    /// Creates an in-memory source over already decoded text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(Cursor::new(text.into()))
    }
}

/// Line source over a file on disk.
pub type FileSource = ReaderSource<BufReader<File>>;

impl FileSource {
    /// Opens the file at `path` for line reading.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidSource` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> RfcResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to open vCard source");
        })?;

        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead + Seek> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> RfcResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }

    fn rewind(&mut self) -> RfcResult<()> {
        self.reader.rewind()?;
        Ok(())
    }
}

/// Iterator over `(line number, line)` pairs of one pass.
pub struct SourceLines<'s, S: ?Sized> {
    source: &'s mut S,
    line: usize,
    done: bool,
}

/// Starts a fresh pass over `source`, rewinding it first.
///
/// ## Errors
/// Returns an error if the source cannot be rewound.
pub fn lines<S: LineSource + ?Sized>(source: &mut S) -> RfcResult<SourceLines<'_, S>> {
    source.rewind()?;

    Ok(SourceLines {
        source,
        line: 0,
        done: false,
    })
}

impl<S: LineSource + ?Sized> Iterator for SourceLines<'_, S> {
    type Item = RfcResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.source.next_line() {
            Ok(Some(text)) => {
                let line = self.line;
                self.line += 1;
                Some(Ok((line, text)))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_terminators() {
        let mut source = ReaderSource::from_text("BEGIN:VCARD\r\nFN:Jane\r\nEND:VCARD");
        let read: Vec<_> = lines(&mut source)
            .unwrap()
            .collect::<RfcResult<_>>()
            .unwrap();

        assert_eq!(
            read,
            vec![
                (0, "BEGIN:VCARD\r\n".to_string()),
                (1, "FN:Jane\r\n".to_string()),
                (2, "END:VCARD".to_string()),
            ]
        );
    }

    #[test]
    fn exhausted_source_is_empty_until_rewound() {
        let mut source = ReaderSource::from_text("A:1\r\nB:2\r\n");
        while source.next_line().unwrap().is_some() {}

        assert!(source.next_line().unwrap().is_none());

        source.rewind().unwrap();
        assert_eq!(source.next_line().unwrap().as_deref(), Some("A:1\r\n"));
    }

    #[test]
    fn each_pass_starts_at_line_zero() {
        let mut source = ReaderSource::from_text("A:1\r\nB:2\r\n");
        let first = lines(&mut source).unwrap().count();
        let second = lines(&mut source).unwrap().count();
        assert_eq!(first, 2);
        assert_eq!(second, 2);
    }

    #[test]
    fn open_missing_file_is_invalid_source() {
        let err = FileSource::open("/nonexistent/vcfx/missing.vcf").unwrap_err();
        assert!(matches!(err, crate::error::RfcError::InvalidSource(_)));
    }
}
