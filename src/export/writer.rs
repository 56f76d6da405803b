use std::io::Write;

use super::config::TableFormat;
use super::error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    Header,
    Rows,
    Done,
}

/// Streaming writer for delimited tables
///
/// The header must be handled first (written, or skipped when the format
/// disables it), then any number of rows, then `finish`. The underlying
/// output is flushed but never closed.
pub struct TableWriter<'w, W: Write + ?Sized> {
    out: &'w mut W,
    format: &'w TableFormat,
    state: WriterState,
    rows_written: usize,
}

impl<'w, W: Write + ?Sized> TableWriter<'w, W> {
    /// Create a writer in the header state
    pub fn new(out: &'w mut W, format: &'w TableFormat) -> Self {
        Self {
            out,
            format,
            state: WriterState::Header,
            rows_written: 0,
        }
    }

    /// Write the header row, when the format asks for one
    pub fn write_header<'t, I>(&mut self, titles: I) -> Result<(), ExportError>
    where
        I: IntoIterator<Item = &'t str>,
    {
        if self.state != WriterState::Header {
            return Err(ExportError::InvalidState("header written twice"));
        }
        self.state = WriterState::Rows;

        if !self.format.include_header {
            return Ok(());
        }

        // empty cell above the index column
        let mut first = !self.format.include_index;
        for title in titles {
            if !first {
                self.out.write_all(self.format.delimiter.as_bytes())?;
            }
            self.out.write_all(title.as_bytes())?;
            first = false;
        }
        self.out.write_all(self.format.line_terminator.as_bytes())?;
        Ok(())
    }

    /// Write one data row
    pub fn write_row<S: AsRef<str>>(&mut self, cells: &[S]) -> Result<(), ExportError> {
        match self.state {
            WriterState::Rows => {}
            WriterState::Header => return Err(ExportError::InvalidState("row before header")),
            WriterState::Done => return Err(ExportError::InvalidState("row after finish")),
        }

        let delimiter = self.format.delimiter.as_bytes();
        if self.format.include_index {
            write!(self.out, "{}", self.rows_written + 1)?;
            self.out.write_all(delimiter)?;
        }
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 && !self.format.trailing_delimiter {
                self.out.write_all(delimiter)?;
            }
            self.out.write_all(cell.as_ref().as_bytes())?;
            if self.format.trailing_delimiter {
                self.out.write_all(delimiter)?;
            }
        }
        self.out.write_all(self.format.line_terminator.as_bytes())?;

        self.rows_written += 1;
        Ok(())
    }

    /// Rows written so far
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush the output and return the number of rows written
    pub fn finish(&mut self) -> Result<usize, ExportError> {
        if self.state == WriterState::Done {
            return Err(ExportError::InvalidState("finish called twice"));
        }
        self.state = WriterState::Done;
        self.out.flush()?;
        Ok(self.rows_written)
    }
}
