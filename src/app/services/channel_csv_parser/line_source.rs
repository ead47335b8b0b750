//! Pull-based line source for the parser phases
//!
//! The parser never touches the byte stream directly: it pulls lines from
//! this source, which owns the running line counter and the cancellation
//! check. Tests feed in-memory byte slices through the same path as real
//! files.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};
use tokio_util::sync::CancellationToken;

use crate::{Error, Result};

/// Forward-only line reader with position tracking
///
/// The counter advances for every line handed out, blank lines included, so
/// line numbers reported in warnings always match the physical file.
pub struct LineSource<R> {
    lines: Lines<BufReader<R>>,
    line_number: usize,
    cancel: CancellationToken,
}

impl<R: AsyncRead + Unpin> LineSource<R> {
    /// Wrap a byte stream; reading starts at line 1
    pub fn new(reader: R, cancel: CancellationToken) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            line_number: 0,
            cancel,
        }
    }

    /// Read the next line, or `None` at end of input
    ///
    /// Checks the cancellation token before every read; a fired token turns
    /// into the distinct `Cancelled` condition rather than an I/O error.
    pub async fn next_line(&mut self) -> Result<Option<String>> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled {
                line: self.line_number,
            });
        }

        let line = self.lines.next_line().await.map_err(|e| {
            Error::io(
                format!("failed reading line {}", self.line_number + 1),
                e,
            )
        })?;

        if line.is_some() {
            self.line_number += 1;
        }

        Ok(line)
    }

    /// Number of the most recently returned line (1-based; 0 before any read)
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
