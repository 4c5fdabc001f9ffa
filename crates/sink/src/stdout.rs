//! Stdout sink for previewing exports.

use crate::{ExportSink, SinkError};
use std::io::Write;

/// Sink that streams the document to standard output.
///
/// The file name is ignored; this sink backs preview/dry-run flows where the
/// caller wants to inspect the document without touching the file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ExportSink for StdoutSink {
    fn save(&self, bytes: &[u8], _file_name: &str) -> Result<(), SinkError> {
        let io_err = |source| SinkError::Io {
            file_name: "<stdout>".to_string(),
            source,
        };

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(bytes).map_err(io_err)?;
        stdout.flush().map_err(io_err)?;
        Ok(())
    }
}
