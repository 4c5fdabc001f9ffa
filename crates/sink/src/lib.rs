//! Download sinks for generated CSV documents.
//!
//! The exporter produces text; a sink delivers it to the user under a file
//! name. This crate defines the [`ExportSink`] trait plus the concrete sinks,
//! so the rendering side never depends on where the bytes end up.
//!
//! # Sinks
//!
//! - [`DirectorySink`] - writes into a directory on the local file system,
//!   with capability-checked discovery of the host's download location
//! - [`StdoutSink`] - streams the document to standard output (previews)

mod local;
mod stdout;

pub use local::DirectorySink;
pub use stdout::StdoutSink;

use thiserror::Error;

/// Errors produced while saving a generated document.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The write or persist step failed.
    #[error("failed to save {file_name}: {source}")]
    Io {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    /// No usable download location could be found on this host.
    #[error("no usable download location: {0}")]
    UnsupportedEnvironment(String),
}

/// Destination for generated CSV documents.
///
/// Implementations deliver `bytes` as a file named `file_name`. The document
/// is UTF-8 encoded `text/csv` content; sinks treat it as opaque bytes.
pub trait ExportSink {
    /// Deliver `bytes` as a file named `file_name`.
    fn save(&self, bytes: &[u8], file_name: &str) -> Result<(), SinkError>;
}
