//! Local directory sink.

use crate::{ExportSink, SinkError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Sink that writes documents into a directory on the local file system.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Sink writing into an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Pick a download directory by capability.
    ///
    /// An explicitly supplied directory wins. Otherwise the host's download
    /// directory is used when it can be discovered, then the home directory.
    /// Fails with [`SinkError::UnsupportedEnvironment`] when none of these
    /// is available; there is no further fallback.
    pub fn detect(explicit: Option<PathBuf>) -> Result<Self, SinkError> {
        if let Some(dir) = explicit {
            return Ok(Self::new(dir));
        }

        if let Some(dir) = dirs::download_dir() {
            debug!("using download directory {}", dir.display());
            return Ok(Self::new(dir));
        }

        if let Some(dir) = dirs::home_dir() {
            debug!(
                "no download directory, falling back to home directory {}",
                dir.display()
            );
            return Ok(Self::new(dir));
        }

        Err(SinkError::UnsupportedEnvironment(
            "neither a download nor a home directory is available".to_string(),
        ))
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn save(&self, bytes: &[u8], file_name: &str) -> Result<(), SinkError> {
        let io_err = |source| SinkError::Io {
            file_name: file_name.to_string(),
            source,
        };

        // Write into a temporary file in the target directory, then persist
        // to the final name. The temporary is unlinked on drop, so every
        // early-exit path releases it.
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(io_err)?;
        tmp.write_all(bytes).map_err(io_err)?;
        tmp.flush().map_err(io_err)?;

        let dest = self.dir.join(file_name);
        tmp.persist(&dest).map_err(|e| io_err(e.error))?;

        info!("saved {} bytes to {}", bytes.len(), dest.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        sink.save(b"a,b\r\n1,2\r\n", "report.csv").unwrap();

        let contents = std::fs::read_to_string(dir.path().join("report.csv")).unwrap();
        assert_eq!(contents, "a,b\r\n1,2\r\n");
    }

    #[test]
    fn test_save_leaves_no_temporary_behind() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        sink.save(b"x\r\n", "out.csv").unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("out.csv")]);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        sink.save(b"old", "out.csv").unwrap();
        sink.save(b"new", "out.csv").unwrap();

        let contents = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
        assert_eq!(contents, "new");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let sink = DirectorySink::new(missing);

        let err = sink.save(b"x", "out.csv").unwrap_err();
        assert!(matches!(err, SinkError::Io { .. }));
    }

    #[test]
    fn test_detect_prefers_explicit_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::detect(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(sink.dir(), dir.path());
    }
}
