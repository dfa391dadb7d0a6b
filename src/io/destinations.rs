//! Report sinks.
//!
//! The rendered report is handed to an `OutputDestination` as one string.
//! Files are written inside a single scope: created, written through a
//! buffer, flushed, and closed when the handle drops.
//!
//! # Example
//!
//! ```rust,ignore
//! use framework_matrix::io::destinations::{FileDestination, MemoryDestination};
//!
//! let file_dest = FileDestination::new("README.md".into());
//! file_dest.write_str("# Frameworks")?;
//!
//! let mem_dest = MemoryDestination::new();
//! mem_dest.write_str("# Frameworks")?;
//! assert!(mem_dest.get_content().contains("# Frameworks"));
//! ```

use crate::errors::{ReportError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Target that receives the rendered report.
pub trait OutputDestination: Send + Sync {
    /// Write string content to the destination.
    fn write_str(&self, content: &str) -> Result<()>;

    /// Flush any buffered content.
    fn flush(&self) -> Result<()>;

    /// Get a description of the destination for log messages.
    fn description(&self) -> String;
}

/// File system output destination. Each write replaces the file.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OutputDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| {
            ReportError::io_with_path("Failed to create report file", &self.path, e)
        })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(content.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| ReportError::io_with_path("Failed to write report file", &self.path, e))
    }

    fn flush(&self) -> Result<()> {
        // Writes flush before the handle is dropped
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory output destination for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<String>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_content(&self) -> String {
        self.buffer.read().expect("RwLock poisoned").clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.read().expect("RwLock poisoned").is_empty()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        self.buffer
            .write()
            .expect("RwLock poisoned")
            .push_str(content);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

/// Standard output destination, used for `--output -`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl StdoutDestination {
    pub fn new() -> Self {
        Self
    }
}

impl OutputDestination for StdoutDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(content.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        io::stdout().lock().flush()?;
        Ok(())
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}

/// Write the report and report the outcome on the log.
///
/// Returns whether the write succeeded; a failed write is logged at `error`
/// level and never retried.
pub fn deliver(destination: &dyn OutputDestination, content: &str) -> bool {
    match destination
        .write_str(content)
        .and_then(|()| destination.flush())
    {
        Ok(()) => {
            log::info!(
                "Wrote {} bytes to {}",
                content.len(),
                destination.description()
            );
            true
        }
        Err(e) => {
            log::error!("Could not write report to {}: {}", destination.description(), e);
            false
        }
    }
}
