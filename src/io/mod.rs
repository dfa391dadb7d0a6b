pub mod destinations;
pub mod writers;

pub use destinations::{
    deliver, FileDestination, MemoryDestination, OutputDestination, StdoutDestination,
};

use crate::errors::{ReportError, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| ReportError::io_with_path("Failed to read file", path, e))
}
