//! Loading input documents from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, TagCloudError};

/// Reads an entire document into memory.
///
/// Invalid UTF-8 sequences are replaced rather than rejected. A missing file is reported as
/// [`TagCloudError::InputNotFound`] so callers can tell it apart from other IO failures.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => TagCloudError::InputNotFound(path.to_path_buf()),
        _ => TagCloudError::io(err, Some(path.to_path_buf())),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
