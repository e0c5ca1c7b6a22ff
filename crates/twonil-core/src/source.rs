//! Read-only access to the raw data file bytes

use crate::error::{Error, Result};
use std::path::Path;

/// Immutable byte buffer loaded once from the data file.
///
/// All decoding works against bounded slices of this buffer; nothing
/// in the pipeline mutates it after load.
#[derive(Debug, Clone)]
pub struct ByteSource {
    data: Vec<u8>,
}

impl ByteSource {
    /// Wrap an in-memory byte buffer
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Load the buffer from a file on disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { data })
    }

    /// Total number of bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the bytes in `start..end`, bounds-checked
    pub fn slice(&self, start: usize, end: usize) -> Result<&[u8]> {
        if start > end || end > self.data.len() {
            return Err(Error::Range {
                start,
                end,
                len: self.data.len(),
            });
        }
        Ok(&self.data[start..end])
    }
}
