//! The single-file metadata cache.
//!
//! The file holds one opaque payload which is always read and written whole. A replacement
//! truncates the file, writes the new payload and rewinds; if the process dies in between, the
//! next reader sees an empty or unparsable file, which the store treats as "needs refresh".

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::TrustStoreError;

/// A handle to the metadata cache file.
#[derive(Debug)]
pub struct CacheFile {
    path: PathBuf,
    file: File,
}

impl CacheFile {
    /// Open the cache file at `path`, creating it empty if it does not exist.
    pub fn open(path: &Path) -> Result<Self, TrustStoreError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;

        debug!(path = %path.display(), "opened metadata cache");

        Ok(CacheFile {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Location of this cache.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full payload. An empty file yields `None`.
    pub fn read(&mut self) -> Result<Option<Vec<u8>>, TrustStoreError> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut payload = Vec::new();
        self.file.read_to_end(&mut payload)?;
        self.file.seek(SeekFrom::Start(0))?;

        if payload.is_empty() {
            Ok(None)
        } else {
            Ok(Some(payload))
        }
    }

    /// Replace the payload: truncate, copy the full payload in, then reposition at the start.
    pub fn replace(&mut self, payload: &[u8]) -> Result<(), TrustStoreError> {
        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(payload)?;
        self.file.flush()?;
        self.file.sync_data()?;
        self.file.seek(SeekFrom::Start(0))?;

        trace!(len = payload.len(), "metadata cache replaced");
        Ok(())
    }
}
