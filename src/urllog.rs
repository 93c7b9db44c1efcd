use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::common::CheckError;
use crate::source::base::VideoRecord;

/// Append-only text file of video URLs, one per line
#[derive(Debug)]
pub struct UrlLog {
    path: PathBuf,
}

impl UrlLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> UrlLog {
        UrlLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write each video's URL on its own line, in order. The file is created
    /// if needed, even when there is nothing to write. Stops at the first
    /// video without a URL; lines already written stay.
    pub fn append(&self, videos: &[VideoRecord]) -> Result<usize, CheckError> {
        let io_err = |source| CheckError::Io {
            path: self.path.clone(),
            source,
        };

        debug!("Appending {} URLs to {}", videos.len(), self.path.display());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;

        for (i, v) in videos.iter().enumerate() {
            let url = v.url_at(i)?;
            trace!("Writing {:?} ({:?})", url, v.title());
            writeln!(file, "{}", url).map_err(io_err)?;
            file.flush().map_err(io_err)?;
        }

        Ok(videos.len())
    }
}
