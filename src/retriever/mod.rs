//! Rule-list sources.
//!
//! A [`ListRetriever`] hands the engine a release tag and the raw list text
//! for that release. The engine never fetches anything itself; network
//! sources live outside this crate and implement the trait.

use std::fs;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::error::{PslError, Result, RetrieverErrorKind};

/// Trait for retrieving public suffix list releases
pub trait ListRetriever: Send + Sync {
    /// Tag identifying the latest available release
    fn latest_release(&self) -> Result<String>;

    /// Raw list text for `release`
    fn fetch_list(&self, release: &str) -> Result<Box<dyn BufRead + Send>>;
}

fn retriever_error(kind: RetrieverErrorKind, message: String) -> PslError {
    PslError::Retriever { kind, message }
}

/// In-memory ListRetriever for testing and embedded lists
#[derive(Debug, Clone, Default)]
pub struct MemoryListRetriever {
    release: String,
    list: String,
    error: Option<String>,
}

impl MemoryListRetriever {
    pub fn new(release: impl Into<String>, list: impl Into<String>) -> Self {
        Self {
            release: release.into(),
            list: list.into(),
            error: None,
        }
    }

    /// Make every call fail with `message`
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

impl ListRetriever for MemoryListRetriever {
    fn latest_release(&self) -> Result<String> {
        match self.error {
            Some(ref message) => Err(retriever_error(
                RetrieverErrorKind::ReleaseUnavailable,
                message.clone(),
            )),
            None => Ok(self.release.clone()),
        }
    }

    fn fetch_list(&self, release: &str) -> Result<Box<dyn BufRead + Send>> {
        if let Some(ref message) = self.error {
            return Err(retriever_error(
                RetrieverErrorKind::ListUnavailable,
                format!("release {}: {}", release, message),
            ));
        }
        Ok(Box::new(Cursor::new(self.list.clone().into_bytes())))
    }
}

/// File-based ListRetriever reading a `public_suffix_list.dat` copy.
///
/// Without an explicit release the tag is derived from the file's
/// modification time, so rewriting the file yields a new release.
#[derive(Debug, Clone)]
pub struct FileListRetriever {
    path: PathBuf,
    release: Option<String>,
}

impl FileListRetriever {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            release: None,
        }
    }

    /// Set an explicit release tag (overrides modification-time tags)
    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = Some(release.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListRetriever for FileListRetriever {
    fn latest_release(&self) -> Result<String> {
        if let Some(ref release) = self.release {
            return Ok(release.clone());
        }

        let unavailable = |e: std::io::Error| {
            retriever_error(
                RetrieverErrorKind::ReleaseUnavailable,
                format!("cannot stat {}: {}", self.path.display(), e),
            )
        };

        let mtime = fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .map_err(unavailable)?;
        let nanos = mtime
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);

        Ok(format!("mtime-{}", nanos))
    }

    fn fetch_list(&self, release: &str) -> Result<Box<dyn BufRead + Send>> {
        let file = fs::File::open(&self.path).map_err(|e| {
            retriever_error(
                RetrieverErrorKind::ListUnavailable,
                format!(
                    "release {}: failed to open {}: {}",
                    release,
                    self.path.display(),
                    e
                ),
            )
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}
