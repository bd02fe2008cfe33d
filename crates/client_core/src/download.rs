use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use shared::protocol::MARKDOWN_MIME;
use tracing::{info, warn};

use crate::{error::DownloadError, page::ActionButton};

/// A reading packaged for saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl MarkdownFile {
    pub fn package(content: &str, filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            mime: MARKDOWN_MIME,
            bytes: content.as_bytes().to_vec(),
        }
    }
}

pub trait DownloadSink {
    /// Stores `file`; `Ok(None)` when the user declined to pick a destination.
    fn deliver(&mut self, file: &MarkdownFile) -> Result<Option<PathBuf>, DownloadError>;
}

/// Writes files into a fixed directory under their own filename.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, file: &MarkdownFile) -> Result<Option<PathBuf>, DownloadError> {
        let path = self.dir.join(&file.filename);
        write_file(&path, &file.bytes)?;
        Ok(Some(path))
    }
}

/// Writes `bytes` to `path`; the handle is closed before returning.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), DownloadError> {
    let to_error = |source| DownloadError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(to_error)?;
    file.write_all(bytes).map_err(to_error)?;
    file.flush().map_err(to_error)?;
    Ok(())
}

/// Download button behaviour for one page's fixed filename.
pub struct DownloadAction {
    filename: String,
}

impl DownloadAction {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn click(
        &self,
        button: &ActionButton,
        sink: &mut dyn DownloadSink,
    ) -> Result<Option<PathBuf>, DownloadError> {
        let file = MarkdownFile::package(button.content(), self.filename.as_str());
        match sink.deliver(&file) {
            Ok(Some(path)) => {
                info!(path = %path.display(), bytes = file.bytes.len(), "saved reading");
                Ok(Some(path))
            }
            Ok(None) => Ok(None),
            Err(err) => {
                warn!(error = %err, "saving reading failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/download_tests.rs"]
mod tests;
