use std::path::PathBuf;

use client_core::{download::write_file, DownloadError, DownloadSink, MarkdownFile};

/// Asks for a destination with the native save dialog, suggesting the
/// page's filename.
pub struct SaveDialogSink;

impl DownloadSink for SaveDialogSink {
    fn deliver(&mut self, file: &MarkdownFile) -> Result<Option<PathBuf>, DownloadError> {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&file.filename)
            .add_filter("Markdown", &["md"])
            .save_file()
        else {
            return Ok(None);
        };
        write_file(&path, &file.bytes)?;
        Ok(Some(path))
    }
}
