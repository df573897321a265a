//! File size measurement and reporting.
//!
//! The reporter validates a user-supplied path, reads its metadata, and
//! produces a [`SizeReport`] holding the byte count plus derived KB/MB
//! views. Every failure mode is a [`SizeError`] variant that the shell
//! prints before returning to the prompt; none of them is fatal.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::utils::size::{BYTES_PER_KB, BYTES_PER_MB, kilobytes, megabytes};

/// Reasons a size measurement can fail.
#[derive(Debug, Error)]
pub enum SizeError {
    /// The user submitted an empty (or whitespace-only) path.
    #[error("no filename provided")]
    EmptyPath,

    /// The path does not name any filesystem entry.
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// The path exists but is not a regular file (a directory, for example).
    #[error("'{}' is not a regular file", .0.display())]
    NotARegularFile(PathBuf),

    /// Metadata exists but could not be read (permissions, I/O failure).
    #[error("could not read metadata for '{}': {source}", .path.display())]
    Metadata {
        /// The path whose metadata could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// The measured size of a regular file, with derived KB/MB views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    path: PathBuf,
    bytes: u64,
}

impl SizeReport {
    /// Measure the file named by raw user input.
    ///
    /// The input is trimmed first; empty input is rejected before any
    /// filesystem access happens. Symlinks are followed, so a symlink to a
    /// regular file measures the target.
    ///
    /// # Errors
    ///
    /// - [`SizeError::EmptyPath`] if the trimmed input is empty
    /// - [`SizeError::NotFound`] if the path names nothing on disk
    /// - [`SizeError::NotARegularFile`] if the path is a directory or
    ///   other special node
    /// - [`SizeError::Metadata`] if the metadata read fails for any other
    ///   reason
    pub fn measure(raw: &str) -> Result<Self, SizeError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(SizeError::EmptyPath);
        }

        Self::for_path(PathBuf::from(trimmed))
    }

    /// Measure a path that is already known to be non-empty.
    fn for_path(path: PathBuf) -> Result<Self, SizeError> {
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SizeError::NotFound(path));
            }
            Err(source) => return Err(SizeError::Metadata { path, source }),
        };

        if !metadata.is_file() {
            return Err(SizeError::NotARegularFile(path));
        }

        Ok(Self {
            bytes: metadata.len(),
            path,
        })
    }

    /// The path that was measured.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file size in bytes.
    #[must_use]
    pub const fn bytes(&self) -> u64 {
        self.bytes
    }

    /// The file size in kilobytes (bytes / 1024).
    #[must_use]
    pub fn kilobytes(&self) -> f64 {
        kilobytes(self.bytes)
    }

    /// The file size in megabytes (bytes / 1,048,576).
    #[must_use]
    pub fn megabytes(&self) -> f64 {
        megabytes(self.bytes)
    }

    /// Render the display block shown to the user.
    ///
    /// The byte count is always present. The KB line appears only when the
    /// file is at least 1024 bytes, and the MB line only when it is at
    /// least 1,048,576 bytes; both use two decimal places.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!(
            "File: {}\nSize: {} bytes",
            self.path.display(),
            self.bytes
        );

        if self.bytes >= BYTES_PER_KB {
            let _ = write!(out, "\nSize: {:.2} KB", self.kilobytes());
        }
        if self.bytes >= BYTES_PER_MB {
            let _ = write!(out, "\nSize: {:.2} MB", self.megabytes());
        }

        out
    }
}
