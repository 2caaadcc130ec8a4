//! Error results that can be returned from sprite generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a generation run; none are retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The font path does not name an existing file.
    #[error("font file not found: {}", .0.display())]
    FontNotFound(PathBuf),

    /// The font file exists but could not be read or parsed as a font.
    #[error("failed to load font {}: {reason}", .path.display())]
    FontLoad {
        /// Path of the offending font file.
        path: PathBuf,
        /// What the font loader reported.
        reason: String,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// A sprite could not be encoded or written to disk.
    #[error("failed to write sprite {}: {source}", .path.display())]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying encoder or filesystem error.
        #[source]
        source: image::ImageError,
    },
}
