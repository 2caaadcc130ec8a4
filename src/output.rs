//! Sprite encoding and filesystem output.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::Error;

/// Supported sprite encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "bin", derive(clap::ValueEnum))]
pub enum SpriteFormat {
    /// 32-bit Targa; alpha preserved, no lossy compression.
    Tga,
    /// Lossless compressed PNG.
    Png,
}

impl SpriteFormat {
    /// File extension used for sprites in this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Tga => "tga",
            Self::Png => "png",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Tga => ImageFormat::Tga,
            Self::Png => ImageFormat::Png,
        }
    }
}

impl fmt::Display for SpriteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Create the sprite output directory, parents included.
///
/// # Errors
///
/// Returns [`Error::CreateDir`] when the directory cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Encode `sprite` to `<dir>/<base>.<ext>` and return the written path.
///
/// An existing file under the same name is overwritten.
///
/// # Errors
///
/// Returns [`Error::Write`] when encoding or the file write fails.
pub fn save_sprite(
    sprite: &RgbaImage,
    dir: &Path,
    base: &str,
    format: SpriteFormat,
) -> Result<PathBuf, Error> {
    let path = dir.join(format!("{base}.{}", format.extension()));
    sprite
        .save_with_format(&path, format.image_format())
        .map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}
