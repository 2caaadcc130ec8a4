//! `rusttype`-backed glyph rasterization.

use std::fs;
use std::path::Path;

use rusttype::{point, Font, Scale};

use crate::error::Error;
use crate::metrics::InkBounds;
use crate::sprite::GlyphRaster;

/// A font parsed once and fixed to a single pixel size for the whole run.
pub struct FontRaster {
    font: Font<'static>,
    scale: Scale,
}

impl FontRaster {
    /// Read and parse the font at `path`, scaled to `pixel_size`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FontLoad`] when the file cannot be read or is not a
    /// supported font format.
    pub fn load(path: &Path, pixel_size: u32) -> Result<Self, Error> {
        let font_data = fs::read(path).map_err(|err| Error::FontLoad {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        let font = Font::try_from_vec(font_data).ok_or_else(|| Error::FontLoad {
            path: path.to_path_buf(),
            reason: "unsupported or corrupt font data".into(),
        })?;

        Ok(Self {
            font,
            scale: Scale::uniform(pixel_size as f32),
        })
    }
}

impl GlyphRaster for FontRaster {
    fn ink_bounds(&self, ch: char) -> Option<InkBounds> {
        let glyph = self
            .font
            .glyph(ch)
            .scaled(self.scale)
            .positioned(point(0.0, 0.0));
        let bb = glyph.pixel_bounding_box()?;
        Some(InkBounds {
            left: bb.min.x,
            top: bb.min.y,
            right: bb.max.x,
            bottom: bb.max.y,
        })
    }

    fn draw(&self, ch: char, x: i32, y: i32, plot: &mut dyn FnMut(i32, i32, f32)) {
        let glyph = self
            .font
            .glyph(ch)
            .scaled(self.scale)
            .positioned(point(x as f32, y as f32));
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                plot(bb.min.x + gx as i32, bb.min.y + gy as i32, coverage);
            });
        }
    }
}
