//! Sprite rendering over an abstract glyph rasterizer.

use image::{Rgba, RgbaImage};

use crate::metrics::{draw_origin, padded_cell_size, InkBounds};

/// Capability interface over the concrete font library.
///
/// The sizing and centering logic only ever sees ink extents and a plot
/// callback, so the backing rasterizer can be swapped out without touching
/// it.
pub trait GlyphRaster {
    /// Tight extent of `ch`'s ink when drawn at origin `(0, 0)`, or `None`
    /// when the font has no coverage for the character.
    fn ink_bounds(&self, ch: char) -> Option<InkBounds>;

    /// Rasterize `ch` positioned at `(x, y)`, reporting each covered pixel
    /// through `plot` as `(x, y, coverage)` with coverage in `0.0..=1.0`.
    fn draw(&self, ch: char, x: i32, y: i32, plot: &mut dyn FnMut(i32, i32, f32));
}

/// Compute the single square cell side that fits every character in `chars`
/// at the rasterizer's loaded size, with `padding` pixels on each side.
///
/// Characters without ink contribute nothing to the measurement; the run
/// proceeds on the extents of the remaining characters.
pub fn uniform_cell_size<R: GlyphRaster>(
    font: &R,
    chars: impl IntoIterator<Item = char>,
    padding: u32,
) -> u32 {
    let mut max_dim = 0;
    for ch in chars {
        match font.ink_bounds(ch) {
            Some(bounds) => max_dim = max_dim.max(bounds.max_dim()),
            None => log::warn!("glyph {ch:?} has no ink; ignored for cell sizing"),
        }
    }
    padded_cell_size(max_dim, padding)
}

/// Render `ch` centered on a fully transparent `cell` x `cell` canvas.
///
/// Ink is white with coverage-derived alpha. Every canvas produced with the
/// same `cell` has identical dimensions, so the consuming renderer can apply
/// one uniform scale factor to the whole sprite set.
pub fn render_sprite<R: GlyphRaster>(font: &R, ch: char, cell: u32) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(cell, cell, Rgba([0, 0, 0, 0]));

    let Some(bounds) = font.ink_bounds(ch) else {
        log::warn!("glyph {ch:?} has no ink; emitting an empty sprite");
        return canvas;
    };

    let (x, y) = draw_origin(bounds, cell);
    log::debug!("glyph {ch:?}: bounds {bounds:?}, draw origin ({x}, {y})");

    font.draw(ch, x, y, &mut |px, py, coverage| {
        if px < 0 || py < 0 || px >= cell as i32 || py >= cell as i32 {
            return;
        }
        let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
        canvas.put_pixel(px as u32, py as u32, Rgba([255, 255, 255, alpha]));
    });

    canvas
}

#[cfg(test)]
mod tests {
    use super::{render_sprite, uniform_cell_size, GlyphRaster};
    use crate::metrics::{InkBounds, GLYPH_PADDING};

    /// Rasterizer that draws solid rectangular ink with fixed bounds.
    struct BlockRaster(Vec<(char, InkBounds)>);

    impl GlyphRaster for BlockRaster {
        fn ink_bounds(&self, ch: char) -> Option<InkBounds> {
            self.0.iter().find(|&&(c, _)| c == ch).map(|&(_, b)| b)
        }

        fn draw(&self, ch: char, x: i32, y: i32, plot: &mut dyn FnMut(i32, i32, f32)) {
            if let Some(b) = self.ink_bounds(ch) {
                for py in (y + b.top)..(y + b.bottom) {
                    for px in (x + b.left)..(x + b.right) {
                        plot(px, py, 1.0);
                    }
                }
            }
        }
    }

    fn digit_raster() -> BlockRaster {
        BlockRaster(vec![
            ('1', InkBounds { left: 3, top: -20, right: 9, bottom: 0 }),
            ('8', InkBounds { left: 1, top: -20, right: 13, bottom: 0 }),
            ('-', InkBounds { left: 0, top: -12, right: 10, bottom: -8 }),
        ])
    }

    #[test]
    fn cell_fits_the_largest_glyph() {
        let font = digit_raster();
        let cell = uniform_cell_size(&font, "18-".chars(), GLYPH_PADDING);
        // tallest extent is 20px, plus 4px padding per side, already aligned
        assert_eq!(cell, 28);
    }

    #[test]
    fn missing_glyphs_contribute_nothing() {
        let font = digit_raster();
        let with_missing = uniform_cell_size(&font, "18-x".chars(), GLYPH_PADDING);
        let without = uniform_cell_size(&font, "18-".chars(), GLYPH_PADDING);
        assert_eq!(with_missing, without);
    }

    #[test]
    fn canvas_is_square_with_the_requested_side() {
        let font = digit_raster();
        for ch in ['1', '8', '-'] {
            let sprite = render_sprite(&font, ch, 28);
            assert_eq!(sprite.width(), 28);
            assert_eq!(sprite.height(), 28);
        }
    }

    #[test]
    fn ink_is_opaque_white_and_centered() {
        let font = digit_raster();
        let sprite = render_sprite(&font, '8', 28);

        let mut inked = 0;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (u32::MAX, u32::MAX, 0, 0);
        for (x, y, pixel) in sprite.enumerate_pixels() {
            if pixel.0[3] > 0 {
                assert_eq!(pixel.0, [255, 255, 255, 255]);
                inked += 1;
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }

        // 12x20 block of solid ink
        assert_eq!(inked, 12 * 20);
        // margins balance to within a pixel on both axes
        let (left, right) = (min_x as i32, 27 - max_x as i32);
        let (top, bottom) = (min_y as i32, 27 - max_y as i32);
        assert!((left - right).abs() <= 1);
        assert!((top - bottom).abs() <= 1);
    }

    #[test]
    fn glyph_without_ink_renders_fully_transparent() {
        let font = digit_raster();
        let sprite = render_sprite(&font, 'x', 28);
        assert!(sprite.pixels().all(|pixel| pixel.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn plots_outside_the_canvas_are_discarded() {
        // ink wider than the cell; the overhang must not panic or wrap
        let font = BlockRaster(vec![('W', InkBounds { left: 0, top: -12, right: 20, bottom: 0 })]);
        let sprite = render_sprite(&font, 'W', 8);
        assert_eq!(sprite.width(), 8);
        assert!(sprite.pixels().any(|pixel| pixel.0[3] > 0));
    }
}
