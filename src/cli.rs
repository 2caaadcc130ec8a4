//! Command-line surface of the `font2sprites` tool.

use std::path::PathBuf;

use clap::Parser;

use crate::charset::SPRITES;
use crate::error::Error;
use crate::metrics::GLYPH_PADDING;
use crate::output::{ensure_output_dir, save_sprite, SpriteFormat};
use crate::raster::FontRaster;
use crate::sprite::{render_sprite, uniform_cell_size};

/// Render a font's digit and minus glyphs into square sprite textures.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the font file to render
    pub font: PathBuf,
    /// Directory the sprites are written to
    #[arg(default_value = "assets/gfx/2d/damage")]
    pub output_dir: PathBuf,
    /// Desired font pixel size
    #[arg(short, long, default_value_t = 128, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,
    /// Output image format
    #[arg(short, long, value_enum, default_value_t = SpriteFormat::Tga)]
    pub format: SpriteFormat,
}

/// Run the full generation pipeline for `args`.
///
/// # Errors
///
/// Propagates the first [`Error`] encountered. Sprites written before a
/// mid-run failure stay on disk; nothing is rolled back or retried.
pub fn generate_sprites(args: &Args) -> Result<(), Error> {
    if !args.font.is_file() {
        return Err(Error::FontNotFound(args.font.clone()));
    }

    ensure_output_dir(&args.output_dir)?;

    let font = FontRaster::load(&args.font, args.size)?;

    println!("Generating sprites from: {}", args.font.display());
    println!("Font size: {}px", args.size);
    println!("Output directory: {}", args.output_dir.display());
    println!("Output format: {}", args.format);

    let cell = uniform_cell_size(&font, SPRITES.iter().map(|&(ch, _)| ch), GLYPH_PADDING);
    println!("Cell size: {cell}x{cell}px");
    println!();

    for &(ch, base) in &SPRITES {
        let sprite = render_sprite(&font, ch, cell);
        let path = save_sprite(&sprite, &args.output_dir, base, args.format)?;
        log::debug!("wrote {}", path.display());
        println!(
            "  Generated: {}.{} ({}x{})",
            base,
            args.format.extension(),
            sprite.width(),
            sprite.height()
        );
    }

    println!();
    println!("Done! Sprites generated successfully.");

    Ok(())
}
