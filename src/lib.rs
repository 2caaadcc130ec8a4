//! Fixed-alphabet sprite generation for numeric HUD textures.
//!
//! The library half of this crate holds everything that does not touch a
//! concrete font library: the character-to-filename table, the cell geometry
//! ([`padded_cell_size`], [`draw_origin`]), sprite rendering over the
//! [`GlyphRaster`] capability trait, and the TGA/PNG output writer. The
//! `font2sprites` binary (Cargo feature `bin`) adds a `rusttype`-backed
//! rasterizer and the command-line surface on top.
//!
//! ```
//! use number_sprites::{padded_cell_size, GLYPH_PADDING};
//!
//! // A 117px glyph, padded by 4px per side, lands in a 128px cell.
//! assert_eq!(padded_cell_size(117, GLYPH_PADDING), 128);
//! ```

#![deny(missing_docs)]
#![warn(clippy::pedantic)]

mod charset;
mod error;
mod metrics;
mod output;
mod sprite;

pub use charset::SPRITES;
pub use error::Error;
pub use metrics::{draw_origin, padded_cell_size, InkBounds, GLYPH_PADDING};
pub use output::{ensure_output_dir, save_sprite, SpriteFormat};
pub use sprite::{render_sprite, uniform_cell_size, GlyphRaster};

#[cfg(feature = "bin")]
mod cli;
#[cfg(feature = "bin")]
mod raster;

#[cfg(feature = "bin")]
pub use cli::{generate_sprites, Args};
#[cfg(feature = "bin")]
pub use raster::FontRaster;
