//! PNG decoding boundary.
//!
//! Wraps the `png` crate behind this crate's own types so the rest of the
//! pipeline never sees decoder-specific enums or error codes. Decoding is
//! done with identity transformations: indexed pixels stay palette indices
//! and 4bpp scanlines stay packed two-pixels-per-byte, high nibble first,
//! which is the exact layout the tile extractor expects.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

/// Colour interpretation of a decoded image.
///
/// Only `Indexed` survives validation; the other modes exist so skip
/// messages can name what was actually found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Indexed,
    Grayscale,
    GrayscaleAlpha,
    Rgb,
    Rgba,
}

/// A decoded raster image, one batch-file's worth of pixel data.
///
/// `pixels` holds one byte per pixel at 8bpp, or two pixels per byte
/// (high nibble = leftmost pixel) at 4bpp.
#[derive(Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_mode: ColorMode,
    pub palette_size: usize,
    pub pixels: Vec<u8>,
}

/// Decode failure, recoverable at the batch level (the file is skipped).
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("cannot open file: {0}")]
    Open(String),

    #[error("not a valid png: {0}")]
    Malformed(String),
}

/// Decode a PNG file without any pixel transformation.
pub fn decode_png(path: &Path) -> Result<DecodedImage, DecodeError> {
    let file = File::open(path).map_err(|e| DecodeError::Open(e.to_string()))?;

    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::IDENTITY);

    let mut reader = decoder
        .read_info()
        .map_err(|e| DecodeError::Malformed(e.to_string()))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let bit_depth = info.bit_depth as u8;
    let color_mode = match info.color_type {
        png::ColorType::Indexed => ColorMode::Indexed,
        png::ColorType::Grayscale => ColorMode::Grayscale,
        png::ColorType::GrayscaleAlpha => ColorMode::GrayscaleAlpha,
        png::ColorType::Rgb => ColorMode::Rgb,
        png::ColorType::Rgba => ColorMode::Rgba,
    };
    // A PLTE chunk is three bytes per entry.
    let palette_size = info.palette.as_ref().map_or(0, |p| p.len() / 3);

    let mut pixels = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut pixels)
        .map_err(|e| DecodeError::Malformed(e.to_string()))?;
    pixels.truncate(frame.buffer_size());

    Ok(DecodedImage {
        width,
        height,
        bit_depth,
        color_mode,
        palette_size,
        pixels,
    })
}
