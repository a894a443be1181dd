//! Image validation.
//!
//! Checks a decoded image against the Mega Drive tile format constraints:
//! indexed colour, 4 or 8 bits per pixel, at most 16 palette entries, and
//! dimensions that divide into whole 8x8 tiles. A rejection skips the file;
//! it never aborts the batch.

use thiserror::Error;

use crate::decode::{ColorMode, DecodedImage};

/// Reason a decoded image was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("the image must be in indexed colour mode")]
    NotIndexed,

    #[error("{0}bpp is not supported, only 4bpp and 8bpp images are")]
    UnsupportedBitDepth(u8),

    #[error("more than 16 colours ({0} palette entries)")]
    TooManyColors(usize),

    #[error("image width {0} is not a multiple of 8")]
    WidthNotMultipleOf8(u32),

    #[error("image height {0} is not a multiple of 8")]
    HeightNotMultipleOf8(u32),
}

/// Validate a decoded image for tile extraction.
///
/// Checks run in a fixed order and report the first violation only.
pub fn validate(image: &DecodedImage) -> Result<(), Rejection> {
    if image.color_mode != ColorMode::Indexed {
        return Err(Rejection::NotIndexed);
    }
    if image.bit_depth != 4 && image.bit_depth != 8 {
        return Err(Rejection::UnsupportedBitDepth(image.bit_depth));
    }
    if image.palette_size > 16 {
        return Err(Rejection::TooManyColors(image.palette_size));
    }
    if image.width % 8 != 0 {
        return Err(Rejection::WidthNotMultipleOf8(image.width));
    }
    if image.height % 8 != 0 {
        return Err(Rejection::HeightNotMultipleOf8(image.height));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(
        width: u32,
        height: u32,
        bit_depth: u8,
        color_mode: ColorMode,
        palette_size: usize,
    ) -> DecodedImage {
        DecodedImage {
            width,
            height,
            bit_depth,
            color_mode,
            palette_size,
            pixels: Vec::new(),
        }
    }

    #[test]
    fn test_accepts_8bpp_indexed() {
        let img = image(16, 8, 8, ColorMode::Indexed, 16);
        assert_eq!(validate(&img), Ok(()));
    }

    #[test]
    fn test_accepts_4bpp_indexed() {
        let img = image(8, 8, 4, ColorMode::Indexed, 4);
        assert_eq!(validate(&img), Ok(()));
    }

    #[test]
    fn test_rejects_truecolor() {
        let img = image(8, 8, 8, ColorMode::Rgb, 0);
        assert_eq!(validate(&img), Err(Rejection::NotIndexed));
    }

    #[test]
    fn test_rejects_unsupported_depth() {
        let img = image(8, 8, 2, ColorMode::Indexed, 4);
        assert_eq!(validate(&img), Err(Rejection::UnsupportedBitDepth(2)));
    }

    #[test]
    fn test_rejects_17_colours() {
        let img = image(8, 8, 8, ColorMode::Indexed, 17);
        assert_eq!(validate(&img), Err(Rejection::TooManyColors(17)));
    }

    #[test]
    fn test_rejects_width_not_multiple_of_8() {
        let img = image(12, 8, 8, ColorMode::Indexed, 16);
        assert_eq!(validate(&img), Err(Rejection::WidthNotMultipleOf8(12)));
    }

    #[test]
    fn test_rejects_height_not_multiple_of_8() {
        let img = image(8, 9, 8, ColorMode::Indexed, 16);
        assert_eq!(validate(&img), Err(Rejection::HeightNotMultipleOf8(9)));
    }

    #[test]
    fn test_colour_mode_checked_before_depth() {
        // An image wrong in every way reports the colour mode first.
        let img = image(9, 9, 1, ColorMode::Rgba, 300);
        assert_eq!(validate(&img), Err(Rejection::NotIndexed));
    }
}
