use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

use crate::fit::compute_fit;
use crate::models::{ResizeError, Result};

/// Compose the canvas content at the given pixel size: scale the image per
/// the fit rectangle and center-crop the overflow onto a transparent square.
pub fn render_to_canvas(img: &DynamicImage, canvas_size: u32) -> Result<RgbaImage> {
    let fit = compute_fit(
        f64::from(img.width()),
        f64::from(img.height()),
        f64::from(canvas_size),
    )?;

    let scaled = img
        .resize_exact(
            fit.width.round() as u32,
            fit.height.round() as u32,
            FilterType::Triangle,
        )
        .to_rgba8();

    let mut canvas = RgbaImage::new(canvas_size, canvas_size);
    imageops::overlay(
        &mut canvas,
        &scaled,
        fit.x.round() as i64,
        fit.y.round() as i64,
    );
    Ok(canvas)
}

pub fn write_png(path: &Path, canvas: &RgbaImage) -> Result<()> {
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            image::ImageError::IoError(io) => ResizeError::Io(io),
            other => ResizeError::Encode(other.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    // left half red, right half blue
    fn two_tone_landscape(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn canvas_is_exactly_square() {
        let canvas = render_to_canvas(&two_tone_landscape(800, 400), 300).unwrap();
        assert_eq!(canvas.dimensions(), (300, 300));
    }

    #[test]
    fn landscape_render_crops_equally_from_both_sides() {
        let canvas = render_to_canvas(&two_tone_landscape(800, 400), 300).unwrap();

        // The scaled image is 600x300 shifted left by 150, so the canvas
        // window covers the middle of the source: red at the left edge, blue
        // at the right, seam at the canvas midpoint.
        assert_eq!(canvas.get_pixel(0, 150).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(299, 150).0, [0, 0, 255, 255]);
    }

    #[test]
    fn square_render_covers_canvas() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 64, Rgba([0, 255, 0, 255])));
        let canvas = render_to_canvas(&img, 300).unwrap();
        assert_eq!(canvas.get_pixel(0, 0).0, [0, 255, 0, 255]);
        assert_eq!(canvas.get_pixel(299, 299).0, [0, 255, 0, 255]);
    }

    #[test]
    fn png_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resizedImage.png");

        let canvas = render_to_canvas(&two_tone_landscape(800, 400), 300).unwrap();
        write_png(&path, &canvas).unwrap();

        let reread = image::open(&path).unwrap();
        assert_eq!((reread.width(), reread.height()), (300, 300));
    }
}
