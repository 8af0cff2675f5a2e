//! Pure placement math for fitting an image into the square canvas.

use crate::models::{FitRect, ResizeError, Result};

/// Compute the destination rectangle that scales an image to fill a square
/// canvas on its shorter dimension, centering the long-side overflow.
///
/// The scaled long dimension is rounded to a whole unit; the offsets are left
/// fractional. Zero, negative, or non-finite inputs are rejected.
pub fn compute_fit(image_width: f64, image_height: f64, canvas_size: f64) -> Result<FitRect> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(image_width) || !valid(image_height) || !valid(canvas_size) {
        return Err(ResizeError::InvalidDimensions {
            width: image_width,
            height: image_height,
            canvas: canvas_size,
        });
    }

    let rect = if image_width > image_height {
        let width = (image_width * canvas_size / image_height).round();
        FitRect {
            width,
            height: canvas_size,
            x: -((width - canvas_size) / 2.0),
            y: 0.0,
        }
    } else if image_height > image_width {
        let height = (image_height * canvas_size / image_width).round();
        FitRect {
            width: canvas_size,
            height,
            x: 0.0,
            y: -((height - canvas_size) / 2.0),
        }
    } else {
        FitRect {
            width: canvas_size,
            height: canvas_size,
            x: 0.0,
            y: 0.0,
        }
    };

    Ok(rect)
}

/// Canvas side to use when logical sizing is off: divide the base size by the
/// display scale so the on-screen size stays physically constant on high-DPI
/// displays. Scale factors at or below 1 leave the base size untouched.
pub fn effective_canvas_size(base_size: f64, display_scale: f64) -> f64 {
    if display_scale > 1.0 {
        base_size / display_scale
    } else {
        base_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_fills_height_and_centers_overflow() {
        let fit = compute_fit(800.0, 400.0, 300.0).unwrap();
        assert_eq!(fit.width, 600.0);
        assert_eq!(fit.height, 300.0);
        assert_eq!(fit.x, -150.0);
        assert_eq!(fit.y, 0.0);
    }

    #[test]
    fn portrait_fills_width_and_centers_overflow() {
        let fit = compute_fit(400.0, 800.0, 300.0).unwrap();
        assert_eq!(fit.width, 300.0);
        assert_eq!(fit.height, 600.0);
        assert_eq!(fit.x, 0.0);
        assert_eq!(fit.y, -150.0);
    }

    #[test]
    fn square_matches_canvas_exactly() {
        let fit = compute_fit(300.0, 300.0, 300.0).unwrap();
        assert_eq!(
            fit,
            FitRect {
                width: 300.0,
                height: 300.0,
                x: 0.0,
                y: 0.0,
            }
        );
    }

    #[test]
    fn long_dimension_is_rounded_offset_is_not() {
        // 799x400 at 300: round(599.25) = 599, so the offset lands on a half
        // unit.
        let fit = compute_fit(799.0, 400.0, 300.0).unwrap();
        assert_eq!(fit.width, 599.0);
        assert_eq!(fit.x, -149.5);
        assert_eq!(fit.y, 0.0);
    }

    #[test]
    fn short_side_always_matches_canvas() {
        for (w, h) in [(1920.0, 1080.0), (33.0, 17.0), (250.0, 1000.0)] {
            let fit = compute_fit(w, h, 300.0).unwrap();
            if w > h {
                assert_eq!(fit.height, 300.0);
                assert!(fit.width >= 300.0);
                assert_eq!(fit.x, -((fit.width - 300.0) / 2.0));
            } else {
                assert_eq!(fit.width, 300.0);
                assert!(fit.height >= 300.0);
                assert_eq!(fit.y, -((fit.height - 300.0) / 2.0));
            }
        }
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(compute_fit(0.0, 400.0, 300.0).is_err());
        assert!(compute_fit(800.0, -1.0, 300.0).is_err());
        assert!(compute_fit(800.0, 400.0, 0.0).is_err());
        assert!(compute_fit(f64::NAN, 400.0, 300.0).is_err());
    }

    #[test]
    fn effective_size_shrinks_by_display_scale() {
        assert_eq!(effective_canvas_size(300.0, 1.5), 200.0);
        assert_eq!(effective_canvas_size(300.0, 2.25), 300.0 / 2.25);
        assert_eq!(effective_canvas_size(300.0, 1.0), 300.0);
        assert_eq!(effective_canvas_size(300.0, 0.75), 300.0);
    }
}
