/// Destination placement of an image within the square canvas. Exactly one
/// of `width`/`height` equals the canvas side; the offset on the long axis
/// centers the overflow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitRect {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone)]
pub struct CanvasSettings {
    pub base_size: f64,
    pub logical_sizing: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            base_size: 300.0,
            logical_sizing: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("invalid dimensions: image {width}x{height}, canvas {canvas}")]
    InvalidDimensions {
        width: f64,
        height: f64,
        canvas: f64,
    },
}

pub type Result<T> = std::result::Result<T, ResizeError>;
