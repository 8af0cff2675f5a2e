use eframe::egui;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::fit::{compute_fit, effective_canvas_size};
use crate::models::{CanvasSettings, FitRect, ResizeError, Result};
use crate::ui;
use crate::utils::{render_to_canvas, write_png};

pub struct ResizeApp {
    pub current_image: Option<DynamicImage>,
    pub current_image_path: Option<PathBuf>,
    pub current_image_name: Option<String>,
    pub texture: Option<egui::TextureHandle>,
    pub fit_rect: Option<FitRect>,
    pub fit_canvas_size: f64,
    pub settings: CanvasSettings,
    pub status_message: Option<(String, f32)>,
}

impl Default for ResizeApp {
    fn default() -> Self {
        Self {
            current_image: None,
            current_image_path: None,
            current_image_name: None,
            texture: None,
            fit_rect: None,
            fit_canvas_size: 0.0,
            settings: CanvasSettings::default(),
            status_message: None,
        }
    }
}

impl ResizeApp {
    pub fn show_status(&mut self, message: &str) {
        self.status_message = Some((message.to_string(), 2.0));
    }

    /// Canvas side in logical points for the current display scale.
    pub fn canvas_size(&self, pixels_per_point: f32) -> f64 {
        if self.settings.logical_sizing {
            self.settings.base_size
        } else {
            effective_canvas_size(self.settings.base_size, f64::from(pixels_per_point))
        }
    }

    pub fn select_image(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Images", &["jpg", "jpeg", "png"])
            .pick_file();

        // abandoning the picker is a no-op
        if let Some(path) = picked {
            match self.load_image(&path) {
                Ok(()) => self.show_status("Image loaded"),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load image");
                    self.show_status(&format!("Failed to load image: {e}"));
                }
            }
        }
    }

    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        let img = image::open(path).map_err(|e| ResizeError::Decode(e.to_string()))?;
        info!(
            path = %path.display(),
            width = img.width(),
            height = img.height(),
            "loaded image"
        );

        self.current_image = Some(img);
        self.current_image_path = Some(path.to_path_buf());
        self.current_image_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|s| s.to_string());
        self.texture = None;
        self.fit_rect = None;
        self.fit_canvas_size = 0.0;
        Ok(())
    }

    /// Recompute the cached placement when a new image arrived or the canvas
    /// size changed.
    pub fn refresh_fit(&mut self, canvas_size: f64) {
        let Some(img) = &self.current_image else {
            self.fit_rect = None;
            return;
        };
        if self.fit_rect.is_some() && self.fit_canvas_size == canvas_size {
            return;
        }
        self.fit_rect =
            compute_fit(f64::from(img.width()), f64::from(img.height()), canvas_size).ok();
        self.fit_canvas_size = canvas_size;
    }

    pub fn select_save(&mut self, pixels_per_point: f32) {
        if self.current_image.is_none() {
            return;
        }

        let picked = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("resizedImage.png")
            .save_file();

        if let Some(path) = picked {
            match self.save_image(&path, pixels_per_point) {
                Ok(()) => {
                    info!(path = %path.display(), "saved canvas");
                    self.show_status("Canvas saved");
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to save canvas");
                    self.show_status(&format!("Failed to save: {e}"));
                }
            }
        }
    }

    fn save_image(&self, path: &Path, pixels_per_point: f32) -> Result<()> {
        let Some(img) = &self.current_image else {
            return Ok(());
        };

        // capture at physical resolution, like a render-target snapshot of
        // the on-screen canvas
        let canvas_px = (self.canvas_size(pixels_per_point) * f64::from(pixels_per_point)).round();
        let canvas = render_to_canvas(img, (canvas_px as u32).max(1))?;
        write_png(path, &canvas)
    }
}

impl eframe::App for ResizeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some((_, ttl)) = &mut self.status_message {
            *ttl -= ctx.input(|i| i.stable_dt);
            if *ttl <= 0.0 {
                self.status_message = None;
            }
        }

        let canvas_size = self.canvas_size(ctx.pixels_per_point());
        self.refresh_fit(canvas_size);

        ui::top::top_panel(self, ctx);
        ui::side::side_panel(self, ctx);
        ui::central::central_panel(self, ctx);
    }
}
