use eframe::egui;

use crate::app::ResizeApp;

pub fn central_panel(app: &mut ResizeApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if ui.input(|i| i.key_pressed(egui::Key::O)) {
            app.select_image();
        }
        if ui.input(|i| i.key_pressed(egui::Key::S)) {
            app.select_save(ctx.pixels_per_point());
        }

        let canvas_size = app.canvas_size(ctx.pixels_per_point());
        let desired = egui::vec2(canvas_size as f32, canvas_size as f32);
        let available = ui.available_rect_before_wrap();
        let canvas_rect = egui::Rect::from_center_size(available.center(), desired);
        let _ = ui.allocate_rect(canvas_rect, egui::Sense::hover());

        // everything painted through this painter is cropped at the canvas
        // edges
        let painter = ui.painter_at(canvas_rect);
        painter.rect_filled(canvas_rect, 0.0, egui::Color32::from_gray(24));

        if let Some(image) = &app.current_image {
            let texture: &egui::TextureHandle = app.texture.get_or_insert_with(|| {
                let rgba = image.to_rgba8();
                ui.ctx().load_texture(
                    "current_image",
                    egui::ColorImage::from_rgba_unmultiplied(
                        [image.width() as _, image.height() as _],
                        rgba.as_raw(),
                    ),
                    Default::default(),
                )
            });

            if let Some(fit) = &app.fit_rect {
                let image_rect = egui::Rect::from_min_size(
                    canvas_rect.min + egui::vec2(fit.x as f32, fit.y as f32),
                    egui::vec2(fit.width as f32, fit.height as f32),
                );
                painter.image(
                    texture.id(),
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
        }

        painter.rect_stroke(
            canvas_rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::GRAY),
            egui::StrokeKind::Inside,
        );
    });
}
