use eframe::egui;

use crate::app::ResizeApp;

pub fn top_panel(app: &mut ResizeApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Open image…").clicked() {
                app.select_image();
            }

            let can_save = app.current_image.is_some();
            if ui
                .add_enabled(can_save, egui::Button::new("Save as PNG…"))
                .clicked()
            {
                app.select_save(ctx.pixels_per_point());
            }

            ui.checkbox(&mut app.settings.logical_sizing, "Logical sizing");

            if let Some(path) = &app.current_image_path {
                ui.label(format!("File: {}", path.display()));
            }
        });
    });
}
