use eframe::egui;

use crate::app::ResizeApp;

pub fn side_panel(app: &mut ResizeApp, ctx: &egui::Context) {
    egui::SidePanel::right("info_panel")
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Image");
            if let (Some(name), Some(image)) = (&app.current_image_name, &app.current_image) {
                ui.label(name);
                ui.label(format!("{} x {} px", image.width(), image.height()));
            } else {
                ui.label("No image loaded");
            }

            ui.separator();
            ui.heading("Canvas");
            let canvas_size = app.canvas_size(ctx.pixels_per_point());
            ui.label(format!("Size: {canvas_size:.0} x {canvas_size:.0}"));
            ui.label(format!("Display scale: {:.2}", ctx.pixels_per_point()));

            if let Some(fit) = &app.fit_rect {
                ui.separator();
                ui.heading("Placement");
                ui.label(format!("Width: {:.0}", fit.width));
                ui.label(format!("Height: {:.0}", fit.height));
                ui.label(format!("X: {:.1}", fit.x));
                ui.label(format!("Y: {:.1}", fit.y));
            }

            // push the status message to the bottom
            ui.add_space(ui.available_height() - 30.0);

            if let Some((message, _)) = &app.status_message {
                ui.horizontal(|ui| {
                    ui.label(message);
                });
            }
        });
}
