//! # Layout Components

/// Render vertically centered content
pub fn render_centered<F>(ui: &mut egui::Ui, top_space: f32, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.vertical_centered(|ui| {
        ui.add_space(top_space);
        content(ui);
    });
}

/// Fixed-size card used by the stat tiles and the catalog grid
pub fn render_card<F>(ui: &mut egui::Ui, size: egui::Vec2, content: F) -> egui::Response
where
    F: FnOnce(&mut egui::Ui),
{
    egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_min_size(size);
            ui.set_max_width(size.x);
            ui.vertical(content);
        })
        .response
}
