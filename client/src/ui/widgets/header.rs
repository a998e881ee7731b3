//! # Header Bar

use crate::ui::theme::Theme;

/// Render the top bar; returns `true` when "Log out" was clicked.
pub fn render_header(ui: &mut egui::Ui, title: &str, user_name: &str, theme: &Theme) -> bool {
    let mut logout = false;
    ui.horizontal(|ui| {
        ui.set_height(40.0);
        ui.label(egui::RichText::new(title).size(20.0).strong().color(theme.selected));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Log out").clicked() {
                logout = true;
            }
            ui.label(egui::RichText::new(user_name).color(theme.dim));
        });
    });
    logout
}
