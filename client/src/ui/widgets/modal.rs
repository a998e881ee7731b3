//! # Modal Windows

/// Centered, non-collapsible window. Returns `false` once the user closed it with the
/// title bar button.
pub fn render_modal<F>(ctx: &egui::Context, title: &str, width: f32, content: F) -> bool
where
    F: FnOnce(&mut egui::Ui),
{
    let mut open = true;
    egui::Window::new(title)
        .id(egui::Id::new(("modal", title)))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(width)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, content);
    open
}

/// Choice made in a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Pending,
    Accepted,
    Cancelled,
}

/// Yes/no dialog used before deletes
pub fn render_confirm(ctx: &egui::Context, title: &str, message: &str, busy: bool) -> Confirm {
    let mut choice = Confirm::Pending;
    let open = render_modal(ctx, title, 320.0, |ui| {
        ui.label(message);
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(!busy, egui::Button::new("Delete")).clicked() {
                choice = Confirm::Accepted;
            }
            if ui.button("Cancel").clicked() {
                choice = Confirm::Cancelled;
            }
            if busy {
                ui.spinner();
            }
        });
    });
    if !open {
        Confirm::Cancelled
    } else {
        choice
    }
}
