//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use crate::ui::theme::Theme;

/// Width of single-line inputs in forms and modals
pub const INPUT_WIDTH: f32 = 280.0;

/// Render a labelled text input field
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0));
    ui.add_sized(
        [INPUT_WIDTH, 28.0],
        egui::TextEdit::singleline(value).password(password).hint_text(hint),
    )
}

/// Render a labelled multi-line input
pub fn render_text_area(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0));
    ui.add_sized(
        [INPUT_WIDTH, 64.0],
        egui::TextEdit::multiline(value).hint_text(hint),
    )
}

/// Render a styled button with optional icon
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    icon: Option<&str>,
    fill_color: Option<egui::Color32>,
    enabled: bool,
) -> egui::Response {
    let button_text = match icon {
        Some(icon) => format!("{} {}", icon, text),
        None => text.to_string(),
    };

    let mut rich = egui::RichText::new(button_text).size(15.0);
    if fill_color.is_some() {
        rich = rich.color(egui::Color32::WHITE);
    }

    let mut button = egui::Button::new(rich).min_size(egui::vec2(96.0, 30.0));
    if let Some(color) = fill_color {
        button = button.fill(color);
    }

    ui.add_enabled(enabled, button)
}

/// Primary action with a spinner while `busy`
pub fn render_submit_button(ui: &mut egui::Ui, text: &str, busy: bool, theme: &Theme) -> bool {
    ui.horizontal(|ui| {
        let clicked = render_button(ui, text, None, Some(theme.selected), !busy).clicked();
        if busy {
            ui.spinner();
        }
        clicked
    })
    .inner
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    let heading = egui::RichText::new(text)
        .size(24.0)
        .strong()
        .color(theme.selected);
    ui.label(heading);
    ui.add_space(16.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).size(14.0).color(theme.error));
    ui.add_space(8.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(13.0).color(theme.dim));
}

/// `true` when Enter was pressed while `response` had focus
pub fn submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
