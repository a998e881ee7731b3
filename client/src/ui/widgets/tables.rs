//! # Table Components
//!
//! Shared pieces of the admin tables: header row, action buttons and empty/loading states.

use egui_extras::{Column, TableBuilder};

use crate::ui::theme::Theme;

pub const ROW_HEIGHT: f32 = 28.0;

/// Clicked row action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

/// Striped table with one column per header; the last column holds row actions.
pub fn table<'a>(ui: &'a mut egui::Ui, id: &str, columns: usize) -> TableBuilder<'a> {
    let mut builder = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for _ in 0..columns {
        builder = builder.column(Column::auto().at_least(80.0));
    }
    builder.column(Column::remainder().at_least(160.0))
}

pub fn header_cells(header: &mut egui_extras::TableRow<'_, '_>, headers: &[&str], theme: &Theme) {
    for title in headers {
        header.col(|ui| {
            ui.label(egui::RichText::new(*title).strong().color(theme.selected));
        });
    }
}

/// Render the action buttons of one row
pub fn row_actions(ui: &mut egui::Ui, actions: &[RowAction], busy: bool) -> Option<RowAction> {
    let mut clicked = None;
    for action in actions {
        let label = match action {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        };
        if ui.add_enabled(!busy, egui::Button::new(label).small()).clicked() {
            clicked = Some(*action);
        }
    }
    clicked
}

/// Render an empty state message
pub fn render_empty_state(ui: &mut egui::Ui, primary_text: &str, secondary_text: Option<&str>, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(10.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}

pub fn render_loading(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.spinner();
        ui.label(text);
    });
}

/// Render stats summary (e.g., "Total: X  |  Shown: Y")
pub fn render_stats_summary(ui: &mut egui::Ui, stats: &[(&str, usize)]) {
    let parts: Vec<String> = stats.iter().map(|(label, count)| format!("{}: {}", label, count)).collect();
    ui.label(parts.join("  |  "));
}
