//! Pieces every management tab shares: the search toolbar, load/error states and the
//! generic edit and delete modals driven by [`AdminScreen`].

use crate::app::{AdminScreen, BakeryApp};
use crate::core::service::ManagedEntity;
use crate::facades::{EntityFacade, ManagementState};
use crate::ui::theme::Theme;
use crate::ui::widgets::modal::{self, Confirm};
use crate::ui::widgets::{forms, tables};

#[derive(Debug, Default, Clone, Copy)]
pub(super) struct ToolbarAction {
    pub refresh: bool,
    pub create: bool,
}

/// Search box, screen filters, refresh and (optionally) a create button.
pub(super) fn render_toolbar<E: ManagedEntity>(
    ui: &mut egui::Ui,
    facade: &EntityFacade<E>,
    state: &ManagementState<E>,
    create_label: Option<&str>,
    theme: &Theme,
    filters: impl FnOnce(&mut egui::Ui),
) -> ToolbarAction {
    let mut action = ToolbarAction::default();

    ui.horizontal(|ui| {
        let mut term = state.search_term.clone();
        let search = egui::TextEdit::singleline(&mut term)
            .hint_text(format!("Search {}...", E::LABELS.plural))
            .desired_width(220.0);
        if ui.add(search).changed() {
            facade.set_search_term(&term);
        }

        filters(ui);

        if ui.add_enabled(!state.is_loading, egui::Button::new("Refresh")).clicked() {
            action.refresh = true;
        }
        if state.is_loading {
            ui.spinner();
        }

        if let Some(label) = create_label {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                action.create = forms::render_button(ui, label, Some("+"), Some(theme.selected), true).clicked();
            });
        }
    });

    tables::render_stats_summary(ui, &[("Total", state.items.len()), ("Shown", state.filtered().len())]);
    ui.separator();

    action
}

/// What to draw in place of the table, if anything. Returns `(draw_table, retry)`.
pub(super) fn render_load_state<E: ManagedEntity>(
    ui: &mut egui::Ui,
    state: &ManagementState<E>,
    visible_rows: usize,
    theme: &Theme,
) -> (bool, bool) {
    if state.items.is_empty() {
        if state.is_loading {
            tables::render_loading(ui, &format!("Loading {}...", E::LABELS.plural));
            return (false, false);
        }
        if let Some(error) = state.error.as_deref() {
            let mut retry = false;
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                forms::render_error(ui, error, theme);
                retry = ui.button("Retry").clicked();
            });
            return (false, retry);
        }
        tables::render_empty_state(ui, &format!("No {} yet", E::LABELS.plural), None, theme);
        return (false, false);
    }

    if visible_rows == 0 {
        tables::render_empty_state(ui, "Nothing matches the current search", Some("Clear the search or filters"), theme);
        return (false, false);
    }

    (true, false)
}

/// Create/edit modal for `E`. `fields` draws the inputs for the edit buffer.
pub(super) fn render_edit_modal<E: AdminScreen>(
    ctx: &egui::Context,
    app: &mut BakeryApp,
    theme: &Theme,
    fields: impl FnOnce(&mut egui::Ui, &mut E::Editor),
) {
    let state = E::parts(app).facade.snapshot();
    if !state.is_modal_open() {
        return;
    }

    let singular = E::LABELS.singular.to_lowercase();
    let title = if state.creating {
        format!("New {}", singular)
    } else {
        format!("Edit {}", singular)
    };

    let mut save = false;
    let mut cancel = false;
    let parts = E::parts(app);
    let open = modal::render_modal(ctx, &title, 380.0, |ui| {
        fields(ui, parts.editor);

        ui.add_space(8.0);
        if let Some(error) = parts.error.as_deref() {
            forms::render_error(ui, error, theme);
        }
        ui.horizontal(|ui| {
            save = forms::render_submit_button(ui, "Save", state.is_updating, theme);
            cancel = ui.button("Cancel").clicked();
        });
    });

    if !open || cancel {
        app.handle_close_edit::<E>();
    } else if save {
        app.handle_save::<E>();
    }
}

/// Confirmation before deleting the item the facade marked.
pub(super) fn render_delete_confirm<E: AdminScreen>(
    ctx: &egui::Context,
    app: &mut BakeryApp,
    describe: impl Fn(&E) -> String,
) {
    let facade = E::parts(app).facade.clone();
    let state = facade.snapshot();
    let Some(id) = state.deleting_id else {
        return;
    };

    let singular = E::LABELS.singular.to_lowercase();
    let name = state
        .find(id)
        .map(&describe)
        .unwrap_or_else(|| format!("{} #{}", singular, id));
    let message = format!("Delete {}? This cannot be undone.", name);

    match modal::render_confirm(ctx, &format!("Delete {}", singular), &message, state.is_deleting) {
        Confirm::Accepted => app.handle_delete_confirm::<E>(),
        Confirm::Cancelled => facade.close_delete(),
        Confirm::Pending => {}
    }
}

/// Label/value row inside detail modals.
pub(super) fn detail_row(ui: &mut egui::Ui, label: &str, value: impl Into<egui::WidgetText>, theme: &Theme) {
    ui.label(egui::RichText::new(label).color(theme.dim));
    ui.label(value);
    ui.end_row();
}

/// Optional backend timestamp for display; `-` when missing.
pub(super) fn timestamp(value: Option<&str>) -> String {
    value.map(shared::format_timestamp).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_timestamp() {
        assert_eq!(timestamp(Some("2024-05-01T09:30:00Z")), "2024-05-01 09:30");
        assert_eq!(timestamp(None), "-");
    }
}
