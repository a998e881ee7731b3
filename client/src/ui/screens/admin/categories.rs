//! Categories tab.

use shared::Category;

use crate::app::{BakeryApp, CategoryEditor};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::widgets::tables::{self, RowAction};

use super::common;

pub fn render(ui: &mut egui::Ui, app: &mut BakeryApp, theme: &Theme) {
    let facade = app.admin.categories.clone();
    let state = facade.snapshot();

    let toolbar = common::render_toolbar(ui, &facade, &state, Some("New category"), theme, |_| {});

    let rows = state.filtered();
    let (draw_table, retry) = common::render_load_state(ui, &state, rows.len(), theme);

    let mut clicked: Option<(RowAction, Category)> = None;
    if draw_table {
        tables::table(ui, "categories_table", 2)
            .header(24.0, |mut header| {
                tables::header_cells(&mut header, &["Name", "Description", "Actions"], theme)
            })
            .body(|body| {
                body.rows(tables::ROW_HEIGHT, rows.len(), |mut row| {
                    let category = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(&category.name);
                    });
                    row.col(|ui| {
                        ui.label(category.description.as_deref().unwrap_or("-"));
                    });
                    row.col(|ui| {
                        if let Some(action) = tables::row_actions(ui, &[RowAction::Edit, RowAction::Delete], state.is_deleting) {
                            clicked = Some((action, category.clone()));
                        }
                    });
                });
            });
    }

    if toolbar.refresh || retry {
        app.handle_refresh();
    }
    if toolbar.create {
        app.handle_open_create::<Category>();
    }
    match clicked {
        Some((RowAction::Edit, category)) => app.handle_open_edit(category),
        Some((RowAction::Delete, category)) => facade.open_delete(category.id),
        _ => {}
    }
}

pub fn render_modals(ctx: &egui::Context, app: &mut BakeryApp, theme: &Theme) {
    common::render_edit_modal::<Category>(ctx, app, theme, render_fields);
    common::render_delete_confirm::<Category>(ctx, app, |category| category.name.clone());
}

fn render_fields(ui: &mut egui::Ui, editor: &mut CategoryEditor) {
    forms::render_text_input(ui, "Name", &mut editor.name, "Breads", false);
    forms::render_text_area(ui, "Description", &mut editor.description, "Optional");
}
