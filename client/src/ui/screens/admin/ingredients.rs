//! Ingredients tab: stock levels per unit.

use shared::{Ingredient, IngredientUnit};

use crate::app::{BakeryApp, IngredientEditor};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::widgets::tables::{self, RowAction};

use super::common;

pub fn render(ui: &mut egui::Ui, app: &mut BakeryApp, theme: &Theme) {
    let facade = app.admin.ingredients.clone();
    let state = facade.snapshot();

    let toolbar = common::render_toolbar(ui, &facade, &state, Some("New ingredient"), theme, |_| {});

    let rows = state.filtered();
    let (draw_table, retry) = common::render_load_state(ui, &state, rows.len(), theme);

    let mut clicked: Option<(RowAction, Ingredient)> = None;
    if draw_table {
        tables::table(ui, "ingredients_table", 3)
            .header(24.0, |mut header| {
                tables::header_cells(&mut header, &["Name", "Stock", "Unit", "Actions"], theme)
            })
            .body(|body| {
                body.rows(tables::ROW_HEIGHT, rows.len(), |mut row| {
                    let ingredient = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(&ingredient.name);
                    });
                    row.col(|ui| {
                        let stock = format!("{:.2}", ingredient.stock_quantity);
                        if ingredient.stock_quantity <= 0.0 {
                            ui.colored_label(theme.error, stock);
                        } else {
                            ui.label(stock);
                        }
                    });
                    row.col(|ui| {
                        ui.label(ingredient.unit.symbol());
                    });
                    row.col(|ui| {
                        if let Some(action) = tables::row_actions(ui, &[RowAction::Edit, RowAction::Delete], state.is_deleting) {
                            clicked = Some((action, ingredient.clone()));
                        }
                    });
                });
            });
    }

    if toolbar.refresh || retry {
        app.handle_refresh();
    }
    if toolbar.create {
        app.handle_open_create::<Ingredient>();
    }
    match clicked {
        Some((RowAction::Edit, ingredient)) => app.handle_open_edit(ingredient),
        Some((RowAction::Delete, ingredient)) => facade.open_delete(ingredient.id),
        _ => {}
    }
}

pub fn render_modals(ctx: &egui::Context, app: &mut BakeryApp, theme: &Theme) {
    common::render_edit_modal::<Ingredient>(ctx, app, theme, render_fields);
    common::render_delete_confirm::<Ingredient>(ctx, app, |ingredient| ingredient.name.clone());
}

fn render_fields(ui: &mut egui::Ui, editor: &mut IngredientEditor) {
    forms::render_text_input(ui, "Name", &mut editor.name, "Flour", false);
    forms::render_text_input(ui, "Stock", &mut editor.stock_quantity, "0", false);

    ui.label("Unit");
    egui::ComboBox::from_id_salt("ingredient_unit_edit")
        .selected_text(editor.unit.symbol())
        .show_ui(ui, |ui| {
            for unit in IngredientUnit::all() {
                ui.selectable_value(&mut editor.unit, *unit, unit.symbol());
            }
        });
}
