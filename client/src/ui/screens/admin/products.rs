//! Products tab.

use shared::{Category, Product};

use crate::app::{BakeryApp, ProductEditor};
use crate::facades::{EntityFacade, ManagementState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::widgets::tables::{self, RowAction};

use super::common;

fn category_name(categories: &[Category], id: i64) -> String {
    categories
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.name.clone())
        .unwrap_or_else(|| "Uncategorized".to_string())
}

pub fn render(ui: &mut egui::Ui, app: &mut BakeryApp, theme: &Theme) {
    let facade = app.admin.products.clone();
    let state = facade.snapshot();
    let categories = app.admin.categories.items();

    let toolbar = common::render_toolbar(ui, &facade, &state, Some("New product"), theme, |ui| {
        render_filters(ui, &facade, &state, &categories)
    });

    let rows = state.filtered();
    let (draw_table, retry) = common::render_load_state(ui, &state, rows.len(), theme);

    let mut clicked: Option<(RowAction, Product)> = None;
    if draw_table {
        tables::table(ui, "products_table", 4)
            .header(24.0, |mut header| {
                tables::header_cells(&mut header, &["Name", "Category", "Price", "Description", "Actions"], theme)
            })
            .body(|body| {
                body.rows(tables::ROW_HEIGHT, rows.len(), |mut row| {
                    let product = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(&product.name);
                    });
                    row.col(|ui| {
                        ui.label(category_name(&categories, product.category_id));
                    });
                    row.col(|ui| {
                        ui.label(shared::format_price(product.price));
                    });
                    row.col(|ui| {
                        ui.add(egui::Label::new(&product.description).truncate());
                    });
                    row.col(|ui| {
                        if let Some(action) = tables::row_actions(ui, &[RowAction::Edit, RowAction::Delete], state.is_deleting) {
                            clicked = Some((action, product.clone()));
                        }
                    });
                });
            });
    }

    if toolbar.refresh || retry {
        app.handle_refresh();
    }
    if toolbar.create {
        app.handle_open_create::<Product>();
    }
    match clicked {
        Some((RowAction::Edit, product)) => app.handle_open_edit(product),
        Some((RowAction::Delete, product)) => facade.open_delete(product.id),
        _ => {}
    }
}

fn render_filters(
    ui: &mut egui::Ui,
    facade: &EntityFacade<Product>,
    state: &ManagementState<Product>,
    categories: &[Category],
) {
    let mut filter = state.filter;
    let selected = match filter.category_id {
        Some(id) => category_name(categories, id),
        None => "All categories".to_string(),
    };

    egui::ComboBox::from_id_salt("product_category_filter")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut filter.category_id, None, "All categories");
            for category in categories {
                ui.selectable_value(&mut filter.category_id, Some(category.id), category.name.as_str());
            }
        });

    if filter != state.filter {
        facade.set_filter(filter);
    }
}

pub fn render_modals(ctx: &egui::Context, app: &mut BakeryApp, theme: &Theme) {
    let categories = app.admin.categories.items();
    common::render_edit_modal::<Product>(ctx, app, theme, |ui, editor| {
        render_fields(ui, editor, &categories)
    });
    common::render_delete_confirm::<Product>(ctx, app, |product| product.name.clone());
}

fn render_fields(ui: &mut egui::Ui, editor: &mut ProductEditor, categories: &[Category]) {
    forms::render_text_input(ui, "Name", &mut editor.name, "Chocolate cake", false);
    forms::render_text_area(ui, "Description", &mut editor.description, "");
    forms::render_text_input(ui, "Price", &mut editor.price, "0.00", false);
    forms::render_text_input(ui, "Image URL", &mut editor.image, "Optional", false);

    ui.label("Category");
    let selected = editor
        .category_id
        .map(|id| category_name(categories, id))
        .unwrap_or_else(|| "Select a category".to_string());
    egui::ComboBox::from_id_salt("product_category_edit")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for category in categories {
                ui.selectable_value(&mut editor.category_id, Some(category.id), category.name.as_str());
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facades::entity::tests::category;

    #[test]
    fn test_category_name_falls_back() {
        let categories = vec![category(1, "Cakes")];
        assert_eq!(category_name(&categories, 1), "Cakes");
        assert_eq!(category_name(&categories, 7), "Uncategorized");
    }
}
