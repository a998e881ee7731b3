//! Orders tab: status filter, status/notes edit, order detail and the status manager.

use shared::{Order, OrderStatus, Product};

use crate::app::{BakeryApp, OrderEditor, OrderStatusEditor};
use crate::facades::{EntityFacade, ManagementState, OrderManagementFacade};
use crate::ui::theme::Theme;
use crate::ui::widgets::tables::{self, RowAction};
use crate::ui::widgets::{forms, modal};

use super::common;

fn status_label(orders: &OrderManagementFacade, status_id: i64) -> String {
    orders
        .status_name(status_id)
        .unwrap_or_else(|| format!("Status #{}", status_id))
}

pub fn render(ui: &mut egui::Ui, app: &mut BakeryApp, theme: &Theme) {
    let orders = app.admin.orders.clone();
    let facade = orders.orders().clone();
    let state = facade.snapshot();
    let statuses = orders.statuses();

    let toolbar = common::render_toolbar(ui, &facade, &state, None, theme, |ui| {
        render_filters(ui, &facade, &state, &statuses);
    });
    let manage_statuses = ui.button("Manage statuses").clicked();
    ui.add_space(4.0);

    let rows = state.filtered();
    let (draw_table, retry) = common::render_load_state(ui, &state, rows.len(), theme);

    let mut clicked: Option<(RowAction, Order)> = None;
    if draw_table {
        tables::table(ui, "orders_table", 6)
            .header(24.0, |mut header| {
                tables::header_cells(
                    &mut header,
                    &["Order", "Customer", "Date", "Total", "Status", "Notes", "Actions"],
                    theme,
                )
            })
            .body(|body| {
                body.rows(tables::ROW_HEIGHT, rows.len(), |mut row| {
                    let order = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(format!("#{}", order.id));
                    });
                    row.col(|ui| {
                        ui.label(format!("User #{}", order.user_id));
                    });
                    row.col(|ui| {
                        ui.label(common::timestamp(order.order_date.as_deref()));
                    });
                    row.col(|ui| {
                        ui.label(shared::format_price(order.total_amount));
                    });
                    row.col(|ui| {
                        let name = status_label(&orders, order.status_id);
                        ui.colored_label(theme.order_status_color(&name), name);
                    });
                    row.col(|ui| {
                        ui.add(egui::Label::new(order.special_instructions.as_deref().unwrap_or("-")).truncate());
                    });
                    row.col(|ui| {
                        let actions = [RowAction::View, RowAction::Edit, RowAction::Delete];
                        if let Some(action) = tables::row_actions(ui, &actions, state.is_deleting) {
                            clicked = Some((action, order.clone()));
                        }
                    });
                });
            });
    }

    if toolbar.refresh || retry {
        app.handle_refresh();
    }
    if manage_statuses {
        app.handle_open_status_manager();
    }
    match clicked {
        Some((RowAction::View, order)) => facade.select(order),
        Some((RowAction::Edit, order)) => app.handle_open_edit(order),
        Some((RowAction::Delete, order)) => facade.open_delete(order.id),
        None => {}
    }
}

fn render_filters(ui: &mut egui::Ui, facade: &EntityFacade<Order>, state: &ManagementState<Order>, statuses: &[OrderStatus]) {
    let mut filter = state.filter;
    let selected = filter
        .status_id
        .and_then(|id| statuses.iter().find(|status| status.id == id))
        .map(|status| status.status_name.clone())
        .unwrap_or_else(|| "All statuses".to_string());

    egui::ComboBox::from_id_salt("order_status_filter")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut filter.status_id, None, "All statuses");
            for status in statuses {
                ui.selectable_value(&mut filter.status_id, Some(status.id), status.status_name.as_str());
            }
        });

    if filter != state.filter {
        facade.set_filter(filter);
    }
}

pub fn render_modals(ctx: &egui::Context, app: &mut BakeryApp, theme: &Theme) {
    let statuses = app.admin.orders.statuses();
    common::render_edit_modal::<Order>(ctx, app, theme, |ui, editor| render_fields(ui, editor, &statuses));
    common::render_delete_confirm::<Order>(ctx, app, |order| format!("order #{}", order.id));
    render_detail(ctx, app, theme);

    if app.editors.status_manager_open {
        render_status_manager(ctx, app, theme);
        common::render_edit_modal::<OrderStatus>(ctx, app, theme, render_status_fields);
        common::render_delete_confirm::<OrderStatus>(ctx, app, |status| status.status_name.clone());
    }
}

fn render_fields(ui: &mut egui::Ui, editor: &mut OrderEditor, statuses: &[OrderStatus]) {
    ui.label("Status");
    let selected = statuses
        .iter()
        .find(|status| status.id == editor.status_id)
        .map(|status| status.status_name.clone())
        .unwrap_or_else(|| format!("Status #{}", editor.status_id));
    egui::ComboBox::from_id_salt("order_status_edit")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for status in statuses {
                ui.selectable_value(&mut editor.status_id, status.id, status.status_name.as_str());
            }
        });

    forms::render_text_area(ui, "Special instructions", &mut editor.special_instructions, "");
}

fn render_detail(ctx: &egui::Context, app: &mut BakeryApp, theme: &Theme) {
    let facade = app.admin.orders.orders().clone();
    let Some(order) = facade.snapshot().selected else {
        return;
    };
    let status = status_label(&app.admin.orders, order.status_id);
    // Product names for the item list, when the products tab has been loaded
    let products = app.admin.products.items();

    let open = modal::render_modal(ctx, &format!("Order #{}", order.id), 420.0, |ui| {
        egui::Grid::new("order_detail").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
            common::detail_row(ui, "Customer", format!("User #{}", order.user_id), theme);
            common::detail_row(ui, "Date", common::timestamp(order.order_date.as_deref()), theme);
            common::detail_row(
                ui,
                "Status",
                egui::RichText::new(&status).color(theme.order_status_color(&status)),
                theme,
            );
            common::detail_row(ui, "Total", shared::format_price(order.total_amount), theme);
            common::detail_row(ui, "Completed", common::timestamp(order.completed_at.as_deref()), theme);
            common::detail_row(ui, "Notes", order.special_instructions.as_deref().unwrap_or("-"), theme);
        });

        ui.separator();
        match order.items.as_deref() {
            Some(items) if !items.is_empty() => {
                egui::Grid::new("order_items").num_columns(3).striped(true).show(ui, |ui| {
                    for item in items {
                        ui.label(product_name(&products, item.product_id));
                        ui.label(format!("x{}", item.quantity));
                        ui.label(shared::format_price(item.price_per_unit * f64::from(item.quantity)));
                        ui.end_row();
                    }
                });
            }
            _ => {
                ui.colored_label(theme.dim, "No item details for this order");
            }
        }
    });

    if !open {
        facade.close_detail();
    }
}

fn product_name(products: &[Product], id: i64) -> String {
    products
        .iter()
        .find(|product| product.id == id)
        .map(|product| product.name.clone())
        .unwrap_or_else(|| format!("Product #{}", id))
}

fn render_status_manager(ctx: &egui::Context, app: &mut BakeryApp, theme: &Theme) {
    let facade = app.admin.order_statuses.clone();
    let state = facade.snapshot();

    let mut create = false;
    let mut clicked: Option<(RowAction, OrderStatus)> = None;
    let open = modal::render_modal(ctx, "Order statuses", 360.0, |ui| {
        if state.is_loading {
            ui.spinner();
        }
        if let Some(error) = state.error.as_deref() {
            forms::render_error(ui, error, theme);
        }

        egui::Grid::new("status_manager").num_columns(2).striped(true).show(ui, |ui| {
            for status in &state.items {
                ui.colored_label(theme.order_status_color(&status.status_name), status.status_name.as_str());
                ui.horizontal(|ui| {
                    let actions = [RowAction::Edit, RowAction::Delete];
                    if let Some(action) = tables::row_actions(ui, &actions, state.is_deleting) {
                        clicked = Some((action, status.clone()));
                    }
                });
                ui.end_row();
            }
        });

        ui.add_space(8.0);
        create = ui.button("+ New status").clicked();
    });

    if !open {
        app.handle_close_status_manager();
        return;
    }
    if create {
        app.handle_open_create::<OrderStatus>();
    }
    match clicked {
        Some((RowAction::Edit, status)) => app.handle_open_edit(status),
        Some((RowAction::Delete, status)) => facade.open_delete(status.id),
        _ => {}
    }
}

fn render_status_fields(ui: &mut egui::Ui, editor: &mut OrderStatusEditor) {
    forms::render_text_input(ui, "Status name", &mut editor.status_name, "Ready for pickup", false);
}
