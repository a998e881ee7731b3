//! # Customer Dashboard Screen
//!
//! Catalog grid with search on the left, cart and checkout on the right.

use shared::{format_price, Product};

use crate::app::BakeryApp;
use crate::facades::{CartItem, CustomerState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, header, layouts, tables};

const PRODUCT_CARD: egui::Vec2 = egui::vec2(190.0, 150.0);

/// Cart/catalog interaction collected during the frame and applied after drawing
#[derive(Debug, Clone)]
enum StoreAction {
    Add(Product),
    SetQuantity(i64, i64),
    Remove(i64),
    Clear,
    Checkout,
    Search,
    ShowAll,
}

pub fn render(ctx: &egui::Context, app: &mut BakeryApp, theme: &Theme) {
    let state = app.customer.snapshot();
    let user_name = app
        .auth
        .current_user()
        .map(|user| user.full_name())
        .unwrap_or_default();

    let mut actions = Vec::new();
    let mut logout = false;

    egui::TopBottomPanel::top("customer_header").show(ctx, |ui| {
        let title = format!("Bakery  ({} in cart)", state.cart_item_count());
        logout = header::render_header(ui, &title, &user_name, theme);
    });

    egui::SidePanel::right("cart")
        .resizable(false)
        .exact_width(320.0)
        .show(ctx, |ui| {
            render_cart(ui, &state, &mut app.checkout.special_instructions, &mut actions, theme);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        render_catalog_toolbar(ui, app, &state, &mut actions);
        ui.separator();
        render_catalog(ui, &state, &mut actions, theme);
    });

    if logout {
        app.handle_logout();
        return;
    }
    for action in actions {
        apply(app, action);
    }
}

fn apply(app: &mut BakeryApp, action: StoreAction) {
    match action {
        StoreAction::Add(product) => app.customer.add_to_cart(&product),
        StoreAction::SetQuantity(product_id, quantity) => app.customer.update_quantity(product_id, quantity),
        StoreAction::Remove(product_id) => app.customer.remove_from_cart(product_id),
        StoreAction::Clear => app.customer.clear_cart(),
        StoreAction::Checkout => app.handle_checkout(),
        StoreAction::Search => app.handle_catalog_search(),
        StoreAction::ShowAll => app.handle_reload_catalog(),
    }
}

fn render_catalog_toolbar(ui: &mut egui::Ui, app: &mut BakeryApp, state: &CustomerState, actions: &mut Vec<StoreAction>) {
    ui.horizontal(|ui| {
        let search = ui.add(
            egui::TextEdit::singleline(&mut app.checkout.catalog_query)
                .hint_text("Search products...")
                .desired_width(260.0),
        );
        // Typing filters the loaded list; Enter asks the server
        if search.changed() {
            app.customer.set_search_term(&app.checkout.catalog_query);
        }
        if forms::submitted(ui, &search) || ui.button("Search").clicked() {
            actions.push(StoreAction::Search);
        }
        if ui.button("Show all").clicked() {
            actions.push(StoreAction::ShowAll);
        }
        if state.is_loading {
            ui.spinner();
        }
    });
}

fn render_catalog(ui: &mut egui::Ui, state: &CustomerState, actions: &mut Vec<StoreAction>, theme: &Theme) {
    if let Some(error) = state.error.as_deref() {
        forms::render_error(ui, error, theme);
        if ui.button("Retry").clicked() {
            actions.push(StoreAction::ShowAll);
        }
        return;
    }

    let products = state.filtered_products();
    if products.is_empty() {
        if state.is_loading {
            tables::render_loading(ui, "Loading products...");
        } else {
            tables::render_empty_state(ui, "No products found", Some("Try another search"), theme);
        }
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for product in &products {
                layouts::render_card(ui, PRODUCT_CARD, |ui| {
                    ui.label(egui::RichText::new(&product.name).strong().size(16.0));
                    ui.add(egui::Label::new(egui::RichText::new(&product.description).color(theme.dim)).truncate());
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new(format_price(product.price)).color(theme.selected).size(18.0));
                    ui.add_space(6.0);
                    if ui.button("Add to cart").clicked() {
                        actions.push(StoreAction::Add(product.clone()));
                    }
                });
            }
        });
    });
}

fn render_cart(
    ui: &mut egui::Ui,
    state: &CustomerState,
    notes: &mut String,
    actions: &mut Vec<StoreAction>,
    theme: &Theme,
) {
    ui.add_space(8.0);
    ui.heading("Your cart");
    ui.separator();

    if state.cart.is_empty() {
        tables::render_empty_state(ui, "Your cart is empty", Some("Add something sweet"), theme);
    } else {
        egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
            for item in &state.cart {
                render_cart_line(ui, item, actions);
                ui.separator();
            }
        });
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Total").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format_price(state.cart_total())).strong().color(theme.selected));
        });
    });

    ui.add_space(8.0);
    forms::render_text_area(ui, "Special instructions", notes, "Birthday message, allergies...");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if forms::render_submit_button(ui, "Place order", state.is_creating_order, theme) {
            actions.push(StoreAction::Checkout);
        }
        if ui.add_enabled(!state.cart.is_empty(), egui::Button::new("Clear")).clicked() {
            actions.push(StoreAction::Clear);
        }
    });
}

fn render_cart_line(ui: &mut egui::Ui, item: &CartItem, actions: &mut Vec<StoreAction>) {
    let id = item.product.id;
    let quantity = i64::from(item.quantity);

    ui.label(egui::RichText::new(&item.product.name).strong());
    ui.horizontal(|ui| {
        if ui.small_button("-").clicked() {
            actions.push(StoreAction::SetQuantity(id, quantity - 1));
        }
        ui.label(item.quantity.to_string());
        if ui.small_button("+").clicked() {
            actions.push(StoreAction::SetQuantity(id, quantity + 1));
        }
        ui.label(format!("x {}", format_price(item.product.price)));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("x").clicked() {
                actions.push(StoreAction::Remove(id));
            }
            ui.label(format_price(item.subtotal()));
        });
    });
}
