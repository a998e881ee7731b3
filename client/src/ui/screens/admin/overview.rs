//! Overview tab: greeting and the four counters.

use crate::app::BakeryApp;
use crate::facades::{DashboardStats, DashboardTab};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, layouts};

const CARD_SIZE: egui::Vec2 = egui::vec2(170.0, 90.0);

pub fn render(ui: &mut egui::Ui, app: &mut BakeryApp, theme: &Theme) {
    let stats = app.admin.dashboard.state().stats();

    ui.heading(format!("Welcome, {}", app.admin.dashboard.user_name()));
    ui.add_space(12.0);

    if let Some(error) = stats.error.as_deref() {
        forms::render_error(ui, error, theme);
    }

    let mut open_tab = None;
    ui.horizontal_wrapped(|ui| {
        for (tab, label, value) in counters(&stats) {
            let response = layouts::render_card(ui, CARD_SIZE, |ui| {
                ui.label(egui::RichText::new(label).color(theme.dim));
                if stats.is_loading {
                    ui.spinner();
                } else {
                    ui.label(egui::RichText::new(value.to_string()).size(30.0).strong().color(theme.selected));
                }
            });
            if response.interact(egui::Sense::click()).clicked() {
                open_tab = Some(tab);
            }
        }
    });

    ui.add_space(12.0);
    if ui.add_enabled(!stats.is_loading, egui::Button::new("Refresh")).clicked() {
        app.handle_refresh();
    }
    if let Some(tab) = open_tab {
        app.handle_tab_change(tab);
    }
}

fn counters(stats: &DashboardStats) -> [(DashboardTab, &'static str, usize); 4] {
    [
        (DashboardTab::Users, "Users", stats.total_users),
        (DashboardTab::Products, "Products", stats.total_products),
        (DashboardTab::Categories, "Categories", stats.total_categories),
        (DashboardTab::Ingredients, "Ingredients", stats.total_ingredients),
    ]
}
